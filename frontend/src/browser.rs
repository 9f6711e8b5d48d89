use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

pub enum ShareOutcome {
    Shared,
    Copied,
}

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

pub fn origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

fn navigator_method(name: &str) -> Option<(JsValue, Function)> {
    let navigator: JsValue = web_sys::window()?.navigator().into();
    let method = Reflect::get(&navigator, &JsValue::from_str(name)).ok()?;
    method.dyn_into::<Function>().ok().map(|method| (navigator, method))
}

async fn await_promise(value: JsValue) -> Result<(), String> {
    let promise = value.dyn_into::<Promise>().map_err(js_error)?;
    JsFuture::from(promise).await.map(|_| ()).map_err(js_error)
}

pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let navigator: JsValue = web_sys::window().ok_or("No browser window")?.navigator().into();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard")).map_err(js_error)?;
    if clipboard.is_undefined() {
        return Err("Clipboard is not available".into());
    }
    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(js_error)?
        .dyn_into::<Function>()
        .map_err(js_error)?;
    await_promise(write_text.call1(&clipboard, &JsValue::from_str(text)).map_err(js_error)?).await
}

/// Uses the Web Share API when the browser has it, otherwise copies `url`.
pub async fn share_or_copy(title: &str, text: &str, url: &str) -> Result<ShareOutcome, String> {
    if let Some((navigator, share)) = navigator_method("share") {
        let data = Object::new();
        for (key, value) in [("title", title), ("text", text), ("url", url)] {
            Reflect::set(&data, &JsValue::from_str(key), &JsValue::from_str(value)).map_err(js_error)?;
        }
        await_promise(share.call1(&navigator, &data).map_err(js_error)?).await?;
        return Ok(ShareOutcome::Shared);
    }
    copy_to_clipboard(url).await.map(|_| ShareOutcome::Copied)
}

pub fn download(href: &str, filename: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or("No document available")?;
    let body = document.body().ok_or("No document body")?;

    let link = document.create_element("a")
        .map_err(js_error)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "Failed to create link".to_string())?;
    link.set_href(href);
    link.set_download(filename);

    body.append_child(&link).map_err(js_error)?;
    link.click();
    body.remove_child(&link).map_err(js_error)?;
    Ok(())
}

pub fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}
