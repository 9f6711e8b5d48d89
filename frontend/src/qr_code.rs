use gloo_timers::callback::Timeout;
use shared::share::{qr_image_url, QR_DOWNLOAD_FILENAME};
use yew::prelude::*;

use crate::browser;
use crate::config::CONFIG;
use crate::styles::*;
use crate::toast::use_toaster;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub url: String,
    #[prop_or(CONFIG.qr.size)]
    pub size: u32,
}

#[function_component]
pub fn QrCode(props: &Props) -> Html {
    let copied = use_state(|| false);
    let toaster = use_toaster();

    let image_url = use_memo(|(url, size): &(String, u32)| {
        qr_image_url(url, &CONFIG.qr.clone().with_size(*size))
    }, (props.url.clone(), props.size));

    let on_copy = {
        let url = props.url.clone();
        let copied = copied.clone();
        let toaster = toaster.clone();
        Callback::from(move |_: MouseEvent| {
            let url = url.clone();
            let copied = copied.clone();
            let toaster = toaster.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match browser::copy_to_clipboard(&url).await {
                    Ok(()) => {
                        copied.set(true);
                        toaster.success("Link copied to clipboard");
                        Timeout::new(CONFIG.copied_reset_ms, move || copied.set(false)).forget();
                    }
                    Err(e) => {
                        log::warn!("clipboard write failed: {e}");
                        toaster.error("Could not copy the link");
                    }
                }
            });
        })
    };

    let on_download = {
        let image_url = image_url.clone();
        let toaster = toaster.clone();
        Callback::from(move |_: MouseEvent| {
            match browser::download(&image_url, QR_DOWNLOAD_FILENAME) {
                Ok(()) => toaster.success("QR Code downloaded"),
                Err(e) => {
                    log::warn!("qr download failed: {e}");
                    toaster.error("Could not download the QR Code");
                }
            }
        })
    };

    if props.url.is_empty() {
        return html! {};
    }

    let size = props.size.to_string();
    html! {
        <div class="flex flex-col items-center gap-4 w-full">
            <div class="relative group p-4 bg-neutral-950 rounded-xl border border-neutral-800">
                <img src={(*image_url).clone()} alt="QR Code" width={size.clone()} height={size} class="rounded-lg" />
                <button
                    type="button"
                    onclick={on_download}
                    aria-label="Download QR Code"
                    class={combine_classes(BUTTON_ICON, "absolute top-2 right-2 bg-neutral-900/80")}
                >
                    {"⤓"}
                </button>
            </div>
            <div class="flex w-full gap-2">
                <input type="text" readonly=true value={props.url.clone()} class={combine_classes(INPUT_BASE, "text-sm")} />
                <button type="button" onclick={on_copy} aria-label="Copy to clipboard" class={BUTTON_ICON}>
                    {if *copied { html! { <span class={TEXT_ACCENT}>{"✓"}</span> } } else { html! { {"⧉"} } }}
                </button>
            </div>
        </div>
    }
}
