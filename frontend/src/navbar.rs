use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::browser;
use crate::config::CONFIG;
use crate::session::use_session;
use crate::styles::*;
use crate::toast::use_toaster;
use crate::Route;

const NAV_LINK: &str = "text-neutral-300 hover:text-white transition-colors";

#[function_component]
pub fn Navbar() -> Html {
    let is_open = use_state(|| false);
    let scrolled = use_state(|| false);
    let route = use_route::<Route>();
    let session = use_session();
    let toaster = use_toaster();

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = Closure::<dyn Fn()>::new(move || {
                scrolled.set(browser::scroll_y() > CONFIG.navbar_scroll_threshold);
            });
            let window = web_sys::window();
            if let Some(window) = &window {
                if let Err(e) = window.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref()) {
                    log::warn!("could not watch scrolling: {e:?}");
                }
            }
            move || {
                if let Some(window) = window {
                    if let Err(e) = window.remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref()) {
                        log::warn!("could not stop watching scrolling: {e:?}");
                    }
                }
            }
        }, ());
    }

    {
        let is_open = is_open.clone();
        use_effect_with_deps(move |_| {
            is_open.set(false);
            || ()
        }, route);
    }

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };

    let logged_in = session.as_ref().map(|s| s.logged_in()).unwrap_or(false);
    let log_out = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(session) = &session else { return };
            match session.log_out() {
                Ok(()) => toaster.info("Logged out"),
                Err(e) => toaster.error(e.message),
            }
        })
    };

    let account_link = |extra: &str| if logged_in {
        html! {
            <button type="button" onclick={log_out.clone()} class={combine_classes(&button_secondary(), extra)}>
                {"Logout"}
            </button>
        }
    } else {
        html! {
            <Link<Route> to={Route::Auth} classes={classes!(button_primary(false), extra.to_string())}>
                {"Login"}
            </Link<Route>>
        }
    };

    let nav_class = if *scrolled {
        "py-3 bg-black/80 backdrop-blur-lg shadow-lg"
    } else {
        "py-5 bg-transparent"
    };

    html! {
        <nav class={combine_classes("fixed top-0 w-full z-50 transition-all duration-300", nav_class)}>
            <div class="container mx-auto px-6 flex justify-between items-center">
                <Link<Route> to={Route::Home} classes="text-2xl font-bold text-white">
                    {"Qr"}<span class={TEXT_ACCENT}>{"Notes"}</span>
                </Link<Route>>

                <div class="hidden md:flex items-center space-x-8">
                    <a href="/#notes" class={NAV_LINK}>{"Notes"}</a>
                    <a href="/#polls" class={NAV_LINK}>{"Polls"}</a>
                    {account_link("")}
                </div>

                <button
                    type="button"
                    class={combine_classes(BUTTON_ICON, "md:hidden")}
                    onclick={toggle}
                    aria-label={if *is_open { "Close menu" } else { "Open menu" }}
                >
                    {if *is_open { "✕" } else { "☰" }}
                </button>
            </div>

            if *is_open {
                <div class="md:hidden bg-black/95 border-t border-neutral-800">
                    <div class="container mx-auto px-6 py-4 flex flex-col space-y-4">
                        <a href="/#notes" class={NAV_LINK}>{"Notes"}</a>
                        <a href="/#polls" class={NAV_LINK}>{"Polls"}</a>
                        {account_link("w-full text-center")}
                    </div>
                </div>
            }
        </nav>
    }
}
