use yew::prelude::*;
use yew_router::prelude::*;

mod auth;
mod browser;
mod config;
mod free_tier;
mod home;
mod navbar;
mod not_found;
mod note_create;
mod note_view;
mod page;
mod poll_create;
mod poll_option_editor;
mod poll_results;
mod poll_view;
mod qr_code;
mod session;
mod styles;
mod toast;

use crate::{
    auth::Auth,
    home::Home,
    navbar::Navbar,
    not_found::NotFound,
    note_view::NoteView,
    poll_results::PollResults,
    poll_view::PollView,
    session::SessionProvider,
    toast::ToastProvider,
};

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Home,
    #[at("/auth")] Auth,
    #[at("/note/:id")] Note { id: String },
    #[at("/poll/:id")] Poll { id: String },
    #[at("/poll-results/:id")] PollResults { id: String },
    #[not_found]
    #[at("/404")] NotFound,
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <ToastProvider>
                    <div class="min-h-screen bg-black text-white">
                        <Switch<Route> render={switch} />
                    </div>
                </ToastProvider>
            </SessionProvider>
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    log::debug!("navigating to {route:?}");
    match route {
        Route::Home => html! { <><Navbar /><Home /></> },
        Route::Auth => html! { <Auth /> },
        Route::Note { id } => html! { <NoteView {id} /> },
        Route::Poll { id } => html! { <PollView {id} /> },
        Route::PollResults { id } => html! { <PollResults {id} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("starting {}", config::CONFIG.app_name);
    yew::Renderer::<App>::new().render();
}
