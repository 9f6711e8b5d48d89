use yew::prelude::*;
use yew_router::prelude::*;

use crate::{Route, styles::*};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Top bar of the standalone pages: a back link plus optional actions.
#[function_component]
pub fn PageHeader(props: &HeaderProps) -> Html {
    html! {
        <header class="border-b border-neutral-800">
            <div class="container mx-auto px-6 py-4 flex justify-between items-center">
                <Link<Route> to={Route::Home} classes="text-neutral-400 hover:text-white transition-colors">
                    {"← Back to Home"}
                </Link<Route>>
                <div class="flex items-center gap-2">{props.children.clone()}</div>
            </div>
        </header>
    }
}

pub fn render_loading() -> Html {
    html! {
        <div class={BG_PAGE}>
            <div class="flex items-center justify-center min-h-screen">
                <div class={SPINNER} />
            </div>
        </div>
    }
}

pub fn render_error(error: &str) -> Html {
    html! {
        <div class={BG_PAGE}>
            <div class="flex items-center justify-center min-h-screen px-6">
                <div class={combine_classes(CARD, "max-w-md w-full text-center")}>
                    <h1 class={HEADING_MD}>{"Oops!"}</h1>
                    <div class={alert_style("error")}>{error}</div>
                    <Link<Route> to={Route::Home} classes={classes!(button_primary(false))}>
                        {"Return to Home"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
