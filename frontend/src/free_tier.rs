use shared::ContentKind;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::session::repository;
use crate::styles::*;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub kind: ContentKind,
    /// Bumped by the parent after each creation so the count is re-read.
    pub refresh: u32,
}

#[function_component]
pub fn FreeTierBanner(props: &Props) -> Html {
    let kind = props.kind;
    let remaining = use_memo(move |_| {
        repository()
            .and_then(|repo| repo.remaining_free(kind))
            .unwrap_or_else(|e| {
                log::warn!("could not read free tier usage: {e}");
                None
            })
    }, props.refresh);

    let Some(remaining) = *remaining else {
        return html! {};
    };

    let limit = kind.free_limit();
    let noun = if limit == 1 { kind.label().to_string() } else { format!("{}s", kind.label()) };

    html! {
        <div class="mt-6 inline-flex flex-wrap items-center justify-center gap-2 px-4 py-2 rounded-lg bg-neutral-900 border border-neutral-800 text-sm">
            <span class="text-neutral-300">
                {format!("Free tier: {remaining} of {limit} {noun} remaining.")}
            </span>
            <Link<Route> to={Route::Auth} classes={classes!(TEXT_ACCENT, "hover:underline")}>
                {"Log in for unlimited access"}
            </Link<Route>>
        </div>
    }
}
