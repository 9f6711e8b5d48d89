use crate::page::render_error;
use yew::prelude::*;

#[function_component]
pub fn NotFound() -> Html {
    render_error("Page not found")
}
