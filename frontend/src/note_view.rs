use shared::{ErrorCode, Note};
use yew::prelude::*;

use crate::page::{render_error, render_loading, PageHeader};
use crate::session::repository;
use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: String,
}

#[derive(Default)]
enum State {
    #[default]
    Loading,
    Ready(Note),
    Error(String),
}

pub struct NoteView {
    state: State,
}

impl Component for NoteView {
    type Message = Result<Note, String>;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let id = ctx.props().id.clone();
        ctx.link().send_message(load_note(&id));
        Self { state: State::default() }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.state = State::Loading;
        ctx.link().send_message(load_note(&ctx.props().id));
        true
    }

    fn update(&mut self, _: &Context<Self>, msg: Self::Message) -> bool {
        self.state = match msg {
            Ok(note) => State::Ready(note),
            Err(err) => State::Error(err),
        };
        true
    }

    fn view(&self, _: &Context<Self>) -> Html {
        match &self.state {
            State::Loading => render_loading(),
            State::Error(err) => render_error(err),
            State::Ready(note) => html! {
                <div class={BG_PAGE}>
                    <PageHeader />
                    <main class={CONTAINER_SM}>
                        <div class={CARD}>
                            <h1 class={HEADING_MD}>{"Shared Note"}</h1>
                            <div class="whitespace-pre-wrap break-words text-neutral-200 leading-relaxed">
                                {&note.text}
                            </div>
                        </div>
                    </main>
                </div>
            },
        }
    }
}

fn load_note(id: &str) -> Result<Note, String> {
    repository()
        .and_then(|repo| repo.load_note(id))
        .map_err(|e| {
            log::warn!("loading note {id}: {e}");
            if e.is(ErrorCode::NotFound) { e.message } else { "Failed to load note".to_string() }
        })
}
