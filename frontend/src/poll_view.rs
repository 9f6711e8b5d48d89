use std::rc::Rc;

use shared::{ErrorCode, Poll, ValidationError};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::page::{render_error, render_loading, PageHeader};
use crate::session::repository;
use crate::styles::*;
use crate::toast::{toaster_from, Toaster};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: String,
}

enum State {
    Loading,
    Ready { poll: Rc<Poll>, has_voted: bool },
    Error(String),
}

pub enum Msg {
    Loaded(Result<(Poll, bool), String>),
    Select(usize),
    Submit,
}

pub struct PollView {
    state: State,
    selected: Option<usize>,
    submitting: bool,
    toaster: Toaster,
}

impl Component for PollView {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Loaded(load_poll(&ctx.props().id)));
        Self {
            state: State::Loading,
            selected: None,
            submitting: false,
            toaster: toaster_from(ctx),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.state = State::Loading;
        self.selected = None;
        ctx.link().send_message(Msg::Loaded(load_poll(&ctx.props().id)));
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok((poll, has_voted))) => {
                self.state = State::Ready { poll: Rc::new(poll), has_voted };
                true
            }
            Msg::Loaded(Err(err)) => {
                self.state = State::Error(err);
                true
            }
            Msg::Select(index) => {
                if self.submitting || matches!(self.state, State::Ready { has_voted: true, .. }) {
                    return false;
                }
                self.selected = Some(index);
                true
            }
            Msg::Submit => {
                if self.submitting {
                    return false;
                }
                let Some(index) = self.selected else {
                    self.toaster.error(ValidationError::NoOptionSelected.to_string());
                    return false;
                };

                self.submitting = true;
                let id = &ctx.props().id;
                match repository().and_then(|repo| repo.cast_vote(id, index)) {
                    Ok(poll) => {
                        self.state = State::Ready { poll: Rc::new(poll), has_voted: true };
                        self.toaster.success("Vote submitted successfully!");
                    }
                    Err(e) if e.is(ErrorCode::Conflict) => {
                        self.toaster.info(e.message);
                        if let State::Ready { has_voted, .. } = &mut self.state {
                            *has_voted = true;
                        }
                    }
                    Err(e) if e.is(ErrorCode::NotFound) => {
                        self.state = State::Error(e.message);
                    }
                    Err(e) => {
                        log::error!("vote on poll {id} failed: {e}");
                        self.toaster.error("Failed to submit vote");
                    }
                }
                self.submitting = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let id = ctx.props().id.clone();
        match &self.state {
            State::Loading => render_loading(),
            State::Error(err) => render_error(err),
            State::Ready { poll, has_voted } => html! {
                <div class={BG_PAGE}>
                    <PageHeader>
                        <Link<Route> to={Route::PollResults { id: id.clone() }} classes={classes!(button_secondary())}>
                            {"Results"}
                        </Link<Route>>
                    </PageHeader>
                    <main class={CONTAINER_SM}>
                        <div class={CARD}>
                            <h1 class={combine_classes(HEADING_MD, "break-words")}>{&poll.question}</h1>
                            {if *has_voted {
                                render_thanks(&id)
                            } else {
                                self.render_ballot(ctx, poll)
                            }}
                        </div>
                    </main>
                </div>
            },
        }
    }
}

impl PollView {
    fn render_ballot(&self, ctx: &Context<Self>, poll: &Poll) -> Html {
        html! {
            <div class={SPACE_Y_LG}>
                <div class={SPACE_Y_BASE}>
                    {for poll.options.iter().enumerate().map(|(index, option)| {
                        let selected = self.selected == Some(index);
                        let class = if selected {
                            "border-emerald-400 bg-emerald-400/10"
                        } else {
                            "border-neutral-700 hover:border-emerald-400/50"
                        };
                        html! {
                            <button
                                type="button"
                                class={combine_classes("w-full text-left p-4 rounded-lg border-2 transition-colors flex items-center gap-3", class)}
                                disabled={self.submitting}
                                onclick={ctx.link().callback(move |_| Msg::Select(index))}
                            >
                                <span class={combine_classes("w-5 h-5 rounded-full border-2 flex items-center justify-center",
                                    if selected { "border-emerald-400" } else { "border-neutral-500" })}>
                                    if selected {
                                        <span class="w-2.5 h-2.5 rounded-full bg-emerald-400" />
                                    }
                                </span>
                                <span class="break-words">{option}</span>
                            </button>
                        }
                    })}
                </div>
                <button
                    type="button"
                    class={button_primary(true)}
                    disabled={self.selected.is_none() || self.submitting}
                    onclick={ctx.link().callback(|_| Msg::Submit)}
                >
                    {if self.submitting { "Submitting..." } else { "Submit Vote" }}
                </button>
            </div>
        }
    }
}

fn render_thanks(id: &str) -> Html {
    html! {
        <div class="text-center py-8">
            <div class={combine_classes("text-5xl mb-4", TEXT_ACCENT)}>{"✓"}</div>
            <h2 class={HEADING_SM}>{"Thank you for voting!"}</h2>
            <p class={combine_classes(TEXT_MUTED, "mb-6")}>{"Your vote has been recorded."}</p>
            <Link<Route> to={Route::PollResults { id: id.to_string() }} classes={classes!(button_primary(false))}>
                {"View Results"}
            </Link<Route>>
        </div>
    }
}

fn load_poll(id: &str) -> Result<(Poll, bool), String> {
    let loaded = repository().and_then(|repo| Ok((repo.load_poll(id)?, repo.has_voted(id)?)));
    loaded.map_err(|e| {
        log::warn!("loading poll {id}: {e}");
        if e.is(ErrorCode::NotFound) { e.message } else { "Failed to load poll".to_string() }
    })
}
