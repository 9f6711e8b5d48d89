use std::rc::Rc;

use gloo_timers::callback::Interval;
use shared::share::poll_url;
use shared::{pluralize_votes, ErrorCode, Poll};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::browser::{self, ShareOutcome};
use crate::config::CONFIG;
use crate::page::{render_error, render_loading, PageHeader};
use crate::session::repository;
use crate::styles::*;
use crate::toast::{use_toaster, Toaster};
use crate::Route;

#[derive(Clone, Default, PartialEq)]
pub struct ResultsState {
    poll: Option<Rc<Poll>>,
    error: Option<String>,
    loading: bool,
}

pub enum Msg {
    Reset,
    Received(Poll),
    Error(String),
}

impl Reducible for ResultsState {
    type Action = Msg;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            Msg::Reset => {
                next = ResultsState { loading: true, ..ResultsState::default() };
            }
            Msg::Received(poll) => {
                if next.poll.as_deref() == Some(&poll) && !next.loading && next.error.is_none() {
                    return self;
                }
                next.poll = Some(Rc::new(poll));
                next.error = None;
                next.loading = false;
            }
            Msg::Error(error) => {
                next.error = Some(error);
                next.loading = false;
            }
        }
        Rc::new(next)
    }
}

fn fetch(id: &str, state: &UseReducerHandle<ResultsState>) {
    match repository().and_then(|repo| repo.load_poll(id)) {
        Ok(poll) => state.dispatch(Msg::Received(poll)),
        Err(e) => {
            log::warn!("refreshing results for poll {id}: {e}");
            let message = if e.is(ErrorCode::NotFound) { e.message } else { "Failed to load poll results".to_string() };
            state.dispatch(Msg::Error(message));
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: String,
}

#[function_component]
pub fn PollResults(props: &Props) -> Html {
    let state = use_reducer(|| ResultsState { loading: true, ..ResultsState::default() });
    let toaster = use_toaster();

    use_effect_with_deps({
        let state = state.clone();
        move |id: &String| {
            let id = id.clone();
            state.dispatch(Msg::Reset);
            fetch(&id, &state);

            let interval = Interval::new(CONFIG.results_refresh_ms, move || {
                log::debug!("polling storage for poll {id}");
                fetch(&id, &state);
            });
            move || drop(interval)
        }
    }, props.id.clone());

    if state.loading {
        return render_loading();
    }
    if let Some(error) = &state.error {
        return render_error(error);
    }
    let Some(poll) = state.poll.clone() else {
        return html! {};
    };

    let on_share = share_callback(&props.id, &poll.question, &toaster);

    html! {
        <div class={BG_PAGE}>
            <PageHeader>
                <button type="button" class={BUTTON_ICON} aria-label="Share poll" onclick={on_share.clone()}>
                    {"Share"}
                </button>
            </PageHeader>
            <main class={CONTAINER_SM}>
                <div class={CARD}>
                    <h1 class={combine_classes(HEADING_MD, "break-words")}>{&poll.question}</h1>
                    {render_tally(&poll)}
                </div>
                <div class="flex gap-4 mt-6">
                    <Link<Route> to={Route::Poll { id: props.id.clone() }} classes={classes!(button_primary(false), "flex-1", "text-center")}>
                        {"Vote"}
                    </Link<Route>>
                    <button type="button" class={combine_classes(&button_secondary(), "flex-1")} onclick={on_share}>
                        {"Share Poll"}
                    </button>
                </div>
            </main>
        </div>
    }
}

fn render_tally(poll: &Poll) -> Html {
    let tally = poll.tally();
    let leaders = tally.leaders();

    html! {
        <>
            <p class={combine_classes(TEXT_MUTED, "mb-6")}>
                {format!("{} total", pluralize_votes(tally.total_votes))}
            </p>
            <div class={SPACE_Y_LG}>
                {for tally.options.iter().enumerate().map(|(index, option)| {
                    let leading = leaders.contains(&index);
                    let fill = if leading { "bg-emerald-400" } else { "bg-emerald-400/50" };
                    html! {
                        <div>
                            <div class={combine_classes(FLEX_BETWEEN, "mb-2 gap-4")}>
                                <span class={combine_classes("break-words", if leading { "font-semibold text-white" } else { "text-neutral-200" })}>
                                    {&option.label}
                                </span>
                                <span class={combine_classes("font-mono", TEXT_ACCENT)}>{format!("{}%", option.percentage)}</span>
                            </div>
                            <div class={BAR_TRACK}>
                                <div class={combine_classes(BAR_FILL, fill)} style={format!("width: {}%", option.percentage)} />
                            </div>
                            <div class={combine_classes(TEXT_MUTED, "mt-1")}>{pluralize_votes(option.votes)}</div>
                        </div>
                    }
                })}
            </div>
        </>
    }
}

fn share_callback(id: &str, question: &str, toaster: &Toaster) -> Callback<MouseEvent> {
    let url = poll_url(&browser::origin(), id);
    let question = question.to_string();
    let toaster = toaster.clone();
    Callback::from(move |_: MouseEvent| {
        let url = url.clone();
        let question = question.clone();
        let toaster = toaster.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match browser::share_or_copy("Vote in this poll", &question, &url).await {
                Ok(ShareOutcome::Copied) => toaster.success("Poll link copied to clipboard"),
                Ok(ShareOutcome::Shared) => log::debug!("poll shared"),
                Err(e) => {
                    log::warn!("sharing poll failed: {e}");
                    toaster.error("Could not share the poll link");
                }
            }
        });
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poll(votes: Vec<u32>) -> Poll {
        let mut poll = Poll::new("Q?", &["A".to_string(), "B".to_string()]);
        poll.votes = votes;
        poll
    }

    #[test]
    fn test_refresh_without_changes_keeps_state() {
        let state = Rc::new(ResultsState::default()).reduce(Msg::Received(poll(vec![1, 0])));
        let same = state.clone().reduce(Msg::Received((*state.poll.clone().unwrap()).clone()));
        assert!(Rc::ptr_eq(&state, &same));

        let changed = state.clone().reduce(Msg::Received(poll(vec![1, 1])));
        assert!(!Rc::ptr_eq(&state, &changed));
        assert_eq!(changed.poll.as_ref().unwrap().votes, vec![1, 1]);
    }

    #[test]
    fn test_errors_replace_loading() {
        let state = Rc::new(ResultsState::default()).reduce(Msg::Reset);
        assert!(state.loading);
        let state = state.reduce(Msg::Error("Poll not found".into()));
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Poll not found"));
    }

    #[test]
    fn test_successful_refresh_clears_error() {
        let state = Rc::new(ResultsState::default())
            .reduce(Msg::Reset)
            .reduce(Msg::Received(poll(vec![2, 1])))
            .reduce(Msg::Error("Failed to load poll results".into()));
        assert!(state.error.is_some());

        let recovered = state.reduce(Msg::Received(poll(vec![2, 1])));
        assert!(recovered.error.is_none());
        assert!(!recovered.loading);
        assert_eq!(recovered.poll.as_ref().unwrap().votes, vec![2, 1]);
    }
}
