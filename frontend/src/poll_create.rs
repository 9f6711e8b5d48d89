use shared::share::{poll_url, results_url};
use shared::{ContentKind, MAX_QUESTION_LENGTH, MIN_OPTIONS};
use web_sys::HtmlInputElement;
use yew::context::ContextHandle;
use yew::prelude::*;

use crate::browser;
use crate::free_tier::FreeTierBanner;
use crate::poll_option_editor::PollOptionEditor;
use crate::qr_code::QrCode;
use crate::session::{repository, Session};
use crate::styles::*;
use crate::toast::{toaster_from, Toaster};

#[derive(Clone)]
pub struct FormState {
    question: String,
    options: Vec<String>,
    generated_id: Option<String>,
    created_count: u32,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            question: String::new(),
            options: vec![String::new(); MIN_OPTIONS],
            generated_id: None,
            created_count: 0,
        }
    }
}

impl FormState {
    fn is_incomplete(&self) -> bool {
        self.question.trim().is_empty() || self.options.iter().any(|opt| opt.trim().is_empty())
    }
}

pub struct PollCreator {
    state: FormState,
    toaster: Toaster,
    logged_in: bool,
    _session_handle: Option<ContextHandle<Session>>,
}

pub enum Msg {
    UpdateQuestion(String),
    UpdateOptions(Vec<String>),
    Reject(String),
    Submit,
    SessionChanged(Session),
}

impl Component for PollCreator {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (session, handle) = match ctx.link().context::<Session>(ctx.link().callback(Msg::SessionChanged)) {
            Some((session, handle)) => (Some(session), Some(handle)),
            None => (None, None),
        };

        Self {
            state: FormState::default(),
            toaster: toaster_from(ctx),
            logged_in: session.map(|s| s.logged_in()).unwrap_or(false),
            _session_handle: handle,
        }
    }

    fn update(&mut self, _: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateQuestion(question) => {
                self.state.question = question;
                true
            }
            Msg::UpdateOptions(options) => {
                self.state.options = options;
                true
            }
            Msg::Reject(message) => {
                self.toaster.error(message);
                false
            }
            Msg::SessionChanged(session) => {
                self.logged_in = session.logged_in();
                true
            }
            Msg::Submit => {
                let created = repository()
                    .and_then(|repo| repo.create_poll(&self.state.question, &self.state.options));
                match created {
                    Ok((id, _)) => {
                        self.state.generated_id = Some(id);
                        self.state.created_count += 1;
                        self.toaster.success("Poll created successfully!");
                    }
                    Err(e) => {
                        log::warn!("poll creation failed: {e}");
                        self.toaster.error(e.message);
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section id="polls" class={combine_classes(SECTION, "bg-neutral-950")}>
                <div class={CONTAINER}>
                    <div class="text-center mb-12">
                        <span class={BADGE}>{"Polls"}</span>
                        <h2 class={combine_classes(HEADING_LG, "mt-4")}>{"Create Interactive Polls"}</h2>
                        <p class={combine_classes(TEXT_MUTED, "max-w-2xl mx-auto text-base")}>
                            {"Create polls, share the QR code, and collect responses in real-time. \
                              Perfect for classrooms, events, and team meetings."}
                        </p>
                        if !self.logged_in {
                            <FreeTierBanner kind={ContentKind::Poll} refresh={self.state.created_count} />
                        }
                    </div>

                    <div class={GRID_SPLIT}>
                        {self.render_form(ctx)}
                        <div class={CARD}>{self.render_output()}</div>
                    </div>
                </div>
            </section>
        }
    }
}

impl PollCreator {
    fn render_form(&self, ctx: &Context<Self>) -> Html {
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::UpdateQuestion(input.value())
        });

        html! {
            <div class={combine_classes(CARD, SPACE_Y_LG)}>
                <div>
                    <label class={TEXT_LABEL}>
                        {format!("Question ({}/{})", self.state.question.chars().count(), MAX_QUESTION_LENGTH)}
                    </label>
                    <input
                        type="text"
                        class={INPUT_BASE}
                        value={self.state.question.clone()}
                        maxlength={MAX_QUESTION_LENGTH.to_string()}
                        placeholder="Enter your question..."
                        {oninput}
                    />
                </div>
                <PollOptionEditor
                    options={self.state.options.clone()}
                    on_change={ctx.link().callback(Msg::UpdateOptions)}
                    on_reject={ctx.link().callback(Msg::Reject)}
                />
                <button
                    type="button"
                    class={button_primary(true)}
                    disabled={self.state.is_incomplete()}
                    onclick={ctx.link().callback(|_| Msg::Submit)}
                >
                    {"Create Poll"}
                </button>
            </div>
        }
    }

    fn render_output(&self) -> Html {
        let Some(id) = &self.state.generated_id else {
            return html! {
                <div class={QR_PLACEHOLDER}>
                    <p>{"Your QR code will appear here"}</p>
                </div>
            };
        };

        let origin = browser::origin();
        html! {
            <div class={SPACE_Y_LG}>
                <QrCode url={poll_url(&origin, id)} />
                <div class="text-center">
                    <a
                        href={results_url(&origin, id)}
                        target="_blank"
                        rel="noopener noreferrer"
                        class={combine_classes(TEXT_ACCENT, "hover:underline font-medium")}
                    >
                        {"View live results →"}
                    </a>
                </div>
            </div>
        }
    }
}
