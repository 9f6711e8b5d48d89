use gloo_timers::future::TimeoutFuture;
use shared::{validate_credentials, AuthMode};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONFIG;
use crate::home::Footer;
use crate::page::PageHeader;
use crate::session::{session_from, use_session, Session};
use crate::styles::*;
use crate::toast::{toaster_from, use_toaster, Toaster};
use crate::Route;

#[function_component]
pub fn Auth() -> Html {
    let session = use_session();
    let toaster = use_toaster();
    let logged_in = session.as_ref().map(Session::logged_in).unwrap_or(false);

    let log_out = Callback::from(move |_: MouseEvent| {
        let Some(session) = &session else { return };
        match session.log_out() {
            Ok(()) => toaster.info("Logged out"),
            Err(e) => toaster.error(e.message),
        }
    });

    html! {
        <div class={combine_classes(BG_PAGE, "flex flex-col")}>
            <PageHeader />
            <main class="flex-1 flex items-center justify-center px-6 py-16">
                if logged_in {
                    <div class={combine_classes(CARD, "max-w-md w-full text-center")}>
                        <h2 class={HEADING_MD}>{"You're logged in"}</h2>
                        <p class={combine_classes(TEXT_MUTED, "mb-6")}>{"Enjoy unlimited notes and polls."}</p>
                        <div class="flex gap-4 justify-center">
                            <Link<Route> to={Route::Home} classes={classes!(button_primary(false))}>{"Start creating"}</Link<Route>>
                            <button type="button" class={button_secondary()} onclick={log_out}>{"Log out"}</button>
                        </div>
                    </div>
                } else {
                    <LoginForm />
                }
            </main>
            <Footer />
        </div>
    }
}

#[derive(Clone, Default)]
pub struct FormState {
    mode: AuthMode,
    email: String,
    password: String,
    show_password: bool,
    loading: bool,
}

pub enum Msg {
    UpdateEmail(String),
    UpdatePassword(String),
    ToggleMode,
    TogglePassword,
    Submit,
    Completed,
}

pub struct LoginForm {
    state: FormState,
    toaster: Toaster,
    session: Option<Session>,
}

impl Component for LoginForm {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            state: FormState::default(),
            toaster: toaster_from(ctx),
            session: session_from(ctx),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateEmail(email) => self.state.email = email,
            Msg::UpdatePassword(password) => self.state.password = password,
            Msg::ToggleMode => self.state.mode = self.state.mode.toggled(),
            Msg::TogglePassword => self.state.show_password = !self.state.show_password,
            Msg::Submit => {
                if self.state.loading {
                    return false;
                }
                if let Err(e) = validate_credentials(&self.state.email, &self.state.password) {
                    self.toaster.error(e.to_string());
                    return false;
                }
                self.state.loading = true;
                ctx.link().send_future(async {
                    TimeoutFuture::new(CONFIG.login_delay_ms).await;
                    Msg::Completed
                });
            }
            Msg::Completed => {
                self.state.loading = false;
                let mode = self.state.mode;
                let result = match &self.session {
                    Some(session) => session.log_in(),
                    None => crate::session::repository().and_then(|repo| repo.log_in()),
                };
                match result {
                    Ok(()) => {
                        log::info!("mock {mode:?} completed");
                        self.toaster.success(mode.success_message());
                        self.state.password.clear();
                        if let Some(navigator) = ctx.link().navigator() {
                            navigator.push(&Route::Home);
                        }
                    }
                    Err(e) => {
                        log::error!("mock {mode:?} failed: {e}");
                        self.toaster.error(mode.failure_message());
                    }
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let mode = self.state.mode;
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let (prompt, toggle_label) = mode.toggle_prompt();

        html! {
            <div class={combine_classes(CARD, "max-w-md w-full mx-auto")}>
                <div class="mb-6 text-center">
                    <h2 class={HEADING_MD}>{mode.heading()}</h2>
                    <p class={TEXT_MUTED}>{mode.subtitle()}</p>
                </div>
                <form {onsubmit} class={SPACE_Y_LG}>
                    <div>
                        <label class={TEXT_LABEL}>{"Email"}</label>
                        <input
                            type="email"
                            class={INPUT_BASE}
                            value={self.state.email.clone()}
                            placeholder="you@example.com"
                            required=true
                            oninput={ctx.link().callback(|e: InputEvent| {
                                Msg::UpdateEmail(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />
                    </div>
                    <div>
                        <label class={TEXT_LABEL}>{"Password"}</label>
                        <div class="relative">
                            <input
                                type={if self.state.show_password { "text" } else { "password" }}
                                class={combine_classes(INPUT_BASE, "pr-20")}
                                value={self.state.password.clone()}
                                placeholder="••••••••"
                                required=true
                                oninput={ctx.link().callback(|e: InputEvent| {
                                    Msg::UpdatePassword(e.target_unchecked_into::<HtmlInputElement>().value())
                                })}
                            />
                            <button
                                type="button"
                                class={combine_classes(BUTTON_ICON, "absolute right-2 top-1/2 -translate-y-1/2 text-xs")}
                                aria-label={if self.state.show_password { "Hide password" } else { "Show password" }}
                                onclick={ctx.link().callback(|_| Msg::TogglePassword)}
                            >
                                {if self.state.show_password { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </div>
                    <button type="submit" class={button_primary(true)} disabled={self.state.loading}>
                        {if self.state.loading { "Processing..." } else { mode.submit_label() }}
                    </button>
                </form>
                <p class={combine_classes(TEXT_MUTED, "mt-6 text-center")}>
                    {prompt}{" "}
                    <button
                        type="button"
                        class={combine_classes(TEXT_ACCENT, "hover:underline font-medium")}
                        onclick={ctx.link().callback(|_| Msg::ToggleMode)}
                    >
                        {toggle_label}
                    </button>
                </p>
            </div>
        }
    }
}
