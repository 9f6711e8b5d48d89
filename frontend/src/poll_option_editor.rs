use shared::{MAX_OPTIONS, MAX_OPTION_LENGTH, MIN_OPTIONS};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct PollOptionEditorProps {
    pub options: Vec<String>,
    pub on_change: Callback<Vec<String>>,
    pub on_reject: Callback<String>,
}

#[derive(Clone)]
pub enum Msg {
    Update(usize, String),
    Add,
    Remove(usize),
}

pub struct PollOptionEditor;

impl Component for PollOptionEditor {
    type Message = Msg;
    type Properties = PollOptionEditorProps;

    fn create(_: &Context<Self>) -> Self {
        Self
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        let mut options = props.options.clone();
        match msg {
            Msg::Update(index, value) => {
                if let Some(option) = options.get_mut(index) {
                    *option = value;
                }
            }
            Msg::Add => {
                if options.len() >= MAX_OPTIONS {
                    props.on_reject.emit(format!("A poll can have at most {MAX_OPTIONS} options"));
                    return false;
                }
                options.push(String::new());
            }
            Msg::Remove(index) => {
                if options.len() <= MIN_OPTIONS {
                    props.on_reject.emit(format!("A poll must have at least {MIN_OPTIONS} options"));
                    return false;
                }
                if index < options.len() {
                    options.remove(index);
                }
            }
        }
        props.on_change.emit(options);
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class={SPACE_Y_BASE}>
                <div class={FLEX_BETWEEN}>
                    <label class={TEXT_LABEL}>{"Options"}</label>
                    <span class={TEXT_MUTED}>{format!("{} options", props.options.len())}</span>
                </div>
                <ul class={SPACE_Y_BASE}>
                    {for props.options.iter().enumerate().map(|(index, option)| html! {
                        <li class="flex gap-2 items-center">
                            <input
                                type="text"
                                class={INPUT_BASE}
                                value={option.clone()}
                                maxlength={MAX_OPTION_LENGTH.to_string()}
                                placeholder={format!("Option {}", index + 1)}
                                oninput={ctx.link().callback(move |e: InputEvent| {
                                    let target = e.target_unchecked_into::<HtmlInputElement>();
                                    Msg::Update(index, target.value())
                                })}
                            />
                            <button
                                type="button"
                                aria-label="Remove option"
                                class={combine_classes(BUTTON_ICON, BUTTON_DANGER)}
                                onclick={ctx.link().callback(move |_| Msg::Remove(index))}
                            >
                                {"✕"}
                            </button>
                        </li>
                    })}
                </ul>
                <button
                    type="button"
                    class={combine_classes(&button_secondary(), "w-full border-dashed")}
                    disabled={props.options.len() >= MAX_OPTIONS}
                    onclick={ctx.link().callback(|_| Msg::Add)}
                >
                    {"+ Add Option"}
                </button>
            </div>
        }
    }
}
