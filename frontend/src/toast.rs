use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::styles::toast_style;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

impl ToastLevel {
    fn as_str(self) -> &'static str {
        match self {
            ToastLevel::Success => "success",
            ToastLevel::Error => "error",
            ToastLevel::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub level: ToastLevel,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Toasts {
    next_id: usize,
    items: Vec<Toast>,
}

pub enum ToastAction {
    Push(String, ToastLevel),
    Dismiss(usize),
}

impl Reducible for Toasts {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(message, level) => {
                next.items.push(Toast { id: next.next_id, message, level });
                next.next_id += 1;
            }
            ToastAction::Dismiss(id) => {
                next.items.retain(|toast| toast.id != id);
            }
        }
        Rc::new(next)
    }
}

/// Handle for raising toasts. Without a `ToastProvider` above it the
/// messages only reach the log.
#[derive(Clone, PartialEq)]
pub struct Toaster(Option<UseReducerHandle<Toasts>>);

impl Toaster {
    pub fn push(&self, message: impl Into<String>, level: ToastLevel) {
        let message = message.into();
        match level {
            ToastLevel::Error => log::warn!("toast: {message}"),
            _ => log::debug!("toast: {message}"),
        }
        if let Some(toasts) = &self.0 {
            toasts.dispatch(ToastAction::Push(message, level));
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(message, ToastLevel::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(message, ToastLevel::Error);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(message, ToastLevel::Info);
    }
}

#[hook]
pub fn use_toaster() -> Toaster {
    Toaster(use_context::<UseReducerHandle<Toasts>>())
}

/// For struct components, which cannot call hooks.
pub fn toaster_from<C: Component>(ctx: &Context<C>) -> Toaster {
    Toaster(ctx.link().context::<UseReducerHandle<Toasts>>(Callback::noop()).map(|(handle, _)| handle))
}

#[derive(Properties, PartialEq)]
pub struct ProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ProviderProps) -> Html {
    let toasts = use_reducer(Toasts::default);
    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<UseReducerHandle<Toasts>> context={toasts.clone()}>
            {props.children.clone()}
            <div class="fixed bottom-4 right-4 z-[60] flex flex-col gap-2 pointer-events-none">
                {for toasts.items.iter().map(|toast| html! {
                    <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
                })}
            </div>
        </ContextProvider<UseReducerHandle<Toasts>>>
    }
}

#[derive(Properties, PartialEq)]
struct ItemProps {
    toast: Toast,
    on_dismiss: Callback<usize>,
}

#[function_component]
fn ToastItem(props: &ItemProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(move |id: &usize| {
            let id = *id;
            let timeout = Timeout::new(CONFIG.toast_ms, move || on_dismiss.emit(id));
            move || drop(timeout)
        }, props.toast.id);
    }

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.toast.id;
        Callback::from(move |_| on_dismiss.emit(id))
    };

    html! {
        <div class={toast_style(props.toast.level.as_str())} role="status" {onclick}>
            {&props.toast.message}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let toasts = Rc::new(Toasts::default());
        let toasts = toasts.reduce(ToastAction::Push("first".into(), ToastLevel::Info));
        let toasts = toasts.reduce(ToastAction::Push("second".into(), ToastLevel::Error));
        assert_eq!(toasts.items.iter().map(|t| t.id).collect::<Vec<_>>(), vec![0, 1]);

        let toasts = toasts.reduce(ToastAction::Dismiss(0));
        assert_eq!(toasts.items.len(), 1);
        assert_eq!(toasts.items[0].message, "second");

        let toasts = toasts.reduce(ToastAction::Push("third".into(), ToastLevel::Success));
        assert_eq!(toasts.items[1].id, 2);
    }
}
