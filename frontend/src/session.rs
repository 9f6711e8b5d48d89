use shared::{Repository, Result};
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
pub type BrowserStore = shared::LocalStorage;

// Native builds (unit tests) have no localStorage.
#[cfg(not(target_arch = "wasm32"))]
pub type BrowserStore = shared::MemoryStore;

#[cfg(target_arch = "wasm32")]
pub fn repository() -> Result<Repository<BrowserStore>> {
    shared::LocalStorage::open().map(Repository::new)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn repository() -> Result<Repository<BrowserStore>> {
    Ok(Repository::new(shared::MemoryStore::new()))
}

pub fn stored_login_state() -> bool {
    match repository().and_then(|repo| repo.is_logged_in()) {
        Ok(logged_in) => logged_in,
        Err(e) => {
            log::warn!("could not read session flag: {e}");
            false
        }
    }
}

/// Mirrors the session flag so the navbar and creators re-render on login.
#[derive(Clone, PartialEq)]
pub struct Session(UseStateHandle<bool>);

impl Session {
    pub fn logged_in(&self) -> bool {
        *self.0
    }

    pub fn log_in(&self) -> Result<()> {
        repository()?.log_in()?;
        log::info!("session started");
        self.0.set(true);
        Ok(())
    }

    pub fn log_out(&self) -> Result<()> {
        repository()?.log_out()?;
        log::info!("session ended");
        self.0.set(false);
        Ok(())
    }
}

#[hook]
pub fn use_session() -> Option<Session> {
    use_context::<Session>()
}

pub fn session_from<C: Component>(ctx: &Context<C>) -> Option<Session> {
    ctx.link().context::<Session>(Callback::noop()).map(|(session, _)| session)
}

#[derive(Properties, PartialEq)]
pub struct ProviderProps {
    pub children: Children,
}

#[function_component]
pub fn SessionProvider(props: &ProviderProps) -> Html {
    let logged_in = use_state(stored_login_state);

    html! {
        <ContextProvider<Session> context={Session(logged_in)}>
            {props.children.clone()}
        </ContextProvider<Session>>
    }
}
