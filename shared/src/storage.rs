use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::error::{Error, ErrorCode, Result};
use crate::ids::generate_unique_id;
use crate::models::{ContentKind, FreeUsage, Note, Poll};
use crate::validation::{validate_note, validate_poll};

pub const VOTED_POLLS_KEY: &str = "voted_polls";
pub const SESSION_KEY: &str = "isLoggedIn";
pub const FREE_USAGE_KEY: &str = "free_usage";

/// String key-value storage with the semantics of the browser's `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::LocalStorage;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::*;
    use wasm_bindgen::JsValue;

    pub struct LocalStorage {
        storage: web_sys::Storage,
    }

    fn js_details(value: &JsValue) -> String {
        value.as_string().unwrap_or_else(|| format!("{value:?}"))
    }

    impl LocalStorage {
        pub fn open() -> Result<Self> {
            let window = web_sys::window()
                .ok_or_else(|| Error::new(ErrorCode::StorageUnavailable, "No browser window available"))?;
            let storage = window.local_storage()
                .map_err(|e| Error::with_details(ErrorCode::StorageUnavailable, "Local storage access denied", js_details(&e)))?
                .ok_or_else(|| Error::new(ErrorCode::StorageUnavailable, "Local storage is not supported"))?;
            Ok(Self { storage })
        }
    }

    impl KeyValueStore for LocalStorage {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.storage.get_item(key)
                .map_err(|e| Error::with_details(ErrorCode::StorageUnavailable, "Failed to read from storage", js_details(&e)))
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            self.storage.set_item(key, value)
                .map_err(|e| Error::with_details(ErrorCode::StorageUnavailable, "Failed to write to storage", js_details(&e)))
        }

        fn remove(&self, key: &str) -> Result<()> {
            self.storage.remove_item(key)
                .map_err(|e| Error::with_details(ErrorCode::StorageUnavailable, "Failed to remove from storage", js_details(&e)))
        }
    }
}

fn record_key(kind: ContentKind, id: &str) -> String {
    format!("{}{}", kind.storage_prefix(), id)
}

pub struct Repository<S> {
    store: S,
}

impl<S: KeyValueStore> Repository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn create_note(&self, text: &str) -> Result<Note> {
        validate_note(text)?;
        self.ensure_quota(ContentKind::Note)?;

        let id = self.allocate_id(ContentKind::Note)?;
        let key = record_key(ContentKind::Note, &id);
        self.store.set(&key, text)?;
        if let Err(e) = self.record_usage(ContentKind::Note) {
            self.restore(&key, None);
            return Err(e);
        }

        log::info!("created note {id}");
        Ok(Note { id, text: text.to_string() })
    }

    pub fn load_note(&self, id: &str) -> Result<Note> {
        let text = self.store.get(&record_key(ContentKind::Note, id))?
            .ok_or_else(|| Error::not_found("Note not found"))?;
        Ok(Note { id: id.to_string(), text })
    }

    pub fn create_poll(&self, question: &str, options: &[String]) -> Result<(String, Poll)> {
        validate_poll(question, options)?;
        self.ensure_quota(ContentKind::Poll)?;

        let id = self.allocate_id(ContentKind::Poll)?;
        let poll = Poll::new(question, options);
        self.save_poll(&id, &poll)?;
        if let Err(e) = self.record_usage(ContentKind::Poll) {
            self.restore(&record_key(ContentKind::Poll, &id), None);
            return Err(e);
        }

        log::info!("created poll {id} with {} options", poll.options.len());
        Ok((id, poll))
    }

    pub fn load_poll(&self, id: &str) -> Result<Poll> {
        let raw = self.store.get(&record_key(ContentKind::Poll, id))?
            .ok_or_else(|| Error::not_found("Poll not found"))?;
        let poll: Poll = serde_json::from_str(&raw).map_err(|e| {
            log::error!("poll {id} is not valid JSON: {e}");
            Error::from(e)
        })?;
        poll.check_consistency()?;
        Ok(poll)
    }

    fn save_poll(&self, id: &str, poll: &Poll) -> Result<()> {
        let raw = serde_json::to_string(poll)
            .map_err(|e| Error::with_details(ErrorCode::SystemError, "Failed to encode poll", e.to_string()))?;
        self.store.set(&record_key(ContentKind::Poll, id), &raw)
    }

    /// Read-modify-write of the whole poll record. Concurrent writers in other
    /// tabs can overwrite each other's increments.
    ///
    /// The poll is marked as voted before the counter is written, and unmarked
    /// again if that write fails, so a failed vote is never counted.
    pub fn cast_vote(&self, id: &str, option_index: usize) -> Result<Poll> {
        if self.has_voted(id)? {
            return Err(Error::new(ErrorCode::Conflict, "You have already voted in this poll"));
        }

        let mut poll = self.load_poll(id)?;
        poll.record_vote(option_index)?;

        let previous = self.store.get(VOTED_POLLS_KEY)?;
        let mut voted = self.voted_polls()?;
        voted.push(id.to_string());
        let raw = serde_json::to_string(&voted)
            .map_err(|e| Error::with_details(ErrorCode::SystemError, "Failed to encode voted polls", e.to_string()))?;
        self.store.set(VOTED_POLLS_KEY, &raw)?;

        if let Err(e) = self.save_poll(id, &poll) {
            self.restore(VOTED_POLLS_KEY, previous);
            return Err(e);
        }

        log::info!("recorded vote for option {option_index} in poll {id}");
        Ok(poll)
    }

    /// Puts `key` back to `previous` after a later write failed.
    fn restore(&self, key: &str, previous: Option<String>) {
        let result = match previous {
            Some(value) => self.store.set(key, &value),
            None => self.store.remove(key),
        };
        if let Err(e) = result {
            log::warn!("could not roll back {key}: {e}");
        }
    }

    pub fn voted_polls(&self) -> Result<Vec<String>> {
        let Some(raw) = self.store.get(VOTED_POLLS_KEY)? else {
            return Ok(Vec::new());
        };
        Ok(serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("ignoring malformed {VOTED_POLLS_KEY}: {e}");
            Vec::new()
        }))
    }

    pub fn has_voted(&self, id: &str) -> Result<bool> {
        Ok(self.voted_polls()?.iter().any(|voted| voted == id))
    }

    pub fn free_usage(&self) -> Result<FreeUsage> {
        let Some(raw) = self.store.get(FREE_USAGE_KEY)? else {
            return Ok(FreeUsage::default());
        };
        Ok(serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("resetting malformed {FREE_USAGE_KEY}: {e}");
            FreeUsage::default()
        }))
    }

    /// `None` means unlimited.
    pub fn remaining_free(&self, kind: ContentKind) -> Result<Option<u32>> {
        if self.is_logged_in()? {
            return Ok(None);
        }
        let used = self.free_usage()?.used(kind);
        Ok(Some(kind.free_limit().saturating_sub(used)))
    }

    fn ensure_quota(&self, kind: ContentKind) -> Result<()> {
        match self.remaining_free(kind)? {
            Some(0) => Err(Error::new(
                ErrorCode::LimitReached,
                "Free tier limit reached. Please log in for unlimited access.",
            )),
            _ => Ok(()),
        }
    }

    fn record_usage(&self, kind: ContentKind) -> Result<()> {
        if self.is_logged_in()? {
            return Ok(());
        }
        let mut usage = self.free_usage()?;
        usage.record(kind);
        let raw = serde_json::to_string(&usage)
            .map_err(|e| Error::with_details(ErrorCode::SystemError, "Failed to encode usage", e.to_string()))?;
        self.store.set(FREE_USAGE_KEY, &raw)
    }

    fn allocate_id(&self, kind: ContentKind) -> Result<String> {
        generate_unique_id(|id| Ok(self.store.get(&record_key(kind, id))?.is_some()))
    }

    pub fn is_logged_in(&self) -> Result<bool> {
        Ok(self.store.get(SESSION_KEY)?.as_deref() == Some("true"))
    }

    pub fn log_in(&self) -> Result<()> {
        self.store.set(SESSION_KEY, "true")
    }

    pub fn log_out(&self) -> Result<()> {
        self.store.remove(SESSION_KEY)
    }
}
