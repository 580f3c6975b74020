use thiserror::Error;
use web_sys::window;

use crate::config;

/// Where the tunnel URL lives between sessions. The browser implementation
/// wraps localStorage; tests inject an in-memory fake.
pub trait EndpointStore {
    fn load(&self) -> Option<String>;
    fn save(&self, url: &str);
}

#[derive(Debug, Error, PartialEq)]
pub enum SaveError {
    #[error("Please enter a valid tunnel URL")]
    Empty,
}

/// Strips a single trailing slash so `{endpoint}/generate` never ends up
/// with a double slash.
pub fn normalize_endpoint(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}

/// Persists the endpoint, trimmed and normalized. An empty or whitespace-only
/// value is rejected without touching storage. Overwrites any previous value.
pub fn save_endpoint(store: &impl EndpointStore, raw: &str) -> Result<String, SaveError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SaveError::Empty);
    }
    let normalized = normalize_endpoint(trimmed);
    store.save(normalized);
    Ok(normalized.to_string())
}

/// localStorage-backed store used by the studio page.
pub struct BrowserStore;

impl EndpointStore for BrowserStore {
    fn load(&self) -> Option<String> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(config::ENDPOINT_STORAGE_KEY).ok())
            .flatten()
            .filter(|url| !url.trim().is_empty())
    }

    fn save(&self, url: &str) {
        if let Some(window) = window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(config::ENDPOINT_STORAGE_KEY, url);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::studio::testing::FakeStore;

    #[test]
    fn empty_endpoint_is_rejected_without_writing() {
        let store = FakeStore::default();
        assert_eq!(save_endpoint(&store, ""), Err(SaveError::Empty));
        assert_eq!(save_endpoint(&store, "   "), Err(SaveError::Empty));
        assert_eq!(store.saved(), None);
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn save_persists_trimmed_value() {
        let store = FakeStore::default();
        let saved = save_endpoint(&store, "  https://abcd.ngrok-free.app  ").unwrap();
        assert_eq!(saved, "https://abcd.ngrok-free.app");
        assert_eq!(store.saved().as_deref(), Some("https://abcd.ngrok-free.app"));
    }

    #[test]
    fn save_strips_one_trailing_slash() {
        let store = FakeStore::default();
        save_endpoint(&store, "https://abcd.ngrok-free.app/").unwrap();
        assert_eq!(store.saved().as_deref(), Some("https://abcd.ngrok-free.app"));
    }

    #[test]
    fn saving_twice_is_idempotent() {
        let store = FakeStore::default();
        save_endpoint(&store, "https://abcd.ngrok-free.app").unwrap();
        let after_first = store.saved();
        save_endpoint(&store, "https://abcd.ngrok-free.app").unwrap();
        assert_eq!(store.saved(), after_first);
    }

    #[test]
    fn later_save_overwrites_unconditionally() {
        let store = FakeStore::with("https://old.ngrok-free.app");
        save_endpoint(&store, "https://new.ngrok-free.app").unwrap();
        assert_eq!(store.saved().as_deref(), Some("https://new.ngrok-free.app"));
    }

    #[test]
    fn normalize_only_strips_a_single_slash() {
        assert_eq!(normalize_endpoint("https://a.app/"), "https://a.app");
        assert_eq!(normalize_endpoint("https://a.app//"), "https://a.app/");
        assert_eq!(normalize_endpoint("https://a.app"), "https://a.app");
    }
}
