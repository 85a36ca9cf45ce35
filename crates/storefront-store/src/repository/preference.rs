//! # Preference Repository
//!
//! Small per-machine settings: the display theme and the email of the
//! signed-in account. Both are stored as plain strings, not JSON.

use std::sync::Arc;

use storefront_core::Theme;
use tracing::{debug, warn};

use crate::error::StoreResult;
use crate::kv::KeyValueStore;

const THEME_KEY: &str = "theme";
const SESSION_KEY: &str = "currentUser";

#[derive(Clone)]
pub struct PreferenceRepository {
    store: Arc<dyn KeyValueStore>,
}

impl PreferenceRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        PreferenceRepository { store }
    }

    /// The saved theme. Missing or unrecognised values fall back to light.
    pub fn theme(&self) -> StoreResult<Theme> {
        let Some(raw) = self.store.get(THEME_KEY)? else {
            return Ok(Theme::default());
        };
        Ok(raw.parse().unwrap_or_else(|_| {
            warn!(value = %raw, "Ignoring unknown stored theme");
            Theme::default()
        }))
    }

    pub fn set_theme(&self, theme: Theme) -> StoreResult<()> {
        debug!(%theme, "Saving theme");
        self.store.set(THEME_KEY, theme.as_str())
    }

    pub fn session_email(&self) -> StoreResult<Option<String>> {
        Ok(self
            .store
            .get(SESSION_KEY)?
            .filter(|email| !email.trim().is_empty()))
    }

    pub fn set_session_email(&self, email: &str) -> StoreResult<()> {
        self.store.set(SESSION_KEY, email)
    }

    pub fn clear_session_email(&self) -> StoreResult<()> {
        self.store.remove(SESSION_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    #[test]
    fn test_theme_defaults_and_round_trips() {
        let store = Arc::new(MemoryStore::new());
        let prefs = PreferenceRepository::new(store.clone());
        assert_eq!(prefs.theme().unwrap(), Theme::Light);

        prefs.set_theme(Theme::Dark).unwrap();
        assert_eq!(prefs.theme().unwrap(), Theme::Dark);
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));

        store.set("theme", "sepia").unwrap();
        assert_eq!(prefs.theme().unwrap(), Theme::Light);
    }

    #[test]
    fn test_session_email() {
        let prefs = PreferenceRepository::new(Arc::new(MemoryStore::new()));
        assert_eq!(prefs.session_email().unwrap(), None);

        prefs.set_session_email("ana@example.com").unwrap();
        assert_eq!(
            prefs.session_email().unwrap().as_deref(),
            Some("ana@example.com")
        );

        prefs.clear_session_email().unwrap();
        assert_eq!(prefs.session_email().unwrap(), None);
    }
}
