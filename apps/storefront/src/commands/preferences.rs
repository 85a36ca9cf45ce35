//! # Preference Commands
//!
//! Display theme, remembered across runs.

use serde::Serialize;
use storefront_core::Theme;
use storefront_store::PreferenceRepository;
use tracing::debug;

use crate::error::ApiResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}

pub fn get_theme(preferences: &PreferenceRepository) -> ApiResult<ThemeResponse> {
    debug!("get_theme command");
    Ok(ThemeResponse {
        theme: preferences.theme()?,
    })
}

/// Switches light ↔ dark and saves the result.
pub fn toggle_theme(preferences: &PreferenceRepository) -> ApiResult<ThemeResponse> {
    let theme = preferences.theme()?.toggled();
    debug!(%theme, "toggle_theme command");

    preferences.set_theme(theme)?;
    Ok(ThemeResponse { theme })
}

/// Sets the theme by name (`light` or `dark`).
pub fn set_theme(preferences: &PreferenceRepository, name: &str) -> ApiResult<ThemeResponse> {
    let theme: Theme = name.parse()?;
    debug!(%theme, "set_theme command");

    preferences.set_theme(theme)?;
    Ok(ThemeResponse { theme })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use storefront_store::Storage;

    #[test]
    fn test_toggle_persists() {
        let storage = Storage::in_memory();

        assert_eq!(get_theme(&storage.preferences()).unwrap().theme, Theme::Light);
        assert_eq!(toggle_theme(&storage.preferences()).unwrap().theme, Theme::Dark);
        assert_eq!(get_theme(&storage.preferences()).unwrap().theme, Theme::Dark);
        assert_eq!(toggle_theme(&storage.preferences()).unwrap().theme, Theme::Light);
    }

    #[test]
    fn test_set_by_name() {
        let storage = Storage::in_memory();
        let prefs = storage.preferences();

        assert_eq!(set_theme(&prefs, " Dark ").unwrap().theme, Theme::Dark);
        assert_eq!(set_theme(&prefs, "blue").unwrap_err().code, ErrorCode::ValidationError);
        assert_eq!(get_theme(&prefs).unwrap().theme, Theme::Dark);
    }
}
