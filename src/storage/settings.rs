//! User settings and theme preference

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::DEFAULT_TIMEOUT_SECS;
use crate::storage::{keys, load_json, save_json, SharedStore, StorageError};

/// Flat user configuration, persisted under `settings`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub auto_format_json: bool,
    pub save_history: bool,
    pub show_line_numbers: bool,
    /// Tester timeout in seconds
    pub request_timeout: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            auto_format_json: true,
            save_history: true,
            show_line_numbers: false,
            request_timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Partial update; `None` fields keep their current value
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SettingsPatch {
    pub auto_format_json: Option<bool>,
    pub save_history: Option<bool>,
    pub show_line_numbers: Option<bool>,
    pub request_timeout: Option<u64>,
}

/// Color scheme of the terminal front-end
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// Overlay the persisted object on the defaults key by key, keeping only
/// values of the same JSON kind as the default
fn merge_over_defaults(persisted: Value) -> Settings {
    let defaults = Settings::default();
    let Ok(Value::Object(mut merged)) = serde_json::to_value(&defaults) else {
        return defaults;
    };
    if let Value::Object(overrides) = persisted {
        for (key, value) in overrides {
            let same_kind = match merged.get(&key) {
                Some(Value::Bool(_)) => value.is_boolean(),
                Some(Value::Number(_)) => value.is_u64(),
                _ => false,
            };
            if same_kind {
                merged.insert(key, value);
            }
        }
    }
    serde_json::from_value(Value::Object(merged)).unwrap_or(defaults)
}

/// Process-wide settings, loaded once and written through on every change
pub struct SettingsStore {
    settings: Settings,
    theme: Theme,
    store: SharedStore,
}

impl SettingsStore {
    /// Loads persisted settings over the defaults; never fails
    pub fn load(store: SharedStore) -> Self {
        let mut settings = load_json::<Value>(store.as_ref(), keys::SETTINGS)
            .map(merge_over_defaults)
            .unwrap_or_default();
        settings.request_timeout = settings.request_timeout.max(1);
        let theme = load_json::<Theme>(store.as_ref(), keys::THEME).unwrap_or_default();
        SettingsStore { settings, theme, store }
    }

    pub fn get(&self) -> &Settings {
        &self.settings
    }

    /// Merge `patch` and persist the full resulting record
    pub fn update(&mut self, patch: SettingsPatch) -> Result<&Settings, StorageError> {
        if let Some(v) = patch.auto_format_json {
            self.settings.auto_format_json = v;
        }
        if let Some(v) = patch.save_history {
            self.settings.save_history = v;
        }
        if let Some(v) = patch.show_line_numbers {
            self.settings.show_line_numbers = v;
        }
        if let Some(v) = patch.request_timeout {
            self.settings.request_timeout = v.max(1);
        }
        save_json(self.store.as_ref(), keys::SETTINGS, &self.settings)?;
        tracing::info!(settings = ?self.settings, "Settings updated");
        Ok(&self.settings)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), StorageError> {
        self.theme = theme;
        save_json(self.store.as_ref(), keys::THEME, &theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore};

    #[test]
    fn test_defaults_without_persisted_data() {
        let settings = SettingsStore::load(MemoryStore::shared());
        let s = settings.get();
        assert!(s.auto_format_json);
        assert!(s.save_history);
        assert!(!s.show_line_numbers);
        assert_eq!(s.request_timeout, 30);
        assert_eq!(settings.theme(), Theme::Light);
    }

    #[test]
    fn test_persisted_keys_override_defaults() {
        let backing = MemoryStore::shared();
        backing
            .set(keys::SETTINGS, r#"{"saveHistory": false, "requestTimeout": 5, "unknown": 1}"#)
            .unwrap();
        let settings = SettingsStore::load(backing);
        assert!(!settings.get().save_history);
        assert_eq!(settings.get().request_timeout, 5);
        assert!(settings.get().auto_format_json);
    }

    #[test]
    fn test_persisted_zero_timeout_is_raised_to_one() {
        let backing = MemoryStore::shared();
        backing.set(keys::SETTINGS, r#"{"requestTimeout": 0}"#).unwrap();
        assert_eq!(SettingsStore::load(backing).get().request_timeout, 1);
    }

    #[test]
    fn test_corrupt_blob_behaves_as_no_overrides() {
        let backing = MemoryStore::shared();
        backing.set(keys::SETTINGS, "not json at all").unwrap();
        assert_eq!(SettingsStore::load(backing.clone()).get(), &Settings::default());

        backing.set(keys::SETTINGS, r#"{"requestTimeout": "ten", "showLineNumbers": true}"#).unwrap();
        let settings = SettingsStore::load(backing);
        assert_eq!(settings.get().request_timeout, 30);
        assert!(settings.get().show_line_numbers);
    }

    #[test]
    fn test_update_persists_full_record() {
        let backing = MemoryStore::shared();
        let mut settings = SettingsStore::load(backing.clone());
        settings
            .update(SettingsPatch {
                request_timeout: Some(0),
                show_line_numbers: Some(true),
                ..Default::default()
            })
            .unwrap();

        let stored: Value = serde_json::from_str(&backing.get(keys::SETTINGS).unwrap().unwrap()).unwrap();
        assert_eq!(stored["requestTimeout"], 1);
        assert_eq!(stored["showLineNumbers"], true);
        assert_eq!(stored["autoFormatJson"], true);
        assert_eq!(stored["saveHistory"], true);

        let reloaded = SettingsStore::load(backing);
        assert_eq!(reloaded.get(), settings.get());
    }

    #[test]
    fn test_theme_round_trip() {
        let backing = MemoryStore::shared();
        let mut settings = SettingsStore::load(backing.clone());
        settings.set_theme(settings.theme().toggled()).unwrap();
        assert_eq!(backing.get(keys::THEME).unwrap().as_deref(), Some("\"dark\""));
        assert_eq!(SettingsStore::load(backing).theme(), Theme::Dark);
    }
}
