use std::io;

#[cfg(not(target_arch = "wasm32"))]
use std::{fs, path::PathBuf};

#[cfg(not(target_arch = "wasm32"))]
use directories::ProjectDirs;
#[cfg(not(target_arch = "wasm32"))]
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;

use crate::domain::ThemeMode;

#[cfg(not(target_arch = "wasm32"))]
const APP_QUALIFIER: &str = "uk.co";
#[cfg(not(target_arch = "wasm32"))]
const APP_ORG: &str = "PaulNix";
#[cfg(not(target_arch = "wasm32"))]
const APP_NAME: &str = "AnalyticsDashboard";

/// Key-value slot holding the single persisted dark-mode flag.
pub trait PreferenceStore {
    /// `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<bool>, PersistError>;
    fn save(&self, dark: bool) -> Result<(), PersistError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("preference storage unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

#[cfg(target_arch = "wasm32")]
pub type PlatformStore = LocalStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = FileStore;

/// Theme preference backed by a [`PreferenceStore`].
///
/// Storage failures never reach the UI: reads fall back to the OS preference
/// and failed writes leave the in-memory mode as the session's truth.
#[derive(Clone, Debug, Default)]
pub struct ThemePreference<S> {
    store: S,
}

impl ThemePreference<PlatformStore> {
    pub fn platform() -> Self {
        Self::new(PlatformStore::default())
    }
}

impl<S: PreferenceStore> ThemePreference<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn stored(&self) -> Option<ThemeMode> {
        match self.store.load() {
            Ok(value) => value.map(ThemeMode::from_dark),
            Err(err) => {
                tracing::warn!("Failed to read theme preference: {err}");
                None
            }
        }
    }

    /// Stored mode if present, otherwise the OS preference.
    pub fn read(&self, system_prefers_dark: bool) -> ThemeMode {
        self.stored()
            .unwrap_or_else(|| ThemeMode::from_dark(system_prefers_dark))
    }

    pub fn set(&self, mode: ThemeMode) {
        if let Err(err) = self.store.save(mode.is_dark()) {
            tracing::warn!("Failed to persist theme preference: {err}");
        }
    }

    pub fn toggle(&self, current: ThemeMode) -> ThemeMode {
        let next = current.toggled();
        self.set(next);
        next
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedPreferences {
    #[serde(default)]
    dark_mode: Option<bool>,
}

/// JSON file in the platform config directory.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug)]
pub struct FileStore {
    path: Option<PathBuf>,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    fn path(&self) -> Result<&PathBuf, PersistError> {
        self.path.as_ref().ok_or(PersistError::StorageUnavailable)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for FileStore {
    fn default() -> Self {
        Self {
            path: ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
                .map(|dirs| dirs.config_dir().join("preferences.json")),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for FileStore {
    fn load(&self) -> Result<Option<bool>, PersistError> {
        let data = match fs::read_to_string(self.path()?) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let prefs: PersistedPreferences = serde_json::from_str(&data)?;
        Ok(prefs.dark_mode)
    }

    fn save(&self, dark: bool) -> Result<(), PersistError> {
        let path = self.path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&PersistedPreferences {
            dark_mode: Some(dark),
        })?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Browser `localStorage`, one `"true"`/`"false"` entry.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "darkMode";

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    fn storage() -> Result<web_sys::Storage, PersistError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(PersistError::StorageUnavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStore {
    fn load(&self) -> Result<Option<bool>, PersistError> {
        let value = Self::storage()?
            .get_item(STORAGE_KEY)
            .map_err(|_| PersistError::StorageUnavailable)?;
        Ok(value.map(|raw| raw == "true"))
    }

    fn save(&self, dark: bool) -> Result<(), PersistError> {
        Self::storage()?
            .set_item(STORAGE_KEY, if dark { "true" } else { "false" })
            .map_err(|_| PersistError::StorageUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    #[derive(Clone, Default)]
    struct MemoryStore {
        value: Rc<Cell<Option<bool>>>,
        broken: bool,
    }

    impl MemoryStore {
        fn broken() -> Self {
            Self {
                broken: true,
                ..Self::default()
            }
        }
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self) -> Result<Option<bool>, PersistError> {
            if self.broken {
                return Err(PersistError::StorageUnavailable);
            }
            Ok(self.value.get())
        }

        fn save(&self, dark: bool) -> Result<(), PersistError> {
            if self.broken {
                return Err(PersistError::StorageUnavailable);
            }
            self.value.set(Some(dark));
            Ok(())
        }
    }

    #[test]
    fn system_preference_applies_when_nothing_stored() {
        let prefs = ThemePreference::new(MemoryStore::default());
        assert_eq!(prefs.stored(), None);
        assert_eq!(prefs.read(true), ThemeMode::Dark);
        assert_eq!(prefs.read(false), ThemeMode::Light);
    }

    #[test]
    fn stored_value_beats_system_preference() {
        let store = MemoryStore::default();
        let prefs = ThemePreference::new(store.clone());
        prefs.set(ThemeMode::Light);
        assert_eq!(store.value.get(), Some(false));
        assert_eq!(prefs.read(true), ThemeMode::Light);
    }

    #[test]
    fn double_toggle_restores_persisted_value() {
        let store = MemoryStore::default();
        let prefs = ThemePreference::new(store.clone());
        prefs.set(ThemeMode::Dark);

        let once = prefs.toggle(ThemeMode::Dark);
        assert_eq!(once, ThemeMode::Light);
        assert_eq!(store.value.get(), Some(false));

        let twice = prefs.toggle(once);
        assert_eq!(twice, ThemeMode::Dark);
        assert_eq!(store.value.get(), Some(true));
        assert_eq!(prefs.read(false), ThemeMode::Dark);
    }

    #[test]
    fn broken_storage_falls_back_to_system() {
        let prefs = ThemePreference::new(MemoryStore::broken());
        assert_eq!(prefs.toggle(ThemeMode::Light), ThemeMode::Dark);
        assert_eq!(prefs.stored(), None);
        assert_eq!(prefs.read(false), ThemeMode::Light);
    }

    #[test]
    fn missing_file_means_no_preference() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::at(dir.path().join("nested").join("preferences.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn file_store_round_trips_and_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");
        let store = FileStore::at(&path);

        store.save(true).unwrap();
        assert_eq!(store.load().unwrap(), Some(true));
        store.save(false).unwrap();
        assert_eq!(store.load().unwrap(), Some(false));

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"dark_mode\": false"));
    }

    #[test]
    fn malformed_file_is_an_error_but_reads_as_unset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = FileStore::at(&path);

        assert!(matches!(store.load(), Err(PersistError::Serde(_))));
        assert_eq!(ThemePreference::new(store).read(true), ThemeMode::Dark);
    }

    #[test]
    fn unresolvable_config_dir_is_unavailable() {
        let store = FileStore { path: None };
        assert!(matches!(store.load(), Err(PersistError::StorageUnavailable)));
        assert!(matches!(store.save(true), Err(PersistError::StorageUnavailable)));
    }
}
