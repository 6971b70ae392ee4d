//! Theme controller: light/dark flag, its persistence, and how it reaches
//! the presentation layer.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::error::StoreError;

/// Preference key holding the theme token.
pub const THEME_KEY: &str = "theme";

/// File name of the preference store inside the data directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Site color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Persisted token, also used as the `data-theme` attribute value.
    pub fn token(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Glyph for the toggle button: what clicking switches to.
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "\u{1F319}",
            Theme::Dark => "\u{2600}\u{FE0F}",
        }
    }
}

/// Durable key-value storage for user preferences.
pub trait PreferenceStore: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Preferences kept as a flat JSON object on disk.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<data_dir>/preferences.json`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(PREFERENCES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.remove(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = match self.load() {
            Ok(entries) => entries,
            Err(StoreError::Json(e)) => {
                warn!(error = %e, path = %self.path.display(), "Discarding malformed preferences");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        debug!(key, value, path = %self.path.display(), "Preference saved");
        Ok(())
    }
}

/// In-memory preferences for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.lock().insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Receives the active theme. Anything `FnMut(Theme)` qualifies.
pub trait PresentationScope {
    fn present(&mut self, theme: Theme);
}

impl<F: FnMut(Theme)> PresentationScope for F {
    fn present(&mut self, theme: Theme) {
        self(theme)
    }
}

/// Reads, flips and applies the theme preference.
#[derive(Clone)]
pub struct ThemeController {
    store: Arc<dyn PreferenceStore>,
}

impl ThemeController {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// Theme to start with. Missing, unreadable or malformed values give
    /// [`Theme::Light`].
    pub fn initial(&self) -> Theme {
        match self.store.read(THEME_KEY) {
            Ok(Some(token)) => Theme::from_token(&token).unwrap_or_else(|| {
                warn!(token = %token, "Unknown theme preference, using light");
                Theme::Light
            }),
            Ok(None) => {
                debug!("No theme preference stored, using light");
                Theme::Light
            }
            Err(e) => {
                warn!(error = %e, "Failed to read theme preference, using light");
                Theme::Light
            }
        }
    }

    pub fn toggle(current: Theme) -> Theme {
        current.toggled()
    }

    /// Presents `theme` first, then persists it. Persistence is best-effort.
    pub fn apply(&self, theme: Theme, scope: &mut impl PresentationScope) {
        scope.present(theme);
        match self.store.write(THEME_KEY, theme.token()) {
            Ok(()) => debug!(theme = theme.token(), "Theme applied"),
            Err(e) => warn!(error = %e, theme = theme.token(), "Failed to persist theme"),
        }
    }
}

impl std::fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Io(std::io::Error::other("disk gone")))
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("disk gone")))
        }
    }

    fn controller(store: MemoryPreferenceStore) -> (ThemeController, Arc<MemoryPreferenceStore>) {
        let store = Arc::new(store);
        (ThemeController::new(store.clone()), store)
    }

    #[test]
    fn test_initial_defaults_to_light() {
        let (ctl, _) = controller(MemoryPreferenceStore::new());
        assert_eq!(ctl.initial(), Theme::Light);
        assert!(!ctl.initial().is_dark());
    }

    #[test]
    fn test_initial_reads_dark_token() {
        let (ctl, _) = controller(MemoryPreferenceStore::with_entry(THEME_KEY, "dark"));
        assert_eq!(ctl.initial(), Theme::Dark);
    }

    #[test]
    fn test_initial_ignores_malformed_token() {
        let (ctl, _) = controller(MemoryPreferenceStore::with_entry(THEME_KEY, "DARK!"));
        assert_eq!(ctl.initial(), Theme::Light);
    }

    #[test]
    fn test_initial_survives_read_failure() {
        let ctl = ThemeController::new(Arc::new(BrokenStore));
        assert_eq!(ctl.initial(), Theme::Light);
    }

    #[test]
    fn test_toggle_is_involution() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(ThemeController::toggle(theme), theme);
            assert_eq!(ThemeController::toggle(ThemeController::toggle(theme)), theme);
        }
    }

    #[test]
    fn test_apply_presents_and_persists() {
        let (ctl, store) = controller(MemoryPreferenceStore::new());
        let mut shown = None;

        ctl.apply(Theme::Dark, &mut |t: Theme| shown = Some(t));
        assert_eq!(shown, Some(Theme::Dark));
        assert_eq!(store.read(THEME_KEY).unwrap().as_deref(), Some("dark"));

        ctl.apply(Theme::Light, &mut |t: Theme| shown = Some(t));
        assert_eq!(shown, Some(Theme::Light));
        assert_eq!(store.read(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_apply_still_presents_when_write_fails() {
        let ctl = ThemeController::new(Arc::new(BrokenStore));
        let mut shown = Theme::Light;
        ctl.apply(Theme::Dark, &mut |t: Theme| shown = t);
        assert_eq!(shown, Theme::Dark);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::in_dir(&dir.path().join("nested"));

        assert_eq!(store.read(THEME_KEY).unwrap(), None);
        store.write(THEME_KEY, "dark").unwrap();
        store.write("other", "value").unwrap();

        let reopened = FilePreferenceStore::new(store.path());
        assert_eq!(reopened.read(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.read("other").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn test_file_store_overwrites_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::in_dir(dir.path());
        fs::write(store.path(), "not json").unwrap();

        assert!(matches!(store.read(THEME_KEY), Err(StoreError::Json(_))));
        let ctl = ThemeController::new(Arc::new(store.clone()));
        assert_eq!(ctl.initial(), Theme::Light);

        store.write(THEME_KEY, "dark").unwrap();
        assert_eq!(ctl.initial(), Theme::Dark);
    }
}
