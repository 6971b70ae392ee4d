//! Site configuration.
//!
//! Sources, lowest priority first: built-in defaults, an optional TOML
//! file, environment variables. The binary applies CLI flags on top.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::contact::DEFAULT_FORM_ENDPOINT;
use crate::error::FolioError;
use crate::navigation::{EntryAnimationOptions, PageTransition, Route};
use crate::typewriter::TypewriterTiming;

/// Overrides the data directory.
pub const ENV_DATA_DIR: &str = "FOLIO_DATA_DIR";

/// Overrides the form relay endpoint.
pub const ENV_FORM_ENDPOINT: &str = "FOLIO_FORM_ENDPOINT";

/// Window geometry for the desktop shell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
    pub maximized: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 860.0,
            maximized: false,
        }
    }
}

/// Everything the site needs at launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Where `preferences.json` and log files live.
    pub data_dir: PathBuf,
    /// Form relay URL for the contact view.
    pub form_endpoint: String,
    /// View shown first.
    pub initial_route: Route,
    /// Keep preferences in memory only.
    pub ephemeral: bool,
    pub typewriter: TypewriterTiming,
    pub transition: PageTransition,
    pub entry_animation: EntryAnimationOptions,
    pub window: WindowConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            form_endpoint: DEFAULT_FORM_ENDPOINT.to_string(),
            initial_route: Route::Home,
            ephemeral: false,
            typewriter: TypewriterTiming::default(),
            transition: PageTransition::default(),
            entry_animation: EntryAnimationOptions::default(),
            window: WindowConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parses a TOML document; missing keys take their defaults.
    pub fn from_toml_str(raw: &str, origin: &Path) -> Result<Self, FolioError> {
        toml::from_str(raw).map_err(|source| FolioError::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, FolioError> {
        let raw = std::fs::read_to_string(path).map_err(|source| FolioError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw, path)?;
        debug!(path = %path.display(), "Loaded site config");
        Ok(config)
    }

    /// Defaults, then `path` if given, then environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, FolioError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_env_overrides(|key| std::env::var(key).ok()))
    }

    /// Applies `FOLIO_*` variables, looked up through `lookup`.
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|v| !v.is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(endpoint) = lookup(ENV_FORM_ENDPOINT).filter(|v| !v.is_empty()) {
            self.form_endpoint = endpoint;
        }
        self
    }

    /// Directory for rolling log files.
    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}

/// Platform data directory for the site, falling back to `./folio`.
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
}

/// Serde adapter storing a `Duration` as whole milliseconds.
pub(crate) mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_millis(u64::deserialize(deserializer)?))
    }
}
