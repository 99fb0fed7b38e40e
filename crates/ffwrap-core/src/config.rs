//! Wrapper configuration types.
//!
//! The top-level [`Config`] struct is deserialized from JSON and carries the
//! tool location and temp directory layout. Every section defaults sensibly
//! so a completely empty `{}` document is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::Error;

/// Default name of the dedicated subdirectory created under the temp root.
pub const DEFAULT_TEMP_DIR_NAME: &str = "ffwrap_media";

/// Default file name prefix for allocated output files.
pub const DEFAULT_FILE_PREFIX: &str = "tmpmedia_";

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root wrapper configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tools: ToolsConfig,
    pub temp: TempConfig,
}

impl Config {
    /// Deserialize a `Config` from a JSON string.
    ///
    /// String-based so the embedding program can read the document however
    /// it likes.
    pub fn from_json(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str).map_err(|e| Error::Config(format!("parse error: {e}")))
    }

    /// Read a JSON config file, or use defaults.
    ///
    /// Never fails: `None`, a missing file, an unreadable file and a document
    /// that is not valid `Config` JSON (a garbage file, say) all yield
    /// [`Config::default`]. Only a missing file is expected, so it is logged
    /// at `info`; the other cases are logged at `warn`.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        let loaded = std::fs::read_to_string(path)
            .map_err(Error::from)
            .and_then(|contents| Self::from_json(&contents));

        match loaded {
            Ok(config) => {
                tracing::debug!("loaded config from {}", path.display());
                config
            }
            Err(Error::Io { source }) if source.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("no config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                tracing::warn!("ignoring config {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Return a list of validation warnings (non-fatal issues).
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if let Some(path) = &self.tools.ffmpeg_path {
            if !path.exists() {
                warnings.push(format!(
                    "tools.ffmpeg_path {} does not exist; operations will fail to spawn it",
                    path.display()
                ));
            }
        }

        if self.temp.dir_name.is_empty() {
            warnings.push("temp.dir_name is empty; files land directly in the temp root".into());
        }

        if self.temp.dir_name.contains(['/', '\\']) {
            warnings.push(format!(
                "temp.dir_name {:?} contains a path separator",
                self.temp.dir_name
            ));
        }

        if self.temp.file_prefix.is_empty() {
            warnings.push("temp.file_prefix is empty".into());
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// Paths to external CLI tools.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub ffmpeg_path: Option<PathBuf>,
}

/// Temp directory layout for operation outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TempConfig {
    /// Root under which the dedicated directory is created. `None` means the
    /// system temp directory.
    pub root: Option<PathBuf>,
    /// Name of the dedicated subdirectory under `root`.
    pub dir_name: String,
    /// Prefix for every allocated file name.
    pub file_prefix: String,
    /// Use `root` directly when the dedicated directory cannot be created.
    pub fallback_to_root: bool,
}

impl Default for TempConfig {
    fn default() -> Self {
        Self {
            root: None,
            dir_name: DEFAULT_TEMP_DIR_NAME.into(),
            file_prefix: DEFAULT_FILE_PREFIX.into(),
            fallback_to_root: false,
        }
    }
}

impl TempConfig {
    /// The effective temp root: configured root or the system temp directory.
    pub fn root_dir(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(std::env::temp_dir)
    }

    /// The dedicated directory path (`<root>/<dir_name>`).
    pub fn media_dir(&self) -> PathBuf {
        self.root_dir().join(&self.dir_name)
    }
}
