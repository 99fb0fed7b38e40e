//! Output file allocation.
//!
//! [`TempFiles`] owns a directory and hands out fresh, empty files named
//! `<prefix><random><.ext>`. Each file is created exclusively under its final
//! name, so two allocations can never end up with the same path even when
//! they race from different threads. Files are kept on disk; deleting them is
//! the caller's job.

use std::path::{Path, PathBuf};

use ffwrap_core::config::{TempConfig, DEFAULT_FILE_PREFIX};
use ffwrap_core::{Error, Result};

/// Allocator for uniquely named output files inside one directory.
#[derive(Debug, Clone)]
pub struct TempFiles {
    dir: PathBuf,
    prefix: String,
}

impl TempFiles {
    /// Create the dedicated directory described by `config`.
    ///
    /// When the directory cannot be created and `config.fallback_to_root` is
    /// set, a warning is logged and the temp root itself is used instead.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the directory cannot be created and fallback
    /// is disabled.
    pub fn new(config: &TempConfig) -> Result<Self> {
        let dir = config.media_dir();

        match std::fs::create_dir_all(&dir) {
            Ok(()) => Ok(Self {
                dir,
                prefix: config.file_prefix.clone(),
            }),
            Err(e) if config.fallback_to_root => {
                let root = config.root_dir();
                tracing::warn!(
                    "failed to create temp dir {}: {e}; falling back to {}",
                    dir.display(),
                    root.display()
                );
                Ok(Self {
                    dir: root,
                    prefix: config.file_prefix.clone(),
                })
            }
            Err(e) => Err(Error::from(e)),
        }
    }

    /// Use `dir` (created if missing) with the default file prefix.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            prefix: DEFAULT_FILE_PREFIX.to_string(),
        })
    }

    /// The directory files are allocated in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The file name prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Create a new empty file whose name ends in `extension` and return its
    /// path.
    ///
    /// `"mp4"` and `".mp4"` are equivalent; an empty extension produces a
    /// name without one.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] if `extension` contains a path separator.
    /// - [`Error::Io`] if the file cannot be created in the directory.
    pub fn allocate(&self, extension: &str) -> Result<PathBuf> {
        let suffix = normalize_extension(extension)?;

        let file = tempfile::Builder::new()
            .prefix(&self.prefix)
            .suffix(&suffix)
            .tempfile_in(&self.dir)?;
        let (_file, path) = file.keep().map_err(|e| Error::from(e.error))?;

        tracing::debug!("allocated output file {}", path.display());
        Ok(path)
    }
}

/// Turn a user-supplied extension into a file name suffix (`"mp4"` ->
/// `".mp4"`).
pub fn normalize_extension(extension: &str) -> Result<String> {
    if extension.contains(['/', '\\']) {
        return Err(Error::validation(format!(
            "invalid extension {extension:?}: contains a path separator"
        )));
    }

    let bare = extension.trim_start_matches('.');
    if bare.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!(".{bare}"))
    }
}
