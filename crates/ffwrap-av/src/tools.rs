//! External tool detection.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use ffwrap_core::{Error, Result};

/// Information about an external tool.
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Name of the tool.
    pub name: String,
    /// Whether the tool could be run.
    pub available: bool,
    /// First line of `-version` output, if available.
    pub version: Option<String>,
    /// Path to the tool executable.
    pub path: Option<PathBuf>,
}

/// Run `<path> -version` and report what came back.
///
/// # Example
///
/// ```no_run
/// use ffwrap_av::check_tool;
///
/// let info = check_tool(std::path::Path::new("ffmpeg"));
/// if info.available {
///     println!("ffmpeg version: {:?}", info.version);
/// }
/// ```
pub fn check_tool(path: &Path) -> ToolInfo {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string());

    let result = Command::new(path)
        .arg("-version")
        .stdin(Stdio::null())
        .output();

    match result {
        Ok(output) if output.status.success() => {
            let version = String::from_utf8_lossy(&output.stdout)
                .lines()
                .next()
                .map(|s| s.to_string());

            // Bare names are resolved through PATH so the reported path is
            // something the caller can actually open.
            let resolved = if path.components().count() > 1 {
                Some(path.to_path_buf())
            } else {
                which::which(path).ok()
            };

            ToolInfo {
                name,
                available: true,
                version,
                path: resolved,
            }
        }
        _ => ToolInfo {
            name,
            available: false,
            version: None,
            path: None,
        },
    }
}

/// Locate the ffmpeg executable.
///
/// A configured path is returned as-is, whether or not it exists; a bad path
/// surfaces as [`Error::Process`] on the first run. `PATH` is searched only
/// when nothing is configured.
///
/// # Errors
///
/// Returns [`Error::ToolNotFound`] if nothing is configured and ffmpeg is not
/// on `PATH`.
pub fn resolve_ffmpeg(configured: Option<&Path>) -> Result<PathBuf> {
    match configured {
        Some(path) => Ok(path.to_path_buf()),
        None => which::which("ffmpeg").map_err(|_| Error::tool_not_found("ffmpeg")),
    }
}
