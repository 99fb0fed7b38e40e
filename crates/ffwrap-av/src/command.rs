//! Builder for executing external tool commands.
//!
//! The child inherits the caller's stdout and stderr, so whatever the tool
//! prints shows up on the caller's console as it happens. Nothing is
//! captured or buffered here.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use ffwrap_core::{Error, Result};

/// A builder for constructing and executing external tool invocations.
///
/// # Example
///
/// ```no_run
/// use ffwrap_av::ToolCommand;
///
/// ToolCommand::new("ffmpeg")
///     .args(["-y", "-i", "in.mov", "out.mp4"])
///     .run()?;
/// # Ok::<(), ffwrap_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ToolCommand {
    program: PathBuf,
    args: Vec<OsString>,
}

impl ToolCommand {
    /// Create a new command for the given program path.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a single argument.
    pub fn arg(&mut self, s: impl AsRef<OsStr>) -> &mut Self {
        self.args.push(s.as_ref().to_os_string());
        self
    }

    /// Append multiple arguments.
    pub fn args(&mut self, iter: impl IntoIterator<Item = impl AsRef<OsStr>>) -> &mut Self {
        self.args
            .extend(iter.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// The program that will be spawned.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// The arguments collected so far.
    pub fn get_args(&self) -> &[OsString] {
        &self.args
    }

    /// Short name of the program for error messages (`ffmpeg` rather than
    /// `/usr/local/bin/ffmpeg`).
    pub fn tool_name(&self) -> String {
        self.program
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.program.to_string_lossy().to_string())
    }

    /// Spawn the program and block until it exits.
    ///
    /// stdin is closed, stdout and stderr are inherited.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Process`] if spawning fails (including a missing
    /// executable) or if the process exits with a non-zero status. The exit
    /// code is attached when the process exited normally.
    pub fn run(&self) -> Result<()> {
        let tool = self.tool_name();

        tracing::debug!(
            "exec: {} {}",
            self.program.display(),
            self.args
                .iter()
                .map(|a| a.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let status = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| {
                tracing::warn!("{tool} failed to spawn: {e}");
                Error::process(&tool, format!("failed to spawn: {e}"), None)
            })?;

        if !status.success() {
            tracing::warn!("{tool} exited with status {status}");
            return Err(Error::process(
                tool,
                format!("exited with status {status}"),
                status.code(),
            ));
        }

        Ok(())
    }
}
