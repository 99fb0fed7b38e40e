//! Unified error type for ffwrap.
//!
//! Failures fall into three families that callers usually want to tell apart:
//! bad requests ([`Error::Validation`]), filesystem trouble ([`Error::Io`])
//! and the external tool misbehaving ([`Error::Process`]).

/// Unified error type covering all failure modes in ffwrap.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Request data failed validation before anything touched the disk.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An I/O operation failed.
    #[error("IO error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// The external tool could not be started or exited unsuccessfully.
    #[error("Process error [{tool}]: {message}")]
    Process {
        /// Name of the tool that failed.
        tool: String,
        /// Human-readable error description.
        message: String,
        /// Exit code, when the process ran and exited normally.
        code: Option<i32>,
    },

    /// A required external tool could not be located.
    #[error("Tool not found: {tool}")]
    ToolNotFound {
        /// Name of the missing tool.
        tool: String,
    },

    /// A configuration document could not be parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// Catch-all for unexpected internal errors.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Convenience constructor for [`Error::Validation`].
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    /// Convenience constructor for [`Error::Process`].
    pub fn process(tool: impl Into<String>, message: impl Into<String>, code: Option<i32>) -> Self {
        Error::Process {
            tool: tool.into(),
            message: message.into(),
            code,
        }
    }

    /// Convenience constructor for [`Error::ToolNotFound`].
    pub fn tool_not_found(tool: impl Into<String>) -> Self {
        Error::ToolNotFound { tool: tool.into() }
    }

    /// True for errors raised before any file allocation or subprocess spawn.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// True for spawn failures and non-zero exits.
    pub fn is_process(&self) -> bool {
        matches!(self, Error::Process { .. })
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
