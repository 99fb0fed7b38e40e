//! # ffwrap-av
//!
//! Media operations performed by shelling out to ffmpeg.
//!
//! This crate provides:
//!
//! - **Command execution** ([`ToolCommand`]) -- blocking builder that runs an
//!   external program with inherited stdout/stderr.
//! - **Temp file allocation** ([`TempFiles`]) -- unique output paths with a
//!   caller-chosen extension inside a dedicated directory.
//! - **Tool discovery** ([`tools`]) -- locate ffmpeg and report its version.
//! - **Operations** ([`MediaOp`]) -- argument vectors for transcode, stream
//!   extraction, clipping and concatenation.
//! - **The handle** ([`FFmpeg`]) -- ties the above together: validate,
//!   allocate, build, run, return the output path.
//!
//! ## Features
//!
//! - `async` - [`FFmpeg::execute_async`] on the tokio blocking pool
//!
//! ## Example
//!
//! ```no_run
//! use ffwrap_av::{FFmpeg, TempFiles};
//!
//! let ffmpeg = FFmpeg::new("/usr/bin/ffmpeg", TempFiles::in_dir("/tmp/ffwrap_media")?);
//! let audio = ffmpeg.extract_audio("/media/talk.mp4", "m4a", true)?;
//! println!("audio written to {}", audio.display());
//! # Ok::<(), ffwrap_core::Error>(())
//! ```

pub mod command;
pub mod ffmpeg;
pub mod ops;
pub mod tempfiles;
pub mod tools;

// ---- Re-exports for convenience ----

pub use command::ToolCommand;
pub use ffmpeg::FFmpeg;
pub use ops::MediaOp;
pub use tempfiles::TempFiles;
pub use tools::{check_tool, resolve_ffmpeg, ToolInfo};
