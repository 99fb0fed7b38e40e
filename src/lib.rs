//! ffwrap - thin blocking wrapper around the ffmpeg executable.
//!
//! Builds argument vectors for common media operations, runs ffmpeg as a
//! subprocess with inherited stdout/stderr and hands back the path of a
//! freshly allocated output file. All media work is done by ffmpeg itself.
//!
//! ```no_run
//! use ffwrap::{Config, FFmpeg};
//!
//! let ffmpeg = FFmpeg::from_config(&Config::default())?;
//! let mp4 = ffmpeg.transcode_video("/media/input.mov", "mp4")?;
//! let clip = ffmpeg.extract_video_clip(&mp4, "mp4", 10.0, 25.0, true, false)?;
//! let joined = ffmpeg.concat_videos(&[&mp4, &clip], "mp4")?;
//! println!("{}", joined.display());
//! # Ok::<(), ffwrap::Error>(())
//! ```

pub use ffwrap_av::ops::{concat_filter, validate_time_range};
pub use ffwrap_av::{check_tool, resolve_ffmpeg, FFmpeg, MediaOp, TempFiles, ToolCommand, ToolInfo};
pub use ffwrap_core::config::{self, Config, TempConfig, ToolsConfig};
pub use ffwrap_core::{Error, Result};
