//! Media operations and their ffmpeg argument vectors.
//!
//! A [`MediaOp`] is a complete request: inputs, output extension and flags.
//! [`MediaOp::validate`] rejects bad requests before anything is allocated,
//! and [`MediaOp::args`] renders the exact argument vector for a given
//! output path. Every vector starts with `-y`; outputs are freshly allocated
//! temp files, so overwriting is always safe.

mod concat;
mod extract;
mod transcode;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use ffwrap_core::{Error, Result};

use crate::tempfiles::normalize_extension;

pub use concat::concat_filter;

/// A single ffmpeg operation.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaOp {
    /// Re-encode into whatever format the output extension implies.
    Transcode { input: PathBuf, extension: String },
    /// Keep only the video stream.
    ExtractVideo {
        input: PathBuf,
        extension: String,
        copy_codec: bool,
    },
    /// Keep only the audio stream.
    ExtractAudio {
        input: PathBuf,
        extension: String,
        copy_codec: bool,
    },
    /// Cut `[start_secs, end_secs]` out of a video.
    VideoClip {
        input: PathBuf,
        extension: String,
        start_secs: f64,
        end_secs: f64,
        copy_codec: bool,
        disable_audio: bool,
    },
    /// Cut `[start_secs, end_secs]` out of the audio stream.
    AudioClip {
        input: PathBuf,
        extension: String,
        start_secs: f64,
        end_secs: f64,
        copy_codec: bool,
    },
    /// Join inputs end to end into one video+audio output. Inputs must share
    /// resolution and stream layout.
    Concat {
        inputs: Vec<PathBuf>,
        extension: String,
    },
}

impl MediaOp {
    /// Short operation name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            MediaOp::Transcode { .. } => "transcode",
            MediaOp::ExtractVideo { .. } => "extract_video",
            MediaOp::ExtractAudio { .. } => "extract_audio",
            MediaOp::VideoClip { .. } => "video_clip",
            MediaOp::AudioClip { .. } => "audio_clip",
            MediaOp::Concat { .. } => "concat",
        }
    }

    /// Extension requested for the output file.
    pub fn extension(&self) -> &str {
        match self {
            MediaOp::Transcode { extension, .. }
            | MediaOp::ExtractVideo { extension, .. }
            | MediaOp::ExtractAudio { extension, .. }
            | MediaOp::VideoClip { extension, .. }
            | MediaOp::AudioClip { extension, .. }
            | MediaOp::Concat { extension, .. } => extension,
        }
    }

    /// Input files the operation reads.
    pub fn inputs(&self) -> Vec<&Path> {
        match self {
            MediaOp::Transcode { input, .. }
            | MediaOp::ExtractVideo { input, .. }
            | MediaOp::ExtractAudio { input, .. }
            | MediaOp::VideoClip { input, .. }
            | MediaOp::AudioClip { input, .. } => vec![input.as_path()],
            MediaOp::Concat { inputs, .. } => inputs.iter().map(PathBuf::as_path).collect(),
        }
    }

    /// Check the request without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for an invalid time range, an empty
    /// concat input list or an extension containing a path separator.
    pub fn validate(&self) -> Result<()> {
        normalize_extension(self.extension())?;

        match self {
            MediaOp::VideoClip {
                start_secs,
                end_secs,
                ..
            }
            | MediaOp::AudioClip {
                start_secs,
                end_secs,
                ..
            } => validate_time_range(*start_secs, *end_secs),
            MediaOp::Concat { inputs, .. } if inputs.is_empty() => {
                Err(Error::validation("concat requires at least one input"))
            }
            _ => Ok(()),
        }
    }

    /// Render the full argument vector writing to `output`.
    pub fn args(&self, output: &Path) -> Vec<OsString> {
        match self {
            MediaOp::Transcode { input, .. } => transcode::transcode_args(input, output),
            MediaOp::ExtractVideo {
                input, copy_codec, ..
            } => extract::video_args(input, output, *copy_codec),
            MediaOp::ExtractAudio {
                input, copy_codec, ..
            } => extract::audio_args(input, output, *copy_codec),
            MediaOp::VideoClip {
                input,
                start_secs,
                end_secs,
                copy_codec,
                disable_audio,
                ..
            } => extract::video_clip_args(
                input,
                output,
                *start_secs,
                *end_secs,
                *copy_codec,
                *disable_audio,
            ),
            MediaOp::AudioClip {
                input,
                start_secs,
                end_secs,
                copy_codec,
                ..
            } => extract::audio_clip_args(input, output, *start_secs, *end_secs, *copy_codec),
            MediaOp::Concat { inputs, .. } => concat::concat_args(inputs, output),
        }
    }
}

/// Require `0 <= start < end` with both values finite.
pub fn validate_time_range(start_secs: f64, end_secs: f64) -> Result<()> {
    let valid = start_secs.is_finite()
        && end_secs.is_finite()
        && start_secs >= 0.0
        && end_secs > start_secs;

    if valid {
        Ok(())
    } else {
        Err(Error::validation(format!(
            "invalid time range: start={start_secs}, end={end_secs}"
        )))
    }
}

/// Seconds as a plain decimal ffmpeg's `-ss`/`-to` accept. `Display` gives
/// the shortest text that parses back to the same `f64`, so two distinct
/// offsets never render identically.
fn format_secs(secs: f64) -> String {
    // -0.0 passes validation; adding +0.0 turns it into 0.0 so it prints "0".
    let secs = secs + 0.0;
    format!("{secs}")
}

/// Leading `-y -i <input>` shared by the single-input operations.
fn single_input(input: &Path) -> Vec<OsString> {
    vec!["-y".into(), "-i".into(), input.as_os_str().to_os_string()]
}
