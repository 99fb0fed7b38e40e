//! The ffmpeg handle.
//!
//! [`FFmpeg`] is immutable once built and cheap to clone, so one handle can
//! be shared across threads. Every operation follows the same steps:
//! validate the request, allocate an output file, build the argument vector,
//! run ffmpeg, return the output path. A failed run leaves the allocated file
//! in place for the caller to inspect or delete.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use ffwrap_core::{Config, Result};

use crate::command::ToolCommand;
use crate::ops::MediaOp;
use crate::tempfiles::TempFiles;
use crate::tools::{self, ToolInfo};

/// Handle bound to one ffmpeg executable and one output directory.
#[derive(Debug, Clone)]
pub struct FFmpeg {
    path: PathBuf,
    temp: TempFiles,
}

impl FFmpeg {
    /// Bind to the executable at `path`. The path is not checked here; a bad
    /// path surfaces as a process error on the first operation.
    pub fn new(path: impl Into<PathBuf>, temp: TempFiles) -> Self {
        Self {
            path: path.into(),
            temp,
        }
    }

    /// Resolve the executable and create the temp directory from `config`.
    ///
    /// `tools.ffmpeg_path` is taken as-is when set, so a wrong path fails at
    /// the first operation rather than here.
    ///
    /// # Errors
    ///
    /// - [`ffwrap_core::Error::ToolNotFound`] if no path is configured and
    ///   ffmpeg is not on `PATH`.
    /// - [`ffwrap_core::Error::Io`] if the temp directory cannot be created
    ///   and fallback is disabled.
    pub fn from_config(config: &Config) -> Result<Self> {
        let path = tools::resolve_ffmpeg(config.tools.ffmpeg_path.as_deref())?;
        let temp = TempFiles::new(&config.temp)?;
        tracing::info!(
            "using ffmpeg at {} with output dir {}",
            path.display(),
            temp.dir().display()
        );
        Ok(Self::new(path, temp))
    }

    /// Path of the bound executable.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The output file allocator.
    pub fn temp_files(&self) -> &TempFiles {
        &self.temp
    }

    /// Probe the bound executable with `-version`.
    pub fn check(&self) -> ToolInfo {
        tools::check_tool(&self.path)
    }

    /// Run ffmpeg with arbitrary arguments, for invocations the built-in
    /// operations do not cover.
    pub fn run(&self, args: impl IntoIterator<Item = impl AsRef<OsStr>>) -> Result<()> {
        ToolCommand::new(self.path.clone()).args(args).run()
    }

    /// Execute `op` and return the path of the new output file.
    ///
    /// # Errors
    ///
    /// - [`ffwrap_core::Error::Validation`] before anything is allocated or
    ///   spawned.
    /// - [`ffwrap_core::Error::Io`] if the output file cannot be allocated.
    /// - [`ffwrap_core::Error::Process`] if ffmpeg cannot be started or
    ///   exits non-zero.
    pub fn execute(&self, op: &MediaOp) -> Result<PathBuf> {
        op.validate()?;

        let output = self.temp.allocate(op.extension())?;
        tracing::info!(
            "{} {:?} -> {}",
            op.name(),
            op.inputs(),
            output.display()
        );

        ToolCommand::new(self.path.clone())
            .args(op.args(&output))
            .run()?;

        Ok(output)
    }

    /// Run `op` on tokio's blocking pool.
    #[cfg(feature = "async")]
    pub async fn execute_async(&self, op: MediaOp) -> Result<PathBuf> {
        let this = self.clone();
        tokio::task::spawn_blocking(move || this.execute(&op))
            .await
            .map_err(|e| ffwrap_core::Error::Internal(format!("spawn_blocking join error: {e}")))?
    }

    /// Convert `input` to the format implied by `extension`.
    pub fn transcode_video(&self, input: impl AsRef<Path>, extension: &str) -> Result<PathBuf> {
        self.execute(&MediaOp::Transcode {
            input: input.as_ref().to_path_buf(),
            extension: extension.to_string(),
        })
    }

    /// Keep only the video stream, copying it verbatim when `copy_codec`.
    pub fn extract_video(
        &self,
        input: impl AsRef<Path>,
        extension: &str,
        copy_codec: bool,
    ) -> Result<PathBuf> {
        self.execute(&MediaOp::ExtractVideo {
            input: input.as_ref().to_path_buf(),
            extension: extension.to_string(),
            copy_codec,
        })
    }

    /// Keep only the audio stream, copying it verbatim when `copy_codec`.
    pub fn extract_audio(
        &self,
        input: impl AsRef<Path>,
        extension: &str,
        copy_codec: bool,
    ) -> Result<PathBuf> {
        self.execute(&MediaOp::ExtractAudio {
            input: input.as_ref().to_path_buf(),
            extension: extension.to_string(),
            copy_codec,
        })
    }

    /// Cut `[start_secs, end_secs]` out of a video.
    pub fn extract_video_clip(
        &self,
        input: impl AsRef<Path>,
        extension: &str,
        start_secs: f64,
        end_secs: f64,
        copy_codec: bool,
        disable_audio: bool,
    ) -> Result<PathBuf> {
        self.execute(&MediaOp::VideoClip {
            input: input.as_ref().to_path_buf(),
            extension: extension.to_string(),
            start_secs,
            end_secs,
            copy_codec,
            disable_audio,
        })
    }

    /// Cut `[start_secs, end_secs]` out of the audio stream. Video is always
    /// dropped.
    pub fn extract_audio_clip(
        &self,
        input: impl AsRef<Path>,
        extension: &str,
        start_secs: f64,
        end_secs: f64,
        copy_codec: bool,
    ) -> Result<PathBuf> {
        self.execute(&MediaOp::AudioClip {
            input: input.as_ref().to_path_buf(),
            extension: extension.to_string(),
            start_secs,
            end_secs,
            copy_codec,
        })
    }

    /// Join `inputs` end to end. They must share resolution and stream
    /// layout; that is not checked here.
    pub fn concat_videos<P: AsRef<Path>>(&self, inputs: &[P], extension: &str) -> Result<PathBuf> {
        self.execute(&MediaOp::Concat {
            inputs: inputs.iter().map(|p| p.as_ref().to_path_buf()).collect(),
            extension: extension.to_string(),
        })
    }
}
