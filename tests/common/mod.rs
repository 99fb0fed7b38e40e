//! Shared test harness for integration tests.
//!
//! [`Harness`] lays out a scratch directory with a shell script standing in
//! for ffmpeg (`bin/ffmpeg`) and an output directory (`out/`). The script
//! appends every argument it receives to `args.log`, one per line, and then
//! either writes a few bytes to its last argument or exits with a chosen
//! status.

#![allow(dead_code)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use ffwrap::{FFmpeg, TempFiles};
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

/// Bytes the fake ffmpeg writes into its output file.
pub const FAKE_OUTPUT: &str = "media";

/// Install a test subscriber once; respects `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub struct Harness {
    pub scratch: TempDir,
    pub ffmpeg: FFmpeg,
}

impl Harness {
    /// Fake ffmpeg that writes [`FAKE_OUTPUT`] to its output path.
    pub fn succeeding() -> Self {
        Self::with_script_body(&format!("printf '{FAKE_OUTPUT}' > \"$out\"\nexit 0"))
    }

    /// Fake ffmpeg that complains on stderr and exits with `code`.
    pub fn failing(code: i32) -> Self {
        Self::with_script_body(&format!(
            "echo 'fake ffmpeg: simulated failure' >&2\nexit {code}"
        ))
    }

    /// Handle bound to an executable that does not exist.
    pub fn missing() -> Self {
        init_tracing();
        let scratch = tempfile::tempdir().unwrap();
        let temp = TempFiles::in_dir(scratch.path().join("out")).unwrap();
        let ffmpeg = FFmpeg::new(scratch.path().join("bin/ffmpeg"), temp);
        Self { scratch, ffmpeg }
    }

    fn with_script_body(body: &str) -> Self {
        init_tracing();
        let scratch = tempfile::tempdir().unwrap();
        let script = write_fake_ffmpeg(scratch.path(), body);
        let temp = TempFiles::in_dir(scratch.path().join("out")).unwrap();
        let ffmpeg = FFmpeg::new(script, temp);
        Self { scratch, ffmpeg }
    }

    pub fn output_dir(&self) -> PathBuf {
        self.scratch.path().join("out")
    }

    pub fn args_log(&self) -> PathBuf {
        self.scratch.path().join("args.log")
    }

    /// Arguments received by every fake ffmpeg run so far.
    pub fn logged_args(&self) -> Vec<String> {
        std::fs::read_to_string(self.args_log())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Files currently present in the output directory.
    pub fn output_files(&self) -> Vec<PathBuf> {
        std::fs::read_dir(self.output_dir())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect()
    }
}

/// Write an executable `bin/ffmpeg` script under `root` and return its path.
///
/// The prologue logs arguments to `<root>/args.log` and stores the last
/// argument in `$out`; `body` runs afterwards.
pub fn write_fake_ffmpeg(root: &Path, body: &str) -> PathBuf {
    let bin = root.join("bin");
    std::fs::create_dir_all(&bin).unwrap();
    let log = root.join("args.log");

    let script = format!(
        "#!/bin/sh\n\
         for arg in \"$@\"; do printf '%s\\n' \"$arg\" >> '{log}'; done\n\
         out=\n\
         for arg in \"$@\"; do out=$arg; done\n\
         {body}\n",
        log = log.display(),
    );

    let path = bin.join("ffmpeg");
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}
