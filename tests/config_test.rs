//! Building handles from configuration.

#![cfg(unix)]

mod common;

use assert_matches::assert_matches;
use common::{write_fake_ffmpeg, FAKE_OUTPUT};
use ffwrap::{Config, Error, FFmpeg, TempConfig, ToolsConfig};
use serial_test::serial;

fn config_for(root: &std::path::Path, temp: TempConfig) -> Config {
    let script = write_fake_ffmpeg(root, &format!("printf '{FAKE_OUTPUT}' > \"$out\""));
    Config {
        tools: ToolsConfig {
            ffmpeg_path: Some(script),
        },
        temp: TempConfig {
            root: Some(root.to_path_buf()),
            ..temp
        },
    }
}

#[test]
#[serial]
fn from_config_creates_dedicated_dir() {
    common::init_tracing();
    let scratch = tempfile::tempdir().unwrap();
    let config = config_for(scratch.path(), TempConfig::default());

    let ffmpeg = FFmpeg::from_config(&config).unwrap();
    let media_dir = scratch.path().join("ffwrap_media");
    assert_eq!(ffmpeg.temp_files().dir(), media_dir);
    assert!(media_dir.is_dir());

    let out = ffmpeg.transcode_video("/media/in.avi", "webm").unwrap();
    assert!(out.starts_with(&media_dir));
    assert!(out
        .file_name()
        .unwrap()
        .to_string_lossy()
        .starts_with("tmpmedia_"));
    assert_eq!(std::fs::read_to_string(out).unwrap(), FAKE_OUTPUT);
}

#[test]
#[serial]
fn blocked_dir_without_fallback_is_io_error() {
    common::init_tracing();
    let scratch = tempfile::tempdir().unwrap();
    std::fs::write(scratch.path().join("ffwrap_media"), b"not a dir").unwrap();
    let config = config_for(scratch.path(), TempConfig::default());

    let err = FFmpeg::from_config(&config).unwrap_err();
    assert_matches!(err, Error::Io { .. });
}

#[test]
#[serial]
fn blocked_dir_with_fallback_uses_root() {
    common::init_tracing();
    let scratch = tempfile::tempdir().unwrap();
    std::fs::write(scratch.path().join("ffwrap_media"), b"not a dir").unwrap();
    let config = config_for(
        scratch.path(),
        TempConfig {
            fallback_to_root: true,
            ..TempConfig::default()
        },
    );

    let ffmpeg = FFmpeg::from_config(&config).unwrap();
    assert_eq!(ffmpeg.temp_files().dir(), scratch.path());

    let out = ffmpeg.extract_audio("/media/in.mkv", "flac", false).unwrap();
    assert_eq!(out.parent().unwrap(), scratch.path());
}

#[test]
#[serial]
fn config_loaded_from_json_file() {
    common::init_tracing();
    let scratch = tempfile::tempdir().unwrap();
    let script = write_fake_ffmpeg(scratch.path(), &format!("printf '{FAKE_OUTPUT}' > \"$out\""));
    let path = scratch.path().join("ffwrap.json");
    let json = format!(
        r#"{{"tools": {{"ffmpeg_path": "{}"}}, "temp": {{"root": "{}", "dir_name": "clips", "file_prefix": "clip_"}}}}"#,
        script.display(),
        scratch.path().display()
    );
    std::fs::write(&path, json).unwrap();

    let config = Config::load_or_default(Some(&path));
    assert!(config.validate().is_empty(), "warnings: {:?}", config.validate());

    let ffmpeg = FFmpeg::from_config(&config).unwrap();
    assert_eq!(ffmpeg.path(), script);

    let out = ffmpeg
        .extract_video_clip("/media/in.mp4", "mp4", 0.0, 4.0, true, true)
        .unwrap();
    assert!(out.starts_with(scratch.path().join("clips")));
    assert!(out.file_name().unwrap().to_string_lossy().starts_with("clip_"));
}

#[test]
#[serial]
fn missing_configured_ffmpeg_is_used_as_is() {
    common::init_tracing();
    let scratch = tempfile::tempdir().unwrap();
    // A real ffmpeg on PATH must not stand in for the configured one.
    let configured = scratch.path().join("missing/ffmpeg");
    let config = Config {
        tools: ToolsConfig {
            ffmpeg_path: Some(configured.clone()),
        },
        temp: TempConfig {
            root: Some(scratch.path().to_path_buf()),
            ..TempConfig::default()
        },
    };

    let ffmpeg = FFmpeg::from_config(&config).unwrap();
    assert_eq!(ffmpeg.path(), configured);

    let err = ffmpeg.transcode_video("/media/in.avi", "mp4").unwrap_err();
    assert_matches!(err, Error::Process { ref tool, code: None, .. } if tool == "ffmpeg");
}

#[test]
#[serial]
fn check_reports_fake_version() {
    common::init_tracing();
    let scratch = tempfile::tempdir().unwrap();
    let script = write_fake_ffmpeg(scratch.path(), "echo 'ffmpeg version 7.0-fake'");

    let info = ffwrap::check_tool(&script);
    assert!(info.available);
    assert_eq!(info.name, "ffmpeg");
    assert_eq!(info.version.as_deref(), Some("ffmpeg version 7.0-fake"));
    assert_eq!(info.path.as_deref(), Some(script.as_path()));
}
