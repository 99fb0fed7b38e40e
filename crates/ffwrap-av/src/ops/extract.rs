//! Single-stream extraction and time-range clipping.

use std::ffi::OsString;
use std::path::Path;

use super::{format_secs, single_input};

/// Drop audio, optionally copying the video bitstream.
pub(super) fn video_args(input: &Path, output: &Path, copy_codec: bool) -> Vec<OsString> {
    let mut args = single_input(input);
    args.push("-an".into());
    if copy_codec {
        args.extend([OsString::from("-c:v"), OsString::from("copy")]);
    }
    args.push(output.as_os_str().to_os_string());
    args
}

/// Drop video, optionally copying the audio bitstream.
pub(super) fn audio_args(input: &Path, output: &Path, copy_codec: bool) -> Vec<OsString> {
    let mut args = single_input(input);
    args.push("-vn".into());
    if copy_codec {
        args.extend([OsString::from("-c:a"), OsString::from("copy")]);
    }
    args.push(output.as_os_str().to_os_string());
    args
}

/// Output-side seek so the cut is frame accurate when re-encoding.
pub(super) fn video_clip_args(
    input: &Path,
    output: &Path,
    start_secs: f64,
    end_secs: f64,
    copy_codec: bool,
    disable_audio: bool,
) -> Vec<OsString> {
    let mut args = single_input(input);
    push_range(&mut args, start_secs, end_secs);
    if disable_audio {
        args.push("-an".into());
    }
    if copy_codec {
        args.extend([OsString::from("-c:v"), OsString::from("copy")]);
    }
    args.push(output.as_os_str().to_os_string());
    args
}

pub(super) fn audio_clip_args(
    input: &Path,
    output: &Path,
    start_secs: f64,
    end_secs: f64,
    copy_codec: bool,
) -> Vec<OsString> {
    let mut args = single_input(input);
    push_range(&mut args, start_secs, end_secs);
    args.push("-vn".into());
    if copy_codec {
        args.extend([OsString::from("-c:a"), OsString::from("copy")]);
    }
    args.push(output.as_os_str().to_os_string());
    args
}

fn push_range(args: &mut Vec<OsString>, start_secs: f64, end_secs: f64) {
    args.extend([
        OsString::from("-ss"),
        OsString::from(format_secs(start_secs)),
        OsString::from("-to"),
        OsString::from(format_secs(end_secs)),
    ]);
}
