//! Plain format conversion.

use std::ffi::OsString;
use std::path::Path;

use super::single_input;

/// `-y -i <input> <output>`: no codec options, ffmpeg picks encoders from
/// the output extension.
pub(super) fn transcode_args(input: &Path, output: &Path) -> Vec<OsString> {
    let mut args = single_input(input);
    args.push(output.as_os_str().to_os_string());
    args
}
