//! Concatenation through a `concat` filter graph.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Filter graph joining `n` inputs into one video and one audio stream,
/// labelled `[outv]` and `[outa]`.
pub fn concat_filter(n: usize) -> String {
    format!("concat=n={n}:v=1:a=1[outv][outa]")
}

pub(super) fn concat_args(inputs: &[PathBuf], output: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["-y".into()];
    for input in inputs {
        args.push("-i".into());
        args.push(input.as_os_str().to_os_string());
    }
    args.extend([
        OsString::from("-filter_complex"),
        OsString::from(concat_filter(inputs.len())),
        OsString::from("-map"),
        OsString::from("[outv]"),
        OsString::from("-map"),
        OsString::from("[outa]"),
        output.as_os_str().to_os_string(),
    ]);
    args
}
