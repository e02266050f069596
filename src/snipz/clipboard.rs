use crate::error::{Result, SnipzError};
use crate::model::Snippet;
use std::io::Write;
use std::process::{Command, Stdio};

/// Clipboard helpers tried in order for the current platform.
fn candidates() -> &'static [(&'static str, &'static [&'static str])] {
    if cfg!(target_os = "macos") {
        &[("pbcopy", &[])]
    } else if cfg!(target_os = "windows") {
        &[("clip", &[])]
    } else {
        &[
            ("wl-copy", &[]),
            ("xclip", &["-selection", "clipboard"]),
            ("xsel", &["--clipboard", "--input"]),
        ]
    }
}

/// Copies text to the system clipboard by piping it into the platform tool.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut last_err = None;
    for (program, args) in candidates() {
        match pipe_into(program, args, text) {
            Ok(()) => return Ok(()),
            Err(e) => last_err = Some(e),
        }
    }
    Err(last_err.unwrap_or_else(|| {
        SnipzError::Clipboard("no clipboard tool available".to_string())
    }))
}

fn pipe_into(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| SnipzError::Clipboard(format!("failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| SnipzError::Clipboard(format!("failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| SnipzError::Clipboard(format!("failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(SnipzError::Clipboard(format!("{} exited with {}", program, status)))
    }
}

/// What `copy` puts on the clipboard: the code body, with a trailing newline
/// so pasting into a shell runs the last line.
pub fn format_for_clipboard(snippet: &Snippet) -> String {
    if snippet.code.ends_with('\n') {
        snippet.code.clone()
    } else {
        format!("{}\n", snippet.code)
    }
}
