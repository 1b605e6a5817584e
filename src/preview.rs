//! Bounded text previews for a small set of known text formats.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::ext::{Extension, Spec};

/// Extensions with a text preview procedure.
pub const SUPPORTED_TEXT: &[&str] = &["c", "css", "html", "js", "json", "md", "py", "txt"];

pub const NOT_SUPPORTED_MSG: &str = "[A preview of this file type is not yet implemented.]";
pub const MAYBE_EMPTY_MSG: &str = "[This file may be empty.]";

fn is_supported(ext: &str) -> bool {
    let lower = ext.to_ascii_lowercase();
    SUPPORTED_TEXT.contains(&lower.as_str())
}

/// Whether an explicit preview request for this search specifier can be
/// honored. `..` passes because unsupported files are simply skipped during
/// the batch; previewing files without any extension is not supported.
pub fn spec_supports_preview(spec: &Spec) -> bool {
    match spec {
        Spec::Any => true,
        Spec::NoExtension => false,
        Spec::Literal(ext) => is_supported(ext),
    }
}

/// Produce a one-line excerpt of up to `max_chars` characters from the start
/// of the file, newlines replaced with spaces. Read failures come back as an
/// inline message instead of an error so a batch preview never aborts; an
/// empty file gets an explicit marker to distinguish it from a silent failure.
pub fn generate(path: &Path, max_chars: usize) -> String {
    match Extension::extract(path, false) {
        Extension::Name(ext) if is_supported(&ext) => {}
        _ => return NOT_SUPPORTED_MSG.to_string(),
    }

    match read_prefix(path, max_chars) {
        Ok(excerpt) if excerpt.is_empty() => MAYBE_EMPTY_MSG.to_string(),
        Ok(excerpt) => excerpt,
        Err(e) => format!("[preview failed: {e}]"),
    }
}

/// Read up to `max_chars` characters, tolerating invalid UTF-8 at the cut
/// point (lossy decoding, like reading a truncated multibyte sequence).
fn read_prefix(path: &Path, max_chars: usize) -> std::io::Result<String> {
    let mut f = File::open(path)?;
    // chars, not bytes: over-read by the widest UTF-8 sequence
    let mut buf = vec![0u8; max_chars.saturating_mul(4)];
    let mut filled = 0;
    loop {
        let n = f.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
        if filled == buf.len() {
            break;
        }
    }
    buf.truncate(filled);
    let text: String = String::from_utf8_lossy(&buf)
        .chars()
        .take(max_chars)
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    Ok(text)
}
