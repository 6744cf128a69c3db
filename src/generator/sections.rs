//! Marker-delimited section reconciliation.
//!
//! A generated file is split into named sections:
//!
//! ```text
//! //template:begin model
//! ...generator-owned lines...
//! //template:end model
//! ```
//!
//! Everything outside a section belongs to whoever edits the file. When a
//! file already exists, each section it declares is replaced wholesale by the
//! block of the same name from the fresh render; lines outside sections are
//! copied untouched. Sections that only exist in the fresh render are not
//! injected into an existing file.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

use crate::error::Error;

/// Token that opens a section; followed by one whitespace and the name.
pub const BEGIN_TOKEN: &str = "//template:begin";
/// Token that closes a section; followed by one whitespace and the name.
pub const END_TOKEN: &str = "//template:end";

// The pattern is a literal checked by test_parse_marker.
#[allow(clippy::expect_used)]
static MARKER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"//template:(begin|end)\s(\S+)$").expect("section marker regex should be valid")
});

/// A recognized marker line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker<'a> {
    Begin(&'a str),
    End(&'a str),
}

/// Recognize a marker line. Anything else, malformed markers included, is
/// ordinary content. A trailing `\n` or `\r\n` is ignored.
pub fn parse_marker(line: &str) -> Option<Marker<'_>> {
    let caps = MARKER_REGEX.captures(strip_terminator(line))?;
    let name = caps.get(2)?.as_str();
    match caps.get(1)?.as_str() {
        "begin" => Some(Marker::Begin(name)),
        "end" => Some(Marker::End(name)),
        _ => None,
    }
}

fn strip_terminator(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}

/// Lines of `text` with their terminators attached.
fn raw_lines(text: &str) -> std::str::SplitInclusive<'_, char> {
    text.split_inclusive('\n')
}

enum ScanState<'a> {
    Outside,
    Inside {
        name: &'a str,
        /// Original lines of the section, kept in case it never closes
        held: Vec<&'a str>,
    },
}

/// The first complete block named `name` in `text`, marker lines included,
/// copied byte for byte.
pub fn extract_section<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    let mut offset = 0;
    let mut start = None;
    for line in raw_lines(text) {
        let end = offset + line.len();
        match (start, parse_marker(line)) {
            (None, Some(Marker::Begin(n))) if n == name => start = Some(offset),
            (Some(begin), Some(Marker::End(n))) if n == name => return Some(&text[begin..end]),
            _ => {}
        }
        offset = end;
    }
    None
}

/// Names of the sections opened in `text`, in order of appearance.
pub fn section_names(text: &str) -> Vec<&str> {
    raw_lines(text)
        .filter_map(|line| match parse_marker(line) {
            Some(Marker::Begin(name)) => Some(name),
            _ => None,
        })
        .collect()
}

/// Merge a fresh render into the existing content of an output file.
///
/// With no existing content the fresh render is returned verbatim. Otherwise
/// the existing text is scanned line by line:
///
/// - outside a section, a begin marker enters that section and every other
///   line is copied exactly as read, line ending included;
/// - inside section `S`, lines are discarded until the end marker for `S`,
///   where the fresh block for `S` is appended (or nothing, if the fresh
///   render no longer has `S`).
///
/// A section left open at end of input is restored verbatim. Running this
/// again on its own output with the same fresh render is a no-op.
pub fn reconcile(existing: Option<&str>, fresh: &str) -> String {
    let existing = match existing {
        Some(text) if !text.is_empty() => text,
        _ => return fresh.to_string(),
    };

    let mut out = String::with_capacity(existing.len().max(fresh.len()));
    let mut state = ScanState::Outside;
    for line in raw_lines(existing) {
        state = match state {
            ScanState::Outside => match parse_marker(line) {
                Some(Marker::Begin(name)) => ScanState::Inside {
                    name,
                    held: vec![line],
                },
                _ => {
                    out.push_str(line);
                    ScanState::Outside
                }
            },
            ScanState::Inside { name, mut held } => {
                if parse_marker(line) == Some(Marker::End(name)) {
                    if let Some(block) = extract_section(fresh, name) {
                        out.push_str(block);
                        // a fresh block ending at EOF takes the old end marker's line ending
                        if !block.ends_with('\n') {
                            out.push_str(&line[strip_terminator(line).len()..]);
                        }
                    }
                    ScanState::Outside
                } else {
                    held.push(line);
                    ScanState::Inside { name, held }
                }
            }
        };
    }
    if let ScanState::Inside { held, .. } = state {
        out.extend(held);
    }
    out
}

/// [`reconcile`] against whatever is currently at `path`.
///
/// A missing file counts as no existing content; any other read failure is
/// an error.
pub fn reconcile_file(path: &Path, fresh: &str) -> Result<String, Error> {
    let existing = read_existing(path)?;
    Ok(reconcile(existing.as_deref(), fresh))
}

/// Current content of `path`, or `None` if it does not exist.
pub fn read_existing(path: &Path) -> Result<Option<String>, Error> {
    match std::fs::read_to_string(path) {
        Ok(s) => Ok(Some(s)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::fs("read", path, e)),
    }
}
