//! # Selection Configuration
//!
//! This module loads the requested patch-set token string from the plain-text
//! configuration file (default `.vendor-patch.conf`).
//!
//! The format is deliberately minimal: whitespace-separated group tokens,
//! optionally spread over several lines. Everything from a `#` to the end of
//! its line is a comment, so the configured value can carry an explanation
//! next to it:
//!
//! ```text
//! all   # apply every patch group
//! ```
//!
//! A missing configuration file is not an error; callers fall back to the
//! built-in default selection.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::selection::strip_comment;

/// Parse configuration content into a single selection token string.
///
/// Strips per-line comments and joins the surviving tokens with single
/// spaces. The result may be empty if the file held only comments.
pub fn parse(content: &str) -> String {
    content
        .lines()
        .map(strip_comment)
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Load the selection token string from a configuration file.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn from_file(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    Ok(Some(parse(&content)))
}
