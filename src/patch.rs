//! Anchor-line source patching.
//!
//! The target file is opaque text with one structural anchor: the line that
//! opens the table declaration. Everything after the anchor is replaced with
//! the freshly rendered table; everything up to and including it is kept
//! verbatim.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::{Result, SyncError};

/// Locates the `var <name> = map[string]map[string]string{` line.
#[derive(Debug, Clone)]
pub struct Anchor {
    var_name: String,
    pattern: Regex,
}

impl Anchor {
    pub fn new(var_name: &str) -> Result<Self> {
        let pattern = format!(
            r"(?m)^var\s+{}\s*=\s*map\[string\]map\[string\]string\s*\{{",
            regex::escape(var_name)
        );
        let pattern = Regex::new(&pattern).map_err(|source| SyncError::InvalidAnchor {
            var_name: var_name.to_string(),
            source,
        })?;

        Ok(Self {
            var_name: var_name.to_string(),
            pattern,
        })
    }

    pub fn var_name(&self) -> &str {
        &self.var_name
    }

    /// Byte offset just past the first anchor match.
    pub fn find_end(&self, source: &str) -> Option<usize> {
        self.pattern.find(source).map(|m| m.end())
    }

    /// Keep `source` through the anchor and append `fragment` on a new line.
    ///
    /// Returns `None` when no line matches.
    pub fn splice(&self, source: &str, fragment: &str) -> Option<String> {
        let end = self.find_end(source)?;
        let mut patched = String::with_capacity(end + 1 + fragment.len());
        patched.push_str(&source[..end]);
        patched.push('\n');
        patched.push_str(fragment);
        Some(patched)
    }
}

/// Read `path`, splice `fragment` after the anchor, and return the new buffer.
///
/// Nothing is written; see [`write_patched`].
pub fn prepare_patch(path: &Path, anchor: &Anchor, fragment: &str) -> Result<String> {
    let source = fs::read_to_string(path).map_err(|source| SyncError::ReadTarget {
        path: path.to_path_buf(),
        source,
    })?;

    anchor
        .splice(&source, fragment)
        .ok_or_else(|| SyncError::AnchorNotFound {
            path: path.to_path_buf(),
            var_name: anchor.var_name().to_string(),
        })
}

/// Overwrite `path` with a fully assembled buffer.
pub fn write_patched(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| SyncError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Patch `path` in place and return what was written. The file is untouched
/// on any failure.
pub fn patch_file(path: &Path, anchor: &Anchor, fragment: &str) -> Result<String> {
    let patched = prepare_patch(path, anchor, fragment)?;
    write_patched(path, &patched)?;
    tracing::info!(path = %path.display(), var = anchor.var_name(), "patched table");
    Ok(patched)
}
