//! Environment variable key construction
//!
//! A key is built from a [`Path`] by ASCII-uppercasing each segment,
//! replacing every character outside `[A-Z0-9_]` with `_`, joining the
//! segments with the separator verbatim and prepending the caller's prefix.
//!
//! Case folding is ASCII only: a letter such as `é` is not uppercased and,
//! being outside the allowed set, is replaced like any other character.

use crate::constants::KEY_FILL;
use crate::types::{ConvertOptions, CteError, CteResult};
use crate::value::{Path, PathSegment};

/// Builds keys for one conversion
#[derive(Debug, Clone)]
pub struct KeyBuilder<'a> {
    prefix: &'a str,
    separator: &'a str,
    uppercase: bool,
}

impl<'a> KeyBuilder<'a> {
    pub fn new(options: &'a ConvertOptions) -> Self {
        Self {
            prefix: &options.prefix,
            separator: &options.separator,
            uppercase: options.uppercase,
        }
    }

    /// Build the full key for a leaf.
    ///
    /// The empty path belongs to a scalar document root, which would leave
    /// nothing but the prefix, so it is rejected.
    pub fn build(&self, path: &Path) -> CteResult<String> {
        if path.is_empty() {
            return Err(CteError::UnsupportedRoot { kind: "scalar" });
        }

        let key = guard_leading(self.join_segments(path.segments()));

        let mut full = String::with_capacity(self.prefix.len() + key.len());
        full.push_str(self.prefix);
        full.push_str(&key);
        Ok(full)
    }

    /// Normalize each segment, rendering indices in decimal, and join them
    fn join_segments(&self, segments: &[PathSegment]) -> String {
        segments
            .iter()
            .map(|segment| match segment {
                PathSegment::Field(name) => normalize_segment(name, self.uppercase),
                PathSegment::Index(index) => index.to_string(),
            })
            .collect::<Vec<_>>()
            .join(self.separator)
    }
}

/// Normalize a raw key into a valid identifier.
///
/// A run of `_` that contains at least one substituted character collapses
/// to a single `_`; runs made only of underscores from the input are kept.
/// The result never starts with a digit and is never empty.
pub fn normalize_key(raw: &str, uppercase: bool) -> String {
    guard_leading(normalize_segment(raw, uppercase))
}

/// Substitute and collapse within one field name. Segments are normalized
/// before joining so separator underscores never merge into a run.
fn normalize_segment(raw: &str, uppercase: bool) -> String {
    let mut key = String::with_capacity(raw.len() + 1);
    let mut run = 0usize;
    let mut run_substituted = false;

    for ch in raw.chars() {
        let ch = if uppercase { ch.to_ascii_uppercase() } else { ch };
        let (ch, substituted) = if ch.is_ascii_alphanumeric() || ch == KEY_FILL {
            (ch, false)
        } else {
            (KEY_FILL, true)
        };

        if ch == KEY_FILL {
            run += 1;
            run_substituted |= substituted;
            continue;
        }

        flush_run(&mut key, run, run_substituted);
        run = 0;
        run_substituted = false;
        key.push(ch);
    }
    flush_run(&mut key, run, run_substituted);
    key
}

/// Prepend `_` when the key is empty or starts with a digit
fn guard_leading(mut key: String) -> String {
    if !key.starts_with(|c: char| c.is_ascii_alphabetic() || c == KEY_FILL) {
        key.insert(0, KEY_FILL);
    }
    key
}

fn flush_run(key: &mut String, run: usize, substituted: bool) {
    let width = if substituted { run.min(1) } else { run };
    key.extend(std::iter::repeat(KEY_FILL).take(width));
}
