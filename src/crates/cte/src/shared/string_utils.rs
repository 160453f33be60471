//! String escaping for double-quoted shell values

use crate::constants::{BACKSLASH, BACKTICK, DOLLAR, DOUBLE_QUOTE};

/// Characters that keep their special meaning inside double quotes
pub fn needs_escape(ch: char) -> bool {
    matches!(ch, BACKSLASH | DOUBLE_QUOTE | DOLLAR | BACKTICK)
}

/// Escapes a value for use between double quotes
pub fn escape_double_quoted(value: &str) -> String {
    let mut result = String::with_capacity(value.len() + 2);
    for ch in value.chars() {
        if needs_escape(ch) {
            result.push(BACKSLASH);
        }
        result.push(ch);
    }
    result
}

/// Reverses [`escape_double_quoted`]. A backslash before any other
/// character stays literal, as it does in a POSIX shell.
pub fn unescape_double_quoted(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == BACKSLASH {
            if let Some(&next) = chars.peek() {
                if needs_escape(next) {
                    result.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        result.push(ch);
    }

    result
}

/// Finds the byte index of the first unescaped double quote
pub fn find_closing_quote(content: &str) -> Option<usize> {
    let bytes = content.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'\\' {
            i += 2;
            continue;
        }
        if bytes[i] == b'"' {
            return Some(i);
        }
        i += 1;
    }

    None
}
