//! Validation utilities

use regex::Regex;
use std::sync::LazyLock;

static ENV_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

static SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").unwrap());

static SHELL_SAFE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_@%+=:,./-]*$").unwrap());

/// Checks if a string is a valid environment variable name
pub fn is_env_key(key: &str) -> bool {
    ENV_KEY_REGEX.is_match(key)
}

/// Checks if a key prefix can be emitted verbatim; empty means no prefix
pub fn is_valid_prefix(prefix: &str) -> bool {
    prefix.is_empty() || is_env_key(prefix)
}

/// Checks if a segment separator only contains key characters
pub fn is_valid_separator(separator: &str) -> bool {
    SEPARATOR_REGEX.is_match(separator)
}

/// Determines if a value can be sourced by a shell without quotes
pub fn is_shell_safe(value: &str) -> bool {
    SHELL_SAFE_REGEX.is_match(value)
}
