//! Assignment writer for environment output

use crate::constants::{ASSIGN, DOUBLE_QUOTE, NEWLINE};
use crate::shared::{escape_double_quoted, is_shell_safe};
use crate::types::EnvPair;
use std::borrow::Cow;

/// Accumulates `KEY=VALUE` lines, one per pair, each newline-terminated
#[derive(Debug, Default)]
pub struct EnvWriter {
    output: String,
}

impl EnvWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pair: &EnvPair) {
        self.output.push_str(&pair.key);
        self.output.push(ASSIGN);
        self.output.push_str(&quote_value(&pair.value));
        self.output.push(NEWLINE);
    }

    pub fn finish(self) -> String {
        self.output
    }
}

/// Quote a value when a shell would otherwise interpret part of it
pub fn quote_value(value: &str) -> Cow<'_, str> {
    if is_shell_safe(value) {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(format!(
            "{}{}{}",
            DOUBLE_QUOTE,
            escape_double_quoted(value),
            DOUBLE_QUOTE
        ))
    }
}

/// Render pairs in the order given, or sorted by key when `sort_keys` is set
pub fn emit(pairs: &[EnvPair], sort_keys: bool) -> String {
    let mut ordered: Vec<&EnvPair> = pairs.iter().collect();
    if sort_keys {
        ordered.sort_by(|a, b| a.key.cmp(&b.key));
    }

    let mut writer = EnvWriter::new();
    for pair in ordered {
        writer.push(pair);
    }
    writer.finish()
}
