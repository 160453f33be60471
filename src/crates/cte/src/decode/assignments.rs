//! Parser for `KEY=VALUE` streams
//!
//! Accepts what [`crate::emit`] produces: unquoted values running to the end
//! of the line, and double-quoted values that may span lines and use the
//! POSIX double-quote escapes. Blank lines and `#` comments are skipped.

use crate::constants::{ASSIGN, COMMENT, DOUBLE_QUOTE, NEWLINE};
use crate::shared::{find_closing_quote, is_env_key, unescape_double_quoted};
use crate::types::{CteError, CteResult, EnvPair};

/// Parse an assignment stream into pairs, in input order
pub fn parse_assignments(input: &str) -> CteResult<Vec<EnvPair>> {
    let mut lines = input.split(NEWLINE).enumerate();
    let mut pairs = Vec::new();

    while let Some((index, line)) = lines.next() {
        let line_number = index + 1;
        let content = line.trim_start();
        if content.is_empty() || content.starts_with(COMMENT) {
            continue;
        }

        let (key, rest) = content
            .split_once(ASSIGN)
            .ok_or_else(|| CteError::syntax(line_number, "expected KEY=VALUE"))?;
        if !is_env_key(key) {
            return Err(CteError::syntax(
                line_number,
                format!("invalid variable name {:?}", key),
            ));
        }

        let value = match rest.strip_prefix(DOUBLE_QUOTE) {
            Some(body) => read_quoted(body, line_number, &mut lines)?,
            None => rest.to_string(),
        };

        pairs.push(EnvPair::new(key, value));
    }

    Ok(pairs)
}

fn read_quoted<'a, I>(first: &'a str, line_number: usize, lines: &mut I) -> CteResult<String>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    let mut raw = String::new();
    let mut current = first;

    loop {
        if let Some(end) = find_closing_quote(current) {
            raw.push_str(&current[..end]);
            if !current[end + 1..].trim().is_empty() {
                return Err(CteError::syntax(
                    line_number,
                    "unexpected text after closing quote",
                ));
            }
            return Ok(unescape_double_quoted(&raw));
        }

        raw.push_str(current);
        raw.push(NEWLINE);
        current = match lines.next() {
            Some((_, next)) => next,
            None => return Err(CteError::syntax(line_number, "unterminated quoted value")),
        };
    }
}
