//! cte - convert configuration documents to environment variables
//!
//! Flattens a nested YAML, TOML or JSON document into `KEY=VALUE` lines
//! that can be sourced into a shell. Nested field names and array indices
//! are joined into one key, normalized to `[A-Z0-9_]` and prefixed.
//!
//! # Example
//!
//! ```rust
//! use cte::{convert_str, ConvertOptions, Format};
//!
//! let yaml = "app:\n  name: test\n  port: 8080\n";
//! let options = ConvertOptions::default().with_prefix("TEST_");
//!
//! let converted = convert_str(yaml, Format::Yaml, Some(options)).unwrap();
//! assert_eq!(converted.output, "TEST_APP_NAME=test\nTEST_APP_PORT=8080\n");
//! assert!(converted.collisions.is_empty());
//! ```

pub mod constants;
pub mod decode;
pub mod encode;
pub mod formats;
pub mod shared;
pub mod types;
pub mod value;

pub use decode::parse_assignments;
pub use encode::{emit, encode_scalar, flatten, normalize_key, KeyBuilder};
pub use formats::{parse_document, Format};
pub use types::{
    Collision, ConvertOptions, Converted, CteError, CteResult, EnvPair, ErrorKind, Flattened,
};
pub use value::{Map, Path, PathSegment, Value};

/// Convert a value tree to environment assignment text
///
/// # Arguments
///
/// * `input` - Root of the document; must be an object or array
/// * `options` - Optional conversion configuration
///
/// # Returns
///
/// The rendered `KEY=VALUE` lines together with any key collisions, or an
/// error if the root is a scalar, the tree is too deep, or the options are
/// invalid.
///
/// # Example
///
/// ```rust
/// use cte::{convert, Value};
///
/// let value = Value::object([("servers", Value::from(vec!["a", "b"]))]);
/// let converted = convert(&value, None).unwrap();
/// assert_eq!(converted.output, "SERVERS_0=a\nSERVERS_1=b\n");
/// ```
pub fn convert(input: &Value, options: Option<ConvertOptions>) -> CteResult<Converted> {
    let resolved_options = options.unwrap_or_default();
    let flattened = flatten(input, &resolved_options)?;
    let output = emit(&flattened.pairs, resolved_options.sort_keys);

    Ok(Converted {
        output,
        collisions: flattened.collisions,
    })
}

/// Parse a document and convert it in one step
pub fn convert_str(
    content: &str,
    format: Format,
    options: Option<ConvertOptions>,
) -> CteResult<Converted> {
    let value = parse_document(content, format)?;
    convert(&value, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_smoke() {
        let value = Value::object([(
            "app",
            Value::object([("name", Value::from("test")), ("port", Value::Int(8080))]),
        )]);
        let converted = convert(&value, Some(ConvertOptions::default().with_prefix("TEST_"))).unwrap();
        assert_eq!(converted.output, "TEST_APP_NAME=test\nTEST_APP_PORT=8080\n");
        assert!(!converted.has_collisions());
    }

    #[test]
    fn test_convert_null_and_empty() {
        let value = Value::object([("a", Value::Null), ("b", Value::Object(vec![]))]);
        let converted = convert(&value, None).unwrap();
        assert_eq!(converted.output, "A=\n");
    }

    #[test]
    fn test_convert_sorted() {
        let value = Value::object([("b", Value::Int(2)), ("a", Value::Int(1))]);
        let converted = convert(&value, Some(ConvertOptions::default().with_sort_keys(true))).unwrap();
        assert_eq!(converted.output, "A=1\nB=2\n");
    }

    #[test]
    fn test_convert_quotes_unsafe_values() {
        let value = Value::object([("greeting", Value::from("hello $USER"))]);
        let converted = convert(&value, None).unwrap();
        assert_eq!(converted.output, "GREETING=\"hello \\$USER\"\n");
    }

    #[test]
    fn test_convert_reports_collisions() {
        let value = Value::object([("foo-bar", Value::Int(1)), ("foo_bar", Value::Int(2))]);
        let converted = convert(&value, None).unwrap();
        assert_eq!(converted.output, "FOO_BAR=1\n");
        assert_eq!(converted.collisions.len(), 1);
    }

    #[test]
    fn test_convert_str_rejects_scalar_document() {
        let err = convert_str("just a string", Format::Yaml, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedRoot);
    }
}
