//! Scalar serialization
//!
//! Floats use Rust's shortest round-trip formatting: the printed digits are
//! the fewest that parse back to the identical `f64`. Magnitudes in
//! `[1e-5, 1e16)` (and zero) print positionally with `.0` kept on integral
//! values; anything else prints in exponent form such as `1e16` or
//! `1.5e-7`. Non-finite values print as `nan`, `inf` and `-inf`.

use crate::constants::{
    FALSE_LITERAL, FLOAT_EXP_LOWER, FLOAT_EXP_UPPER, INF_LITERAL, NAN_LITERAL, NEG_INF_LITERAL,
    TRUE_LITERAL,
};
use crate::value::Value;

/// Render a scalar as the right-hand side of an assignment.
/// Returns `None` for arrays and objects, which are never leaves.
pub fn encode_scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(encode_bool(*b).to_string()),
        Value::Int(n) => Some(n.to_string()),
        Value::Float(f) => Some(encode_float(*f)),
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

pub fn encode_bool(b: bool) -> &'static str {
    if b {
        TRUE_LITERAL
    } else {
        FALSE_LITERAL
    }
}

/// Shortest decimal text that re-parses to the same float
pub fn encode_float(f: f64) -> String {
    if f.is_nan() {
        return NAN_LITERAL.to_string();
    }
    if f.is_infinite() {
        let literal = if f.is_sign_positive() {
            INF_LITERAL
        } else {
            NEG_INF_LITERAL
        };
        return literal.to_string();
    }

    let magnitude = f.abs();
    if magnitude != 0.0 && !(FLOAT_EXP_LOWER..FLOAT_EXP_UPPER).contains(&magnitude) {
        return format!("{:e}", f);
    }

    let text = f.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}
