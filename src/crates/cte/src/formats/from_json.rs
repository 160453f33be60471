//! JSON adapter

use super::Format;
use crate::types::{CteError, CteResult};
use crate::value::Value;
use serde_json::Value as JsonValue;

pub(super) fn parse(content: &str) -> CteResult<Value> {
    let json: JsonValue =
        serde_json::from_str(content).map_err(|e| CteError::parse(Format::Json, e.to_string()))?;
    convert(json)
}

fn convert(value: JsonValue) -> CteResult<Value> {
    match value {
        JsonValue::Null => Ok(Value::Null),
        JsonValue::Bool(b) => Ok(Value::Bool(b)),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int(i))
            } else if n.is_u64() {
                Err(CteError::parse(
                    Format::Json,
                    format!("integer {} out of range", n),
                ))
            } else {
                n.as_f64()
                    .map(Value::Float)
                    .ok_or_else(|| CteError::parse(Format::Json, format!("invalid number {}", n)))
            }
        }
        JsonValue::String(s) => Ok(Value::String(s)),
        JsonValue::Array(items) => items
            .into_iter()
            .map(convert)
            .collect::<CteResult<Vec<_>>>()
            .map(Value::Array),
        JsonValue::Object(fields) => fields
            .into_iter()
            .map(|(key, value)| Ok((key, convert(value)?)))
            .collect::<CteResult<Vec<_>>>()
            .map(Value::Object),
    }
}
