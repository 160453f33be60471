//! YAML adapter

use super::Format;
use crate::types::{CteError, CteResult};
use crate::value::Value;
use serde_yaml::Value as YamlValue;

pub(super) fn parse(content: &str) -> CteResult<Value> {
    let yaml: YamlValue =
        serde_yaml::from_str(content).map_err(|e| CteError::parse(Format::Yaml, e.to_string()))?;
    convert(yaml)
}

fn convert(value: YamlValue) -> CteResult<Value> {
    match value {
        YamlValue::Null => Ok(Value::Null),
        YamlValue::Bool(b) => Ok(Value::Bool(b)),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int(i))
            } else if n.is_u64() {
                Err(CteError::parse(
                    Format::Yaml,
                    format!("integer {} out of range", n),
                ))
            } else {
                n.as_f64()
                    .map(Value::Float)
                    .ok_or_else(|| CteError::parse(Format::Yaml, format!("invalid number {}", n)))
            }
        }
        YamlValue::String(s) => Ok(Value::String(s)),
        YamlValue::Sequence(items) => items
            .into_iter()
            .map(convert)
            .collect::<CteResult<Vec<_>>>()
            .map(Value::Array),
        YamlValue::Mapping(mapping) => {
            let mut fields = Vec::with_capacity(mapping.len());
            for (key, value) in mapping {
                let name = key_text(key)?;
                // `1` and `"1"` are distinct YAML keys but the same field name
                if fields.iter().any(|(existing, _)| *existing == name) {
                    return Err(CteError::parse(
                        Format::Yaml,
                        format!("duplicate mapping key {:?}", name),
                    ));
                }
                fields.push((name, convert(value)?));
            }
            Ok(Value::Object(fields))
        }
        YamlValue::Tagged(tagged) => convert(tagged.value),
    }
}

/// Render a scalar mapping key as text
fn key_text(key: YamlValue) -> CteResult<String> {
    match key {
        YamlValue::String(s) => Ok(s),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Null => Ok("null".to_string()),
        YamlValue::Tagged(tagged) => key_text(tagged.value),
        YamlValue::Sequence(_) | YamlValue::Mapping(_) => Err(CteError::parse(
            Format::Yaml,
            "mapping keys must be scalars",
        )),
    }
}
