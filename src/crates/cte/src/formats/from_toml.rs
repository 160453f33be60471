//! TOML adapter

use super::Format;
use crate::types::{CteError, CteResult};
use crate::value::Value;
use toml::{Table, Value as TomlValue};

pub(super) fn parse(content: &str) -> CteResult<Value> {
    let table: Table = content
        .parse()
        .map_err(|e: toml::de::Error| CteError::parse(Format::Toml, e.to_string()))?;
    Ok(convert_table(table))
}

fn convert_table(table: Table) -> Value {
    Value::Object(
        table
            .into_iter()
            .map(|(key, value)| (key, convert(value)))
            .collect(),
    )
}

fn convert(value: TomlValue) -> Value {
    match value {
        TomlValue::String(s) => Value::String(s),
        TomlValue::Integer(n) => Value::Int(n),
        TomlValue::Float(f) => Value::Float(f),
        TomlValue::Boolean(b) => Value::Bool(b),
        TomlValue::Datetime(dt) => Value::String(dt.to_string()),
        TomlValue::Array(items) => Value::Array(items.into_iter().map(convert).collect()),
        TomlValue::Table(table) => convert_table(table),
    }
}
