//! Adapters from third-party parsers into the [`Value`] model
//!
//! Each adapter resolves format-specific extensions before the tree reaches
//! the flattener: YAML tags are unwrapped, TOML datetimes become strings.

mod from_json;
mod from_toml;
mod from_yaml;

use crate::types::{CteError, CteResult};
use crate::value::Value;
use std::fmt;
use std::path::Path as FsPath;
use std::str::FromStr;

/// Supported configuration document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Toml => "toml",
        }
    }

    /// Detect the format from a file extension
    pub fn from_path(path: impl AsRef<FsPath>) -> CteResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                CteError::UnsupportedFormat(format!(
                    "cannot determine format of {} from its extension",
                    path.display()
                ))
            })?;
        extension.parse()
    }

    /// Parse document text into a value tree
    pub fn parse(&self, content: &str) -> CteResult<Value> {
        match self {
            Format::Json => from_json::parse(content),
            Format::Yaml => from_yaml::parse(content),
            Format::Toml => from_toml::parse(content),
        }
    }
}

impl FromStr for Format {
    type Err = CteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            "toml" => Ok(Format::Toml),
            _ => Err(CteError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a document of the given format
pub fn parse_document(content: &str, format: Format) -> CteResult<Value> {
    format.parse(content)
}
