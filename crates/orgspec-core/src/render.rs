//! Rendering records in the supported output formats

use std::fmt::Display;

use serde::Serialize;

use crate::Result;
use crate::config::OutputFormat;

/// Render a record as text, JSON or YAML.
///
/// Text uses the record's `Display` implementation. JSON is pretty-printed.
/// Serializing a tree that still holds deferred fields fails.
pub fn render<T>(value: &T, format: OutputFormat) -> Result<String>
where
    T: Serialize + Display + ?Sized,
{
    let rendered = match format {
        OutputFormat::Text => value.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(value)? + "\n",
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    Ok(rendered)
}
