use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::io::{self, Write};

use crate::models::{MediaKind, MediaRecord};
use crate::text::release_year;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json { pretty: bool },
    Yaml,
}

/// Adds the derived `release_year` and optionally wraps the record under its title.
pub fn shape(mut record: MediaRecord, kind: MediaKind, title_keyed: bool) -> Result<Value> {
    let year = release_year(record.date(kind));
    record
        .fields
        .insert("release_year".to_string(), Value::String(year));
    let title = record.title(kind).to_string();
    let value = serde_json::to_value(record).context("Failed to convert record to JSON")?;
    if !title_keyed {
        return Ok(value);
    }
    let mut wrapped = Map::new();
    wrapped.insert(title, value);
    Ok(Value::Object(wrapped))
}

pub fn render(document: &Value, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Yaml => serde_yaml::to_string(document).context("YAML encoding failed")?,
        OutputFormat::Json { pretty: true } => {
            serde_json::to_string_pretty(document).context("JSON encoding failed")?
        }
        OutputFormat::Json { pretty: false } => {
            serde_json::to_string(document).context("JSON encoding failed")?
        }
    };
    Ok(text)
}

/// Writes the rendered document followed by one newline. A reader that went away
/// (broken pipe) ends output quietly.
pub fn emit<W: Write>(mut out: W, document: &str) -> Result<()> {
    let written = writeln!(out, "{}", document.trim_end()).and_then(|()| out.flush());
    match written {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.context("Failed to write output"),
    }
}
