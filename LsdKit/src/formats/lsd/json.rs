//! LSD JSON representation
//!
//! ```json
//! {
//!     "header": "SVR06",
//!     "LSD": {
//!         "Item 0": { "asset_id": 1, "string_id": 2, "unlock_id": 31 }
//!     }
//! }
//! ```
//!
//! Item labels are positional and regenerated on every export. On import
//! they are ignored; the order of the `LSD` mapping is the table order.

use super::{JSON_HEADER, LsdRecord, LsdTable, MAX_RECORDS};
use crate::error::{Error, Result};
use crate::utils::write_file_atomic;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

const HEADER_KEY: &str = "header";
const ENTRIES_KEY: &str = "LSD";
const ASSET_ID_KEY: &str = "asset_id";
const STRING_ID_KEY: &str = "string_id";
const UNLOCK_ID_KEY: &str = "unlock_id";

/// Options for writing LSD JSON text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LsdJsonOptions {
    /// Spaces per indentation level
    pub indent: usize,
}

impl Default for LsdJsonOptions {
    fn default() -> Self {
        Self { indent: 4 }
    }
}

/// Read an LSD JSON file from disk
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid JSON, or does
/// not have the LSD document shape.
pub fn read_lsd_json<P: AsRef<Path>>(path: P) -> Result<LsdTable> {
    let content = fs::read_to_string(path)?;
    parse_lsd_json(&content)
}

/// Write a table to disk as LSD JSON
///
/// # Errors
/// Returns an error if serialization or file writing fails.
pub fn write_lsd_json<P: AsRef<Path>>(path: P, table: &LsdTable) -> Result<()> {
    let json = serialize_lsd_json(table, LsdJsonOptions::default())?;
    write_file_atomic(path, json.as_bytes())?;
    Ok(())
}

/// Parse LSD JSON text into a table
///
/// # Errors
/// Returns [`Error::JsonError`] for malformed JSON and [`Error::Schema`] for
/// a document of the wrong shape.
pub fn parse_lsd_json(content: &str) -> Result<LsdTable> {
    let doc: Value = serde_json::from_str(content)?;
    from_json(&doc)
}

/// Serialize a table to pretty-printed LSD JSON text with a trailing newline
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn serialize_lsd_json(table: &LsdTable, options: LsdJsonOptions) -> Result<String> {
    let doc = to_json(table);
    let indent = " ".repeat(options.indent);

    let mut output = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut output, formatter);
    doc.serialize(&mut serializer)?;

    let mut json = String::from_utf8(output)?;
    json.push('\n');
    Ok(json)
}

/// Build the JSON document for a table
///
/// `main_id` is exported as `asset_id`.
#[must_use]
pub fn to_json(table: &LsdTable) -> Value {
    let entries: Map<String, Value> = table
        .iter()
        .enumerate()
        .map(|(i, record)| (format!("Item {i}"), record_to_json(record)))
        .collect();

    let mut doc = Map::new();
    doc.insert(HEADER_KEY.to_string(), Value::from(JSON_HEADER));
    doc.insert(ENTRIES_KEY.to_string(), Value::Object(entries));
    Value::Object(doc)
}

/// Read a table back from a JSON document
///
/// # Errors
/// Returns [`Error::Schema`] if `header` or `LSD` is missing, or if any
/// entry lacks one of its three ids or holds a value outside `0..=65535`.
pub fn from_json(doc: &Value) -> Result<LsdTable> {
    let root = doc
        .as_object()
        .ok_or_else(|| schema("document is not a JSON object"))?;

    let header = root
        .get(HEADER_KEY)
        .ok_or_else(|| schema("missing 'header' key"))?;
    if header.as_str() != Some(JSON_HEADER) {
        tracing::warn!("Unexpected LSD JSON header {header}, expected \"{JSON_HEADER}\"");
    }

    let entries = root
        .get(ENTRIES_KEY)
        .ok_or_else(|| schema("missing 'LSD' key"))?
        .as_object()
        .ok_or_else(|| schema("'LSD' is not an object"))?;

    if entries.len() > MAX_RECORDS {
        return Err(schema(format!(
            "{} entries exceed the 65535 record limit",
            entries.len()
        )));
    }

    let records = entries
        .iter()
        .map(|(label, entry)| record_from_json(label, entry))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!("Read {} records from LSD JSON", records.len());
    Ok(LsdTable { records })
}

fn record_to_json(record: &LsdRecord) -> Value {
    let mut entry = Map::new();
    entry.insert(ASSET_ID_KEY.to_string(), Value::from(record.main_id));
    entry.insert(STRING_ID_KEY.to_string(), Value::from(record.string_id));
    entry.insert(UNLOCK_ID_KEY.to_string(), Value::from(record.unlock_id));
    Value::Object(entry)
}

fn record_from_json(label: &str, entry: &Value) -> Result<LsdRecord> {
    let fields = entry
        .as_object()
        .ok_or_else(|| schema(format!("entry '{label}' is not an object")))?;

    let field = |key: &str| -> Result<u16> {
        let value = fields
            .get(key)
            .ok_or_else(|| schema(format!("entry '{label}' is missing '{key}'")))?;
        value
            .as_u64()
            .and_then(|v| u16::try_from(v).ok())
            .ok_or_else(|| {
                schema(format!(
                    "entry '{label}' has invalid '{key}': {value} (expected integer 0-65535)"
                ))
            })
    };

    Ok(LsdRecord {
        main_id: field(ASSET_ID_KEY)?,
        string_id: field(STRING_ID_KEY)?,
        unlock_id: field(UNLOCK_ID_KEY)?,
    })
}

fn schema(message: impl Into<String>) -> Error {
    Error::Schema(message.into())
}
