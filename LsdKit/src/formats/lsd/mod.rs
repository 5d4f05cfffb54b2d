//! LSD table of contents format
//!
//! Binary `.dat` (also shipped as `.lsd`) table of contents used by the
//! game's asset system. A 16-bit record count followed by fixed 6-byte
//! records of three little-endian `u16` fields. Can be converted to/from
//! JSON.

mod editor;
mod json;
mod reader;
mod writer;

pub use json::{
    LsdJsonOptions, from_json, parse_lsd_json, read_lsd_json, serialize_lsd_json, to_json,
    write_lsd_json,
};
pub use reader::{parse_lsd_bytes, read_lsd};
pub use writer::{serialize_lsd, write_lsd};

use crate::error::{Error, Result};

/// Size of the leading record count in bytes
pub const COUNT_SIZE: usize = 2;

/// Size of each record in bytes (3 x u16)
pub const RECORD_SIZE: usize = 6;

/// Largest number of records the count field can express
pub const MAX_RECORDS: usize = u16::MAX as usize;

/// Schema tag written to the `header` field of JSON exports
pub const JSON_HEADER: &str = "SVR06";

/// A single table of contents entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LsdRecord {
    /// Asset identifier (`asset_id` in JSON)
    pub main_id: u16,
    /// Display string identifier
    pub string_id: u16,
    /// Unlock condition identifier, shown in hex by editors
    pub unlock_id: u16,
}

impl LsdRecord {
    #[must_use]
    pub const fn new(main_id: u16, string_id: u16, unlock_id: u16) -> Self {
        Self {
            main_id,
            string_id,
            unlock_id,
        }
    }

    /// Build a record from wider integers, rejecting values outside `0..=65535`
    ///
    /// # Errors
    /// Returns [`Error::FieldOutOfRange`] naming the first field that does not fit.
    pub fn try_from_wide(main_id: i64, string_id: i64, unlock_id: i64) -> Result<Self> {
        Ok(Self {
            main_id: narrow("main_id", main_id)?,
            string_id: narrow("string_id", string_id)?,
            unlock_id: narrow("unlock_id", unlock_id)?,
        })
    }

    /// Unlock id formatted the way editors display it (uppercase hex, no prefix)
    #[must_use]
    pub fn unlock_hex(&self) -> String {
        format!("{:X}", self.unlock_id)
    }
}

impl From<(u16, u16, u16)> for LsdRecord {
    fn from((main_id, string_id, unlock_id): (u16, u16, u16)) -> Self {
        Self::new(main_id, string_id, unlock_id)
    }
}

fn narrow(field: &'static str, value: i64) -> Result<u16> {
    u16::try_from(value).map_err(|_| Error::FieldOutOfRange { field, value })
}

/// An ordered table of contents
///
/// Order is the file order; duplicate records are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LsdTable {
    pub(crate) records: Vec<LsdRecord>,
}

impl LsdTable {
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Build a table from records, rejecting more than [`MAX_RECORDS`] entries
    ///
    /// # Errors
    /// Returns [`Error::TableTooLarge`] if `records` does not fit the count field.
    pub fn from_records(records: Vec<LsdRecord>) -> Result<Self> {
        if records.len() > MAX_RECORDS {
            return Err(Error::TableTooLarge {
                count: records.len(),
            });
        }
        Ok(Self { records })
    }

    /// Number of bytes this table occupies once encoded
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        COUNT_SIZE + RECORD_SIZE * self.records.len()
    }
}

impl FromIterator<LsdRecord> for LsdTable {
    /// Collects without a size check; [`serialize_lsd`] still rejects oversized tables.
    fn from_iter<I: IntoIterator<Item = LsdRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for LsdTable {
    type Item = LsdRecord;
    type IntoIter = std::vec::IntoIter<LsdRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a LsdTable {
    type Item = &'a LsdRecord;
    type IntoIter = std::slice::Iter<'a, LsdRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
