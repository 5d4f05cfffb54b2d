//! LSD file reading and parsing
//!
//!

use super::{COUNT_SIZE, LsdRecord, LsdTable, RECORD_SIZE};
use crate::error::{Error, Result};
use byteorder::{LittleEndian, ReadBytesExt};
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

/// Read an LSD table of contents from disk
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read.
/// Returns [`Error::TruncatedInput`] if the file is shorter than its record count implies.
///
/// [`Error::Io`]: crate::Error::Io
/// [`Error::TruncatedInput`]: crate::Error::TruncatedInput
pub fn read_lsd<P: AsRef<Path>>(path: P) -> Result<LsdTable> {
    let mut file = File::open(path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    parse_lsd_bytes(&buffer)
}

/// Parse LSD data from bytes
///
/// Bytes past the last declared record are ignored.
///
/// # Errors
///
/// Returns [`Error::TruncatedInput`] if fewer than `2 + 6 * count` bytes are available.
///
/// [`Error::TruncatedInput`]: crate::Error::TruncatedInput
pub fn parse_lsd_bytes(data: &[u8]) -> Result<LsdTable> {
    if data.len() < COUNT_SIZE {
        return Err(Error::TruncatedInput {
            expected: COUNT_SIZE,
            actual: data.len(),
        });
    }

    let mut cursor = Cursor::new(data);
    let count = cursor.read_u16::<LittleEndian>()? as usize;

    // Check the whole body up front so a short buffer never yields a partial table
    let expected = COUNT_SIZE + RECORD_SIZE * count;
    if data.len() < expected {
        return Err(Error::TruncatedInput {
            expected,
            actual: data.len(),
        });
    }

    let mut records = Vec::with_capacity(count);
    for _ in 0..count {
        let main_id = cursor.read_u16::<LittleEndian>()?;
        let string_id = cursor.read_u16::<LittleEndian>()?;
        let unlock_id = cursor.read_u16::<LittleEndian>()?;
        records.push(LsdRecord {
            main_id,
            string_id,
            unlock_id,
        });
    }

    if data.len() > expected {
        tracing::debug!(
            "Ignoring {} trailing bytes after {} records",
            data.len() - expected,
            count
        );
    }

    Ok(LsdTable { records })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_empty() {
        let table = parse_lsd_bytes(&[0x00, 0x00]).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_parse_single_record() {
        let table = parse_lsd_bytes(&[0x01, 0x00, 0x01, 0x00, 0x02, 0x00, 0x1F, 0x00]).unwrap();
        assert_eq!(table.records(), &[LsdRecord::new(1, 2, 0x1F)]);
    }

    #[test]
    fn test_parse_little_endian_fields() {
        let data = [0x01, 0x00, 0x34, 0x12, 0xFF, 0xFF, 0x00, 0x80];
        let table = parse_lsd_bytes(&data).unwrap();
        assert_eq!(table.records(), &[LsdRecord::new(0x1234, 0xFFFF, 0x8000)]);
    }

    #[test]
    fn test_parse_truncated_records() {
        // count = 2, only one full record present
        let data = [0x02, 0x00, 0x01, 0x00, 0x02, 0x00, 0x03, 0x00];
        let err = parse_lsd_bytes(&data).unwrap_err();
        assert!(matches!(
            err,
            Error::TruncatedInput {
                expected: 14,
                actual: 8
            }
        ));
    }

    #[test]
    fn test_parse_truncated_count() {
        assert!(matches!(
            parse_lsd_bytes(&[]),
            Err(Error::TruncatedInput {
                expected: 2,
                actual: 0
            })
        ));
        assert!(matches!(
            parse_lsd_bytes(&[0x01]),
            Err(Error::TruncatedInput { expected: 2, .. })
        ));
    }

    #[test]
    fn test_parse_ignores_trailing_bytes() {
        let data = [0x01, 0x00, 0x05, 0x00, 0x06, 0x00, 0x07, 0x00, 0xAA, 0xBB, 0xCC];
        let table = parse_lsd_bytes(&data).unwrap();
        assert_eq!(table.records(), &[LsdRecord::new(5, 6, 7)]);
    }
}
