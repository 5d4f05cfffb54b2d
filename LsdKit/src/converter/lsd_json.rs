//! LSD (binary) <-> JSON conversion

use super::{ConvertPhase, ConvertProgress, ConvertProgressCallback};
use crate::error::Result;
use crate::formats::lsd::{self, LsdJsonOptions};
use crate::utils::write_file_atomic;

use std::fs;
use std::path::Path;

/// Convert a binary LSD file to JSON
///
/// # Errors
/// Returns an error if reading, decoding, or writing fails.
pub fn convert_lsd_to_json<P: AsRef<Path>>(source: P, dest: P) -> Result<()> {
    convert_lsd_to_json_with_progress(source, dest, LsdJsonOptions::default(), &|_| {})
}

/// Convert a binary LSD file to JSON with progress callback
///
/// # Errors
/// Returns an error if reading, decoding, or writing fails.
pub fn convert_lsd_to_json_with_progress<P: AsRef<Path>>(
    source: P,
    dest: P,
    options: LsdJsonOptions,
    progress: ConvertProgressCallback,
) -> Result<()> {
    tracing::info!(
        "Converting LSD→JSON: {:?} → {:?}",
        source.as_ref(),
        dest.as_ref()
    );

    progress(&ConvertProgress::with_message(
        ConvertPhase::ReadingSource,
        1,
        3,
        "Reading LSD file...",
    ));
    let table = lsd::read_lsd(&source)?;

    progress(&ConvertProgress::with_message(
        ConvertPhase::Converting,
        2,
        3,
        format!("Converting {} records to JSON...", table.len()),
    ));
    let json = lsd::serialize_lsd_json(&table, options)?;

    progress(&ConvertProgress::with_message(
        ConvertPhase::WritingOutput,
        3,
        3,
        "Writing JSON file...",
    ));
    write_file_atomic(dest, json.as_bytes())?;

    progress(&ConvertProgress::new(ConvertPhase::Complete, 3, 3));
    tracing::info!("Conversion complete");
    Ok(())
}

/// Convert an LSD JSON file to the binary format
///
/// # Errors
/// Returns an error if reading, schema validation, or writing fails.
pub fn convert_json_to_lsd<P: AsRef<Path>>(source: P, dest: P) -> Result<()> {
    convert_json_to_lsd_with_progress(source, dest, &|_| {})
}

/// Convert an LSD JSON file to the binary format with progress callback
///
/// # Errors
/// Returns an error if reading, schema validation, or writing fails.
pub fn convert_json_to_lsd_with_progress<P: AsRef<Path>>(
    source: P,
    dest: P,
    progress: ConvertProgressCallback,
) -> Result<()> {
    tracing::info!(
        "Converting JSON→LSD: {:?} → {:?}",
        source.as_ref(),
        dest.as_ref()
    );

    progress(&ConvertProgress::with_message(
        ConvertPhase::ReadingSource,
        1,
        3,
        "Reading JSON file...",
    ));
    let content = fs::read_to_string(&source)?;

    progress(&ConvertProgress::with_message(
        ConvertPhase::Converting,
        2,
        3,
        "Validating JSON document...",
    ));
    let table = lsd::parse_lsd_json(&content)?;
    let data = lsd::serialize_lsd(&table)?;

    progress(&ConvertProgress::with_message(
        ConvertPhase::WritingOutput,
        3,
        3,
        format!("Writing {} records to LSD...", table.len()),
    ));
    write_file_atomic(dest, &data)?;

    progress(&ConvertProgress::new(ConvertPhase::Complete, 3, 3));
    tracing::info!("Conversion complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::lsd::{LsdRecord, LsdTable};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use tempfile::tempdir;

    #[test]
    fn test_lsd_json_lsd_file_roundtrip() {
        let dir = tempdir().unwrap();
        let dat = dir.path().join("toc.dat");
        let json = dir.path().join("toc.json");
        let back = dir.path().join("back.dat");

        let original = [0x02, 0x00, 1, 0, 2, 0, 0x1F, 0, 0xFF, 0xFF, 0, 0, 0x34, 0x12];
        fs::write(&dat, original).unwrap();

        convert_lsd_to_json(&dat, &json).unwrap();
        convert_json_to_lsd(&json, &back).unwrap();

        assert_eq!(fs::read(&back).unwrap(), original.to_vec());
    }

    #[test]
    fn test_progress_phases() {
        let dir = tempdir().unwrap();
        let dat = dir.path().join("toc.dat");
        let json = dir.path().join("toc.json");
        let table: LsdTable = [LsdRecord::new(1, 2, 3)].into_iter().collect();
        lsd::write_lsd(&dat, &table).unwrap();

        let phases = RefCell::new(Vec::new());
        convert_lsd_to_json_with_progress(&dat, &json, LsdJsonOptions { indent: 2 }, &|p| {
            phases.borrow_mut().push(p.phase);
        })
        .unwrap();

        assert_eq!(
            phases.into_inner(),
            vec![
                ConvertPhase::ReadingSource,
                ConvertPhase::Converting,
                ConvertPhase::WritingOutput,
                ConvertPhase::Complete,
            ]
        );
        assert!(fs::read_to_string(&json).unwrap().contains("\n  \"header\""));
    }

    #[test]
    fn test_bad_json_leaves_destination_untouched() {
        let dir = tempdir().unwrap();
        let json = dir.path().join("bad.json");
        let dat = dir.path().join("toc.dat");
        fs::write(&json, r#"{"LSD": {}}"#).unwrap();
        fs::write(&dat, [0x00, 0x00]).unwrap();

        assert!(convert_json_to_lsd(&json, &dat).is_err());
        assert_eq!(fs::read(&dat).unwrap(), vec![0x00, 0x00]);
    }
}
