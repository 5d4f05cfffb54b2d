//! CLI interface for format conversion
use std::path::Path;
use std::time::Instant;

use super::TableFormat;
use crate::cli::progress::{print_convert_progress, print_done};
use crate::converter::{
    ConvertProgress, convert_json_to_lsd_with_progress, convert_lsd_to_json_with_progress,
};
use crate::formats::lsd::LsdJsonOptions;

pub fn execute(
    source: &Path,
    destination: &Path,
    input_format: Option<&str>,
    output_format: Option<&str>,
    quiet: bool,
) -> anyhow::Result<()> {
    if is_same_file(source, destination)? {
        anyhow::bail!(
            "Source and destination are the same file: {}",
            source.display()
        );
    }

    let input = TableFormat::detect(source, input_format)?;
    let output = TableFormat::detect(destination, output_format)?;

    let started = Instant::now();
    let report = |p: &ConvertProgress| {
        if !quiet {
            print_convert_progress(p);
        }
    };

    match (input, output) {
        (TableFormat::Binary, TableFormat::Json) => {
            if !quiet {
                println!("Converting LSD -> JSON");
            }
            convert_lsd_to_json_with_progress(
                source,
                destination,
                LsdJsonOptions::default(),
                &report,
            )?;
        }
        (TableFormat::Json, TableFormat::Binary) => {
            if !quiet {
                println!("Converting JSON -> LSD");
            }
            convert_json_to_lsd_with_progress(source, destination, &report)?;
        }
        (TableFormat::Binary, TableFormat::Binary) | (TableFormat::Json, TableFormat::Json) => {
            if !quiet {
                println!("Source and destination formats are the same, copying file...");
            }
            std::fs::copy(source, destination)?;
        }
    }

    if !quiet {
        print_done(started.elapsed());
    }
    Ok(())
}

/// Whether `destination` already names the same file as `source`
fn is_same_file(source: &Path, destination: &Path) -> anyhow::Result<bool> {
    if !destination.exists() {
        return Ok(false);
    }
    Ok(std::fs::canonicalize(source)? == std::fs::canonicalize(destination)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_same_file_is_rejected_and_kept() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.dat");
        let original = [0x01, 0x00, 1, 0, 2, 0, 3, 0];
        std::fs::write(&path, original).unwrap();

        assert!(execute(&path, &path, None, None, true).is_err());

        // Same file reached through a different spelling
        let indirect = dir.path().join(".").join("a.dat");
        assert!(execute(&path, &indirect, None, None, true).is_err());

        assert_eq!(std::fs::read(&path).unwrap(), original.to_vec());
    }

    #[test]
    fn test_same_format_copy() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("a.dat");
        let dest = dir.path().join("b.lsd");
        std::fs::write(&source, [0x00, 0x00]).unwrap();

        execute(&source, &dest, None, None, true).unwrap();
        assert_eq!(std::fs::read(&dest).unwrap(), vec![0x00, 0x00]);
    }

    #[test]
    fn test_binary_to_json() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("a.dat");
        let dest = dir.path().join("a.json");
        std::fs::write(&source, [0x01, 0x00, 5, 0, 6, 0, 7, 0]).unwrap();

        execute(&source, &dest, None, None, true).unwrap();
        let json = std::fs::read_to_string(&dest).unwrap();
        assert!(json.contains("\"asset_id\": 5"));
    }
}
