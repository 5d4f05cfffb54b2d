//! CLI commands for viewing and editing LSD tables

use std::path::Path;

use super::TableFormat;
use crate::formats::lsd::{
    LsdRecord, LsdTable, read_lsd, read_lsd_json, write_lsd, write_lsd_json,
};

/// Load a table from a binary or JSON file, chosen by extension
pub fn load_table(path: &Path) -> anyhow::Result<LsdTable> {
    let table = match TableFormat::detect(path, None)? {
        TableFormat::Binary => read_lsd(path)?,
        TableFormat::Json => read_lsd_json(path)?,
    };
    Ok(table)
}

/// Save a table back in the format its extension names
pub fn save_table(path: &Path, table: &LsdTable) -> anyhow::Result<()> {
    match TableFormat::detect(path, None)? {
        TableFormat::Binary => write_lsd(path, table)?,
        TableFormat::Json => write_lsd_json(path, table)?,
    }
    Ok(())
}

/// List records with their row index
pub fn list(path: &Path, limit: Option<usize>) -> anyhow::Result<()> {
    let table = load_table(path)?;

    println!("{}: {} records", path.display(), table.len());
    if table.is_empty() {
        return Ok(());
    }

    println!();
    println!("{:>5}  {:>7}  {:>9}  {:>9}", "Row", "Main ID", "String ID", "Unlock ID");
    let shown = limit.unwrap_or(table.len());
    for (i, record) in table.iter().enumerate().take(shown) {
        println!("{}", format_row(i, record));
    }

    if shown < table.len() {
        println!("... and {} more", table.len() - shown);
    }

    Ok(())
}

/// Append a record and save the file in its own format
pub fn add(path: &Path, record: LsdRecord, create: bool) -> anyhow::Result<()> {
    let mut table = if path.exists() {
        load_table(path)?
    } else if create {
        // Fail on an unknown extension before anything is written
        TableFormat::detect(path, None)?;
        LsdTable::new()
    } else {
        anyhow::bail!(
            "File does not exist: {}. Use --create to create a new file.",
            path.display()
        );
    };

    let index = table.push(record)?;
    save_table(path, &table)?;

    println!("Added entry: {}", format_row(index, &record).trim_start());
    Ok(())
}

/// Remove the record at `index` and save the file in its own format
pub fn delete(path: &Path, index: usize) -> anyhow::Result<()> {
    let mut table = load_table(path)?;

    let removed = table.remove(index)?;
    save_table(path, &table)?;

    println!("Deleted entry: {}", format_row(index, &removed).trim_start());
    println!("  {} records remaining", table.len());
    Ok(())
}

/// Format one row for display; the unlock id is shown in hex
fn format_row(index: usize, record: &LsdRecord) -> String {
    format!(
        "{:>5}  {:>7}  {:>9}  {:>9}",
        index,
        record.main_id,
        record.string_id,
        record.unlock_hex()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_format_row() {
        assert_eq!(
            format_row(3, &LsdRecord::new(1, 2, 0x1F)),
            "    3        1          2         1F"
        );
    }

    #[test]
    fn test_add_requires_create_for_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("toc.dat");

        assert!(add(&path, LsdRecord::new(1, 2, 3), false).is_err());
        assert!(!path.exists());

        add(&path, LsdRecord::new(1, 2, 3), true).unwrap();
        add(&path, LsdRecord::new(1, 2, 3), false).unwrap();
        assert_eq!(read_lsd(&path).unwrap().len(), 2);
    }

    #[test]
    fn test_delete_by_index_keeps_duplicates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("toc.dat");
        let table: LsdTable = [
            LsdRecord::new(1, 1, 1),
            LsdRecord::new(2, 2, 2),
            LsdRecord::new(1, 1, 1),
        ]
        .into_iter()
        .collect();
        write_lsd(&path, &table).unwrap();

        delete(&path, 2).unwrap();
        assert_eq!(
            read_lsd(&path).unwrap().records(),
            &[LsdRecord::new(1, 1, 1), LsdRecord::new(2, 2, 2)]
        );
    }

    #[test]
    fn test_add_and_delete_keep_json_files_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("toc.json");
        let table: LsdTable = (0..200u16).map(|i| LsdRecord::new(i, i + 1, i % 16)).collect();
        write_lsd_json(&path, &table).unwrap();

        add(&path, LsdRecord::new(1, 2, 3), false).unwrap();
        let after_add = read_lsd_json(&path).unwrap();
        assert_eq!(after_add.len(), 201);
        assert_eq!(after_add.get(200), Some(&LsdRecord::new(1, 2, 3)));

        delete(&path, 0).unwrap();
        let after_delete = read_lsd_json(&path).unwrap();
        assert_eq!(after_delete.len(), 200);
        assert_eq!(after_delete.get(0), Some(&LsdRecord::new(1, 2, 1)));
    }

    #[test]
    fn test_add_rejects_unknown_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("toc.txt");
        std::fs::write(&path, "{\n not a table").unwrap();

        assert!(add(&path, LsdRecord::new(1, 2, 3), false).is_err());
        assert!(delete(&path, 0).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\n not a table");

        let missing = dir.path().join("new.txt");
        assert!(add(&missing, LsdRecord::new(1, 2, 3), true).is_err());
        assert!(!missing.exists());
    }

    #[test]
    fn test_delete_out_of_range_leaves_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("toc.dat");
        std::fs::write(&path, [0x01, 0x00, 1, 0, 2, 0, 3, 0]).unwrap();

        assert!(delete(&path, 5).is_err());
        assert_eq!(std::fs::read(&path).unwrap(), vec![0x01, 0x00, 1, 0, 2, 0, 3, 0]);
    }
}
