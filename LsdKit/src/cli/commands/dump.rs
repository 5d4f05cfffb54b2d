//! CLI command for dumping an LSD table to a JSON folder
//!
//! Only the JSON export is written; the source file is never rewritten.

use std::path::{Path, PathBuf};

use crate::formats::lsd::{read_lsd, write_lsd_json};

/// Name of the folder created for dumps when no output directory is given
pub const DUMP_DIR_NAME: &str = "LSD Dump";

/// Default dump location: a folder on the desktop, or the working directory
/// when no desktop folder exists
#[must_use]
pub fn default_dump_dir() -> PathBuf {
    dirs::desktop_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DUMP_DIR_NAME)
}

pub fn execute(path: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let dir = output.map_or_else(default_dump_dir, Path::to_path_buf);
    let (dest, count) = dump_to_dir(path, &dir)?;
    println!("Dumped {} records to {}", count, dest.display());
    Ok(())
}

/// Write `<stem>.json` for `source` into `dir`, creating the directory
///
/// Returns the written path and the number of records.
pub fn dump_to_dir(source: &Path, dir: &Path) -> anyhow::Result<(PathBuf, usize)> {
    let table = read_lsd(source)?;

    let stem = source
        .file_stem()
        .ok_or_else(|| anyhow::anyhow!("Invalid source path: {}", source.display()))?;
    let dest = dir.join(format!("{}.json", stem.to_string_lossy()));

    std::fs::create_dir_all(dir)?;
    write_lsd_json(&dest, &table)?;
    tracing::info!("Dumped {} records to {:?}", table.len(), dest);

    Ok((dest, table.len()))
}
