//! File system helpers

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

/// Replace the file at `path` with `contents`
///
/// The data goes to a temporary file in the same directory, which is then
/// renamed over `path`. A failed write leaves any existing file intact.
///
/// # Errors
/// Returns an IO error if the temporary file cannot be written or renamed.
pub fn write_file_atomic<P: AsRef<Path>>(path: P, contents: &[u8]) -> std::io::Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
