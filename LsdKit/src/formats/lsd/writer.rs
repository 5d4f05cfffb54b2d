//! LSD file writing

use super::{LsdTable, MAX_RECORDS};
use crate::error::{Error, Result};
use crate::utils::write_file_atomic;
use byteorder::{LittleEndian, WriteBytesExt};
use std::path::Path;

/// Write an LSD table of contents to disk
///
/// The table is fully encoded before the file is touched, and the file is
/// replaced atomically, so a failure leaves any existing file as it was.
///
/// # Errors
/// Returns [`Error::TableTooLarge`] if the table holds more than 65535 records,
/// or an IO error if file writing fails.
pub fn write_lsd<P: AsRef<Path>>(path: P, table: &LsdTable) -> Result<()> {
    let data = serialize_lsd(table)?;
    write_file_atomic(&path, &data)?;
    tracing::info!(
        "Wrote {} records to {:?}",
        table.len(),
        path.as_ref()
    );
    Ok(())
}

/// Encode a table to its binary form
///
/// # Errors
/// Returns [`Error::TableTooLarge`] if the table holds more than 65535 records.
pub fn serialize_lsd(table: &LsdTable) -> Result<Vec<u8>> {
    let count = table.len();
    if count > MAX_RECORDS {
        return Err(Error::TableTooLarge { count });
    }

    let mut data = Vec::with_capacity(table.encoded_len());
    data.write_u16::<LittleEndian>(count as u16)?;

    for record in table {
        data.write_u16::<LittleEndian>(record.main_id)?;
        data.write_u16::<LittleEndian>(record.string_id)?;
        data.write_u16::<LittleEndian>(record.unlock_id)?;
    }

    Ok(data)
}
