//! LSD table editing operations
//!
//! Provides functions for modifying LSD tables:
//! - Append, insert, replace entries
//! - Remove entries by row index
//!
//! Rows are addressed by position, never by value, so duplicate records
//! can be edited independently.

use super::{LsdRecord, LsdTable, MAX_RECORDS};
use crate::error::{Error, Result};

// ============================================================================
// LsdTable editing methods
// ============================================================================

impl LsdTable {
    /// Append a record to the end of the table
    ///
    /// # Returns
    /// The row index of the new record
    ///
    /// # Errors
    /// Returns [`Error::TableTooLarge`] if the table already holds 65535 records.
    pub fn push(&mut self, record: impl Into<LsdRecord>) -> Result<usize> {
        self.ensure_room()?;
        self.records.push(record.into());
        Ok(self.records.len() - 1)
    }

    /// Insert a record before the row at `index` (`index == len` appends)
    ///
    /// # Errors
    /// Returns [`Error::TableTooLarge`] if the table is full, or
    /// [`Error::IndexOutOfRange`] if `index > len`.
    pub fn insert(&mut self, index: usize, record: impl Into<LsdRecord>) -> Result<()> {
        if index > self.records.len() {
            return Err(self.out_of_range(index));
        }
        self.ensure_room()?;
        self.records.insert(index, record.into());
        Ok(())
    }

    /// Remove the record at `index`
    ///
    /// # Returns
    /// The removed record
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if no row exists at `index`.
    pub fn remove(&mut self, index: usize) -> Result<LsdRecord> {
        if index >= self.records.len() {
            return Err(self.out_of_range(index));
        }
        Ok(self.records.remove(index))
    }

    /// Replace the record at `index`
    ///
    /// # Returns
    /// The previous record
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if no row exists at `index`.
    pub fn set(&mut self, index: usize, record: impl Into<LsdRecord>) -> Result<LsdRecord> {
        let len = self.records.len();
        let slot = self
            .records
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, record.into()))
    }

    /// Row indices of every record equal to `record`
    #[must_use]
    pub fn positions_of(&self, record: &LsdRecord) -> Vec<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| *r == record)
            .map(|(i, _)| i)
            .collect()
    }

    // ========================================================================
    // Query methods
    // ========================================================================

    /// Get the record at `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&LsdRecord> {
        self.records.get(index)
    }

    /// Get number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in file order
    pub fn iter(&self) -> std::slice::Iter<'_, LsdRecord> {
        self.records.iter()
    }

    /// Records in file order
    #[must_use]
    pub fn records(&self) -> &[LsdRecord] {
        &self.records
    }

    /// Consume the table, returning its records
    #[must_use]
    pub fn into_records(self) -> Vec<LsdRecord> {
        self.records
    }

    fn ensure_room(&self) -> Result<()> {
        if self.records.len() >= MAX_RECORDS {
            return Err(Error::TableTooLarge {
                count: self.records.len() + 1,
            });
        }
        Ok(())
    }

    fn out_of_range(&self, index: usize) -> Error {
        Error::IndexOutOfRange {
            index,
            len: self.records.len(),
        }
    }
}
