//! File format handlers

pub mod lsd;

// Re-export main table types
pub use lsd::{LsdRecord, LsdTable, read_lsd, write_lsd};
