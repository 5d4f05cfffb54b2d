//! # LsdKit
//!
//! A pure-Rust library for editing the LSD table of contents used by the
//! game's asset system, and converting it to and from JSON.
//!
//! ## Format
//!
//! A 16-bit little-endian record count followed by fixed 6-byte records of
//! `main_id`, `string_id` and `unlock_id`, each a little-endian `u16`.
//!
//! ## Quick Start
//!
//! ### Editing a table
//!
//! ```no_run
//! use lsdkit::formats::lsd::{LsdRecord, read_lsd, write_lsd};
//!
//! let mut table = read_lsd("toc.dat")?;
//! table.push(LsdRecord::new(1, 2, 0x1F))?;
//! table.remove(0)?;
//! write_lsd("toc.dat", &table)?;
//! # Ok::<(), lsdkit::Error>(())
//! ```
//!
//! ### Converting to JSON
//!
//! ```no_run
//! use lsdkit::converter::convert_lsd_to_json;
//!
//! convert_lsd_to_json("toc.dat", "toc.json")?;
//! # Ok::<(), lsdkit::Error>(())
//! ```
//!
//! ### In-memory codec
//!
//! ```
//! use lsdkit::prelude::*;
//!
//! let table = parse_lsd_bytes(&[0x01, 0x00, 0x01, 0x00, 0x02, 0x00, 0x1F, 0x00])?;
//! let doc = to_json(&table);
//! assert_eq!(doc["LSD"]["Item 0"]["asset_id"], 1);
//! assert_eq!(serialize_lsd(&from_json(&doc)?)?, [1, 0, 1, 0, 2, 0, 0x1F, 0]);
//! # Ok::<(), lsdkit::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `lsdkit` command-line binary

pub mod converter;
pub mod error;
pub mod formats;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::formats::lsd::{
        LsdJsonOptions, LsdRecord, LsdTable, MAX_RECORDS, from_json, parse_lsd_bytes,
        parse_lsd_json, read_lsd, read_lsd_json, serialize_lsd, serialize_lsd_json, to_json,
        write_lsd, write_lsd_json,
    };

    pub use crate::converter;
}

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
