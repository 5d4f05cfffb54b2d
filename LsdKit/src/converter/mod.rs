//! Format conversion utilities
//!
//! This module handles conversions between the two LSD representations:
//! - LSD (binary `.dat`/`.lsd`) - Table of contents read by the game
//! - JSON - Human-readable form for editing

mod lsd_json;
mod types;

pub use types::{ConvertPhase, ConvertProgress, ConvertProgressCallback};

pub use lsd_json::{
    convert_json_to_lsd, convert_json_to_lsd_with_progress, convert_lsd_to_json,
    convert_lsd_to_json_with_progress,
};
