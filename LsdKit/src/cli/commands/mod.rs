use clap::Subcommand;
use std::path::{Path, PathBuf};

pub mod convert;
pub mod dump;
mod execute;
pub mod table;

#[derive(Subcommand)]
pub enum Commands {
    /// List the records of an LSD table (binary or JSON)
    List {
        /// LSD file to read (.dat, .lsd or .json)
        path: PathBuf,

        /// Maximum records to display
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Append a record to an LSD table (binary or JSON)
    Add {
        /// LSD file to edit
        path: PathBuf,

        /// Main (asset) id, decimal
        #[arg(long, value_parser = parse_decimal_id)]
        main_id: i64,

        /// String id, decimal
        #[arg(long, value_parser = parse_decimal_id)]
        string_id: i64,

        /// Unlock id, hexadecimal (e.g. "1F" or "0x1F")
        #[arg(long, value_parser = parse_hex_id)]
        unlock_id: i64,

        /// Start an empty table if the file does not exist
        #[arg(long)]
        create: bool,
    },

    /// Delete the record at a row index from an LSD table (binary or JSON)
    Delete {
        /// LSD file to edit
        path: PathBuf,

        /// Row index as shown by `list`
        index: usize,
    },

    /// Convert between binary LSD and JSON
    Convert {
        /// Source file
        #[arg(short, long)]
        source: PathBuf,

        /// Destination file
        #[arg(short, long)]
        destination: PathBuf,

        /// Input format (auto-detected from extension if not specified)
        #[arg(short = 'i', long)]
        input_format: Option<String>,

        /// Output format (auto-detected from extension if not specified)
        #[arg(short = 'o', long)]
        output_format: Option<String>,

        /// Suppress step output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Export a binary LSD file as JSON into a dump folder
    Dump {
        /// LSD file to export
        path: PathBuf,

        /// Output directory (defaults to "LSD Dump" on the desktop)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Table representation chosen from a format name or file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Binary,
    Json,
}

impl TableFormat {
    /// Resolve a format name ("dat", "lsd", "json"), case-insensitive
    ///
    /// # Errors
    /// Returns an error for any other name.
    pub fn from_name(name: &str) -> anyhow::Result<Self> {
        match name.to_lowercase().as_str() {
            "dat" | "lsd" | "bin" => Ok(Self::Binary),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("Unsupported format '{other}' (expected dat, lsd or json)"),
        }
    }

    /// Detect the format from a path's extension, or use `explicit` if given
    ///
    /// # Errors
    /// Returns an error if the format cannot be determined.
    pub fn detect(path: &Path, explicit: Option<&str>) -> anyhow::Result<Self> {
        let name = if let Some(fmt) = explicit {
            fmt.to_string()
        } else {
            path.extension()
                .and_then(|s| s.to_str())
                .map(str::to_string)
                .ok_or_else(|| {
                    anyhow::anyhow!("Cannot detect format from extension of {}", path.display())
                })?
        };
        Self::from_name(&name)
    }
}

/// Parse a decimal id
///
/// Range checking happens when the record is built, so values such as
/// `70000` or `-1` parse here and are rejected with the offending field named.
///
/// # Errors
/// Returns a message if the text is not a decimal integer.
pub fn parse_decimal_id(s: &str) -> Result<i64, String> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| format!("'{s}' is not a decimal integer"))
}

/// Parse a hexadecimal id, with or without a `0x` prefix
///
/// # Errors
/// Returns a message if the text is not a hexadecimal integer.
pub fn parse_hex_id(s: &str) -> Result<i64, String> {
    let trimmed = s.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    i64::from_str_radix(digits, 16).map_err(|_| format!("'{s}' is not a hexadecimal integer"))
}
