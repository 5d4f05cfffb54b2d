//! Command execution implementations

use super::Commands;
use super::{convert, dump, table};
use crate::formats::lsd::LsdRecord;

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::List { path, limit } => table::list(path, *limit),
            Commands::Add {
                path,
                main_id,
                string_id,
                unlock_id,
                create,
            } => {
                let record = LsdRecord::try_from_wide(*main_id, *string_id, *unlock_id)?;
                table::add(path, record, *create)
            }
            Commands::Delete { path, index } => table::delete(path, *index),
            Commands::Convert {
                source,
                destination,
                input_format,
                output_format,
                quiet,
            } => convert::execute(
                source,
                destination,
                input_format.as_deref(),
                output_format.as_deref(),
                *quiet,
            ),
            Commands::Dump { path, output } => dump::execute(path, output.as_deref()),
        }
    }
}
