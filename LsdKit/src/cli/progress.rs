//! CLI progress display utilities
//!
//! Step indicators with emojis, fed from the converter progress callbacks.

use std::time::Duration;

use console::{Emoji, style};
use indicatif::HumanDuration;

use crate::converter::{ConvertPhase, ConvertProgress};

// =============================================================================
// Emoji Constants (with ASCII fallbacks for terminals without emoji support)
// =============================================================================

/// Magnifying glass - for reading/scanning operations
pub static LOOKING_GLASS: Emoji<'_, '_> = Emoji("🔍 ", "");
/// Floppy disk - for writing/saving operations
pub static DISK: Emoji<'_, '_> = Emoji("💾 ", "");
/// Gear - for processing/conversion operations
pub static GEAR: Emoji<'_, '_> = Emoji("⚙️  ", "");
/// Sparkles - for completion
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");

/// Print a step indicator: `[1/3] 🔍 Message...`
pub fn print_step(current: usize, total: usize, emoji: &Emoji, msg: &str) {
    println!(
        "{} {}{}",
        style(format!("[{current}/{total}]")).bold().dim(),
        emoji,
        msg
    );
}

/// Print completion message: `✨ Done in 2s`
pub fn print_done(elapsed: Duration) {
    println!("{} Done in {}", SPARKLE, HumanDuration(elapsed));
}

/// Print a converter progress update as a numbered step
///
/// The `Complete` phase prints nothing; callers report completion with
/// [`print_done`] once the whole command has finished.
pub fn print_convert_progress(progress: &ConvertProgress) {
    let emoji = match progress.phase {
        ConvertPhase::ReadingSource => &LOOKING_GLASS,
        ConvertPhase::Converting => &GEAR,
        ConvertPhase::WritingOutput => &DISK,
        ConvertPhase::Complete => return,
    };
    let msg = progress
        .message
        .as_deref()
        .unwrap_or_else(|| progress.phase.as_str());
    print_step(progress.current, progress.total, emoji, msg);
}
