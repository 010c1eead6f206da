//! Output formatting for a computed leaderboard.
//!
//! Every formatter consumes the read-only [`Leaderboard`] and returns a
//! string; nothing here touches storage or recomputes ratings.

mod console;
mod tsv;

pub use console::{format_leaderboard_console, format_leaderboard_plain};
pub use tsv::{format_tsv, format_tsv_header};

use crate::error::Result;
use crate::leaderboard::Leaderboard;

/// Serialize the leaderboard as pretty-printed JSON.
pub fn format_json(board: &Leaderboard<'_>) -> Result<String> {
    Ok(serde_json::to_string_pretty(board)?)
}
