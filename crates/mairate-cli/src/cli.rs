//! CLI argument definitions for mairate.

use clap::{Parser, Subcommand, ValueEnum};
use mairate_core::config::display;

#[derive(Parser)]
#[command(name = "mairate")]
#[command(about = "maimai DX rating calculator", version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute the leaderboard from a score CSV
    Calculate {
        /// Score CSV file
        #[arg(short, long, value_name = "FILE")]
        scores: String,
        /// Current-version chart master CSV
        #[arg(long, value_name = "FILE", default_value = "new_song_master.csv")]
        current_catalog: String,
        /// Legacy chart master CSV
        #[arg(long, value_name = "FILE", default_value = "old_song_master.csv")]
        legacy_catalog: String,
        /// How many current-pool records to keep
        #[arg(long, default_value_t = display::CURRENT_CAPACITY)]
        current_top: usize,
        /// How many legacy-pool records to keep
        #[arg(long, default_value_t = display::LEGACY_CAPACITY)]
        legacy_top: usize,
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
        /// Write output to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<String>,
    },
    /// Rate a single play from a chart constant and a raw score
    Rate {
        /// Chart difficulty constant (e.g. 13.4)
        #[arg(long)]
        constant: f64,
        /// Achievement score with 4 implied decimal digits (e.g. 1010000)
        #[arg(long)]
        score: u32,
    },
    /// Check master data files and report catalog health
    Check {
        /// Current-version chart master CSV
        #[arg(long, value_name = "FILE", default_value = "new_song_master.csv")]
        current_catalog: String,
        /// Legacy chart master CSV
        #[arg(long, value_name = "FILE", default_value = "old_song_master.csv")]
        legacy_catalog: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Tsv,
    Json,
}
