//! Calculate command implementation.
//!
//! Loads both chart catalogs (each degrades to empty on failure), imports
//! the score CSV, resolves every entry, aggregates the two pools, and
//! renders the leaderboard in the requested format.

use std::fs;

use anyhow::{Context, Result};
use mairate_core::{CatalogPair, Leaderboard, Pool, Record, aggregate, export, resolve_all, score};
use tracing::{info, warn};

use crate::cli::OutputFormat;

/// How the resolved records split across pools, counted before the
/// leaderboard truncates each pool to its capacity.
struct PoolCounts {
    current: usize,
    legacy: usize,
    unresolved: usize,
}

impl PoolCounts {
    fn tally(records: &[Record<'_>]) -> Self {
        let mut counts = PoolCounts {
            current: 0,
            legacy: 0,
            unresolved: 0,
        };
        for record in records {
            match record.pool {
                Pool::Current => counts.current += 1,
                Pool::Legacy => counts.legacy += 1,
                Pool::Unresolved => counts.unresolved += 1,
            }
        }
        counts
    }
}

pub fn run(
    scores: &str,
    current_catalog: &str,
    legacy_catalog: &str,
    current_top: usize,
    legacy_top: usize,
    format: OutputFormat,
    output: Option<&str>,
) -> Result<()> {
    let catalogs = CatalogPair::load(current_catalog, legacy_catalog);

    let entries = score::load(scores)
        .with_context(|| format!("failed to import scores from {}", scores))?;
    info!("Imported {} score rows from {}", entries.len(), scores);

    let records = resolve_all(entries, &catalogs);
    let counts = PoolCounts::tally(&records);
    if counts.unresolved > 0 {
        warn!(
            "{} of {} records matched no catalog and will not be ranked",
            counts.unresolved,
            records.len()
        );
    }
    info!(
        "Resolved {} current / {} legacy records, {} unresolved",
        counts.current, counts.legacy, counts.unresolved
    );

    let board = aggregate(&records, current_top, legacy_top);
    info!("Total rating {}", board.total);

    let rendered = render(&board, format, output.is_some())?;

    match output {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("failed to write {}", path))?;
            println!("Leaderboard written to {}", path);
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn render(board: &Leaderboard<'_>, format: OutputFormat, to_file: bool) -> Result<String> {
    Ok(match format {
        // ANSI colors only make sense on a terminal, not in a file
        OutputFormat::Text if to_file => export::format_leaderboard_plain(board),
        OutputFormat::Text => export::format_leaderboard_console(board),
        OutputFormat::Tsv => export::format_tsv(board),
        OutputFormat::Json => export::format_json(board)?,
    })
}
