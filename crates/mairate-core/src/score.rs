//! Score import: raw play results from a CSV export.
//!
//! Each row carries the chart key fields plus the achievement score as an
//! integer with 4 implied decimal digits (985000 == 98.5000%). Malformed
//! rows are skipped individually; the rest of the batch proceeds.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::columns;
use crate::chart::Variant;
use crate::csv::{self, Table, field};
use crate::error::{Error, Result};

/// A single unvalidated performance observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    pub title: String,
    pub difficulty: String,
    pub variant: Variant,
    /// Achievement with 4 implied decimal digits (985000 == 98.5000%).
    pub score: u32,
}

/// Load score rows from a CSV file. Unlike master data, a missing score
/// file is a hard error; there is nothing to compute without it.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<RawEntry>> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    parse(&csv::decode(&bytes), &path.display().to_string())
}

/// Parse score CSV content. `source_name` labels diagnostics.
pub fn parse(content: &str, source_name: &str) -> Result<Vec<RawEntry>> {
    let table = Table::parse(content);
    if table.is_empty() {
        return Ok(Vec::new());
    }

    let title_col = require_column(&table, columns::TITLE, "曲名", source_name)?;
    let difficulty_col = require_column(&table, columns::DIFFICULTY, "難易度", source_name)?;
    let variant_col = require_column(&table, columns::VARIANT, "STDORDX", source_name)?;
    let score_col = require_column(&table, columns::SCORE, "スコア", source_name)?;

    let mut entries = Vec::new();
    for row in table.rows() {
        let title = field(row, title_col);
        if title.is_empty() {
            continue;
        }

        // Upstream exports are inconsistent about case here
        let variant_text = field(row, variant_col).trim().to_uppercase();
        let Ok(variant) = variant_text.parse::<Variant>() else {
            warn!(
                "{}: '{}' has variant '{}' (expected STD or DX), skipping row",
                source_name, title, variant_text
            );
            continue;
        };

        let score_text = field(row, score_col).trim();
        let Ok(score) = score_text.parse::<u32>() else {
            warn!(
                "{}: '{}' has unparseable score '{}', skipping row",
                source_name, title, score_text
            );
            continue;
        };

        entries.push(RawEntry {
            title: title.to_string(),
            difficulty: field(row, difficulty_col).trim().to_string(),
            variant,
            score,
        });
    }

    Ok(entries)
}

fn require_column(
    table: &Table,
    names: &[&str],
    label: &str,
    source_name: &str,
) -> Result<usize> {
    table.column(names).ok_or_else(|| {
        Error::ScoreImport(format!("{}: missing required column '{}'", source_name, label))
    })
}
