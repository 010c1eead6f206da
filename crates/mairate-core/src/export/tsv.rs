//! TSV export of a computed leaderboard, for spreadsheets.

use crate::leaderboard::{Leaderboard, RankedRecord};

pub fn format_tsv_header() -> String {
    [
        "Pool",
        "Rank",
        "Rating",
        "Title",
        "Difficulty",
        "Level",
        "Constant",
        "Variant",
        "Achievement",
    ]
    .join("\t")
}

/// Render both pools as TSV rows under a single header.
pub fn format_tsv(board: &Leaderboard<'_>) -> String {
    let mut lines = vec![format_tsv_header()];

    append_pool(&mut lines, "current", &board.current);
    append_pool(&mut lines, "legacy", &board.legacy);

    lines.join("\n")
}

fn append_pool(lines: &mut Vec<String>, pool: &str, records: &[RankedRecord<'_>]) {
    for (i, ranked) in records.iter().enumerate() {
        let record = ranked.record;
        lines.push(
            [
                pool.to_string(),
                (i + 1).to_string(),
                ranked.rating.to_string(),
                record.entry.title.clone(),
                record.entry.difficulty.clone(),
                record.meta.level.clone(),
                format!("{:.1}", record.meta.constant),
                record.entry.variant.to_string(),
                format!("{:.4}", f64::from(record.entry.score) / 10000.0),
            ]
            .join("\t"),
        );
    }
}
