//! Console leaderboard rendering with colored output.

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::leaderboard::{Leaderboard, RankedRecord};

const TITLE_WIDTH: usize = 40;

/// Format a leaderboard for terminal display, with ANSI colors.
///
/// Layout: grand total, then each pool as a heading line (capacity and
/// subtotal) followed by one line per kept record.
pub fn format_leaderboard_console(board: &Leaderboard<'_>) -> String {
    render(board, true)
}

/// Format a leaderboard as plain text, for writing to a file.
pub fn format_leaderboard_plain(board: &Leaderboard<'_>) -> String {
    render(board, false)
}

fn render(board: &Leaderboard<'_>, colored: bool) -> String {
    let mut output = String::new();

    let border: String = "━".repeat(78);
    let border = paint(&border, colored, |s| s.dimmed().to_string());
    let total = paint(&board.total.to_string(), colored, |s| {
        s.red().bold().to_string()
    });

    let _ = writeln!(output, "{}", border);
    let _ = writeln!(output, "  TOTAL RATING: {}", total);
    let _ = writeln!(output, "{}", border);
    write_pool(
        &mut output,
        "CURRENT",
        &board.current,
        board.current_capacity,
        board.current_subtotal,
        colored,
    );
    let _ = writeln!(output, "{}", border);
    write_pool(
        &mut output,
        "LEGACY",
        &board.legacy,
        board.legacy_capacity,
        board.legacy_subtotal,
        colored,
    );
    let _ = write!(output, "{}", border);

    output
}

fn write_pool(
    output: &mut String,
    label: &str,
    pool: &[RankedRecord<'_>],
    capacity: usize,
    subtotal: u32,
    colored: bool,
) {
    let _ = writeln!(
        output,
        "  {} (top {})  subtotal: {}",
        paint(label, colored, |s| s.bold().to_string()),
        capacity,
        paint(&subtotal.to_string(), colored, |s| s.yellow().to_string()),
    );

    for (i, ranked) in pool.iter().enumerate() {
        let record = ranked.record;
        let _ = writeln!(
            output,
            "  {:>4} {:>5}  {:<width$}  {} [{}]  {:.1} ({})  {:.4}%",
            paint(&format!("#{}", i + 1), colored, |s| s.dimmed().to_string()),
            paint(&ranked.rating.to_string(), colored, |s| {
                s.yellow().bold().to_string()
            }),
            truncate_title(&record.entry.title),
            record.entry.difficulty,
            record.meta.level,
            record.meta.constant,
            record.entry.variant,
            f64::from(record.entry.score) / 10000.0,
            width = TITLE_WIDTH,
        );
    }
}

fn paint(text: &str, colored: bool, style: impl Fn(&str) -> String) -> String {
    if colored {
        style(text)
    } else {
        text.to_string()
    }
}

/// Shorten over-long titles with an ellipsis, counting characters rather
/// than bytes (titles are frequently Japanese).
fn truncate_title(title: &str) -> String {
    if title.chars().count() <= TITLE_WIDTH {
        return title.to_string();
    }
    let mut shortened: String = title.chars().take(TITLE_WIDTH - 1).collect();
    shortened.push('…');
    shortened
}
