//! Layout defaults for the rendered leaderboard.
//!
//! The reference output is a fixed grid: 5 columns, 3 rows of
//! current-version songs and 7 rows of legacy songs. The aggregator only
//! sees the resulting capacities and stays agnostic to grid shape.

pub mod display {
    /// Columns in the rendered grid.
    pub const TABLE_COLS: usize = 5;

    /// Grid rows reserved for current-version songs.
    pub const CURRENT_ROWS: usize = 3;

    /// Grid rows reserved for legacy songs.
    pub const LEGACY_ROWS: usize = 7;

    /// Top-N capacity of the current pool.
    pub const CURRENT_CAPACITY: usize = TABLE_COLS * CURRENT_ROWS;

    /// Top-N capacity of the legacy pool.
    pub const LEGACY_CAPACITY: usize = TABLE_COLS * LEGACY_ROWS;
}
