//! Leaderboard aggregation: rate resolved records, rank the two pools,
//! and total the kept ratings.

use serde::Serialize;

use crate::rating::compute_rating;
use crate::record::{Pool, Record};

/// One ranked row: a resolved record plus its computed rating.
#[derive(Debug, Clone, Serialize)]
pub struct RankedRecord<'a> {
    pub rating: u32,
    pub record: &'a Record<'a>,
}

/// Aggregation output: top-N per pool, subtotals, and the grand total.
/// Fully recomputed on every call; nothing is retained between calls.
#[derive(Debug, Clone, Serialize)]
pub struct Leaderboard<'a> {
    pub current: Vec<RankedRecord<'a>>,
    pub legacy: Vec<RankedRecord<'a>>,
    pub current_capacity: usize,
    pub legacy_capacity: usize,
    pub current_subtotal: u32,
    pub legacy_subtotal: u32,
    pub total: u32,
}

/// Rank records into the two pools.
///
/// Unresolved records are excluded by pool tag, never by rating value.
/// Sorting is stable: equally-rated records keep their input order, which
/// decides who survives truncation.
pub fn aggregate<'a>(
    records: &'a [Record<'a>],
    current_capacity: usize,
    legacy_capacity: usize,
) -> Leaderboard<'a> {
    let mut current = Vec::new();
    let mut legacy = Vec::new();

    for record in records {
        let bucket = match record.pool {
            Pool::Current => &mut current,
            Pool::Legacy => &mut legacy,
            Pool::Unresolved => continue,
        };
        bucket.push(RankedRecord {
            rating: compute_rating(record.meta.constant, record.entry.score),
            record,
        });
    }

    rank(&mut current, current_capacity);
    rank(&mut legacy, legacy_capacity);

    let current_subtotal: u32 = current.iter().map(|r| r.rating).sum();
    let legacy_subtotal: u32 = legacy.iter().map(|r| r.rating).sum();

    Leaderboard {
        current,
        legacy,
        current_capacity,
        legacy_capacity,
        current_subtotal,
        legacy_subtotal,
        total: current_subtotal + legacy_subtotal,
    }
}

fn rank(pool: &mut Vec<RankedRecord<'_>>, capacity: usize) {
    pool.sort_by(|a, b| b.rating.cmp(&a.rating));
    pool.truncate(capacity);
}
