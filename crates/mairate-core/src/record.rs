//! Score resolution against the chart catalogs.

use std::borrow::Cow;

use serde::Serialize;
use strum::IntoStaticStr;
use tracing::warn;

use crate::catalog::CatalogPair;
use crate::chart::{ChartKey, ChartMetadata};
use crate::score::RawEntry;

/// Which catalog a record resolved against. Decided exactly once, at
/// resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
pub enum Pool {
    #[strum(serialize = "current")]
    Current,
    #[strum(serialize = "legacy")]
    Legacy,
    #[strum(serialize = "unresolved")]
    Unresolved,
}

impl std::fmt::Display for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &'static str = self.into();
        write!(f, "{}", name)
    }
}

/// A raw entry enriched with its resolved chart metadata and pool.
///
/// Resolved records borrow their metadata from the catalog; only the
/// unresolved placeholder is owned.
#[derive(Debug, Clone, Serialize)]
pub struct Record<'a> {
    pub entry: RawEntry,
    pub meta: Cow<'a, ChartMetadata>,
    pub pool: Pool,
}

/// Resolve one raw entry. The current catalog is consulted first; first
/// hit wins. A key in neither catalog yields an unresolved record with
/// zero-constant metadata so its rating is 0 downstream instead of an
/// error.
pub fn resolve(entry: RawEntry, catalogs: &CatalogPair) -> Record<'_> {
    let key = ChartKey {
        title: entry.title.clone(),
        difficulty: entry.difficulty.clone(),
        variant: entry.variant,
    };

    if let Some(meta) = catalogs.current.get(&key) {
        return Record {
            entry,
            meta: Cow::Borrowed(meta),
            pool: Pool::Current,
        };
    }
    if let Some(meta) = catalogs.legacy.get(&key) {
        return Record {
            entry,
            meta: Cow::Borrowed(meta),
            pool: Pool::Legacy,
        };
    }

    warn!(
        "'{}' [{} {}] not found in either catalog; it will not be ranked",
        entry.title, entry.difficulty, entry.variant
    );
    Record {
        meta: Cow::Owned(ChartMetadata::unresolved(entry.variant)),
        pool: Pool::Unresolved,
        entry,
    }
}

/// Resolve a whole batch, preserving input order. Unresolved records are
/// kept in the output so the operator can see what missed.
pub fn resolve_all(entries: Vec<RawEntry>, catalogs: &CatalogPair) -> Vec<Record<'_>> {
    entries
        .into_iter()
        .map(|entry| resolve(entry, catalogs))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::chart::Variant;

    fn catalogs() -> CatalogPair {
        let current = Catalog::parse(
            "曲名,難易度,STDORDX,譜面定数,レベル\nNew Song,MAS,DX,14.0,14\n",
            "current",
        )
        .unwrap();
        let legacy = Catalog::parse(
            "曲名,難易度,STDORDX,譜面定数,レベル\nOld Song,EXP,STD,12.5,12+\nNew Song,MAS,DX,9.9,9+\n",
            "legacy",
        )
        .unwrap();
        CatalogPair { current, legacy }
    }

    fn entry(title: &str, difficulty: &str, variant: Variant) -> RawEntry {
        RawEntry {
            title: title.to_string(),
            difficulty: difficulty.to_string(),
            variant,
            score: 1000000,
        }
    }

    #[test]
    fn test_current_catalog_wins_over_legacy() {
        // "New Song" exists in both; the current entry must win
        let catalogs = catalogs();
        let record = resolve(entry("New Song", "MAS", Variant::Dx), &catalogs);
        assert_eq!(record.pool, Pool::Current);
        assert_eq!(record.meta.constant, 14.0);
    }

    #[test]
    fn test_legacy_only_key_resolves_legacy() {
        let catalogs = catalogs();
        let record = resolve(entry("Old Song", "EXP", Variant::Std), &catalogs);
        assert_eq!(record.pool, Pool::Legacy);
        assert_eq!(record.meta.constant, 12.5);
        assert_eq!(record.meta.level, "12+");
    }

    #[test]
    fn test_miss_yields_unresolved_sentinel() {
        let catalogs = catalogs();
        let record = resolve(entry("Ghost Song", "MAS", Variant::Dx), &catalogs);
        assert_eq!(record.pool, Pool::Unresolved);
        assert_eq!(record.meta.constant, 0.0);
        assert_eq!(record.meta.level, "N/A");
    }

    #[test]
    fn test_variant_distinguishes_charts() {
        // Same title/difficulty but STD variant is not in any catalog
        let catalogs = catalogs();
        let record = resolve(entry("New Song", "MAS", Variant::Std), &catalogs);
        assert_eq!(record.pool, Pool::Unresolved);
    }

    #[test]
    fn test_resolve_all_keeps_misses_and_order() {
        let catalogs = catalogs();
        let records = resolve_all(
            vec![
                entry("Ghost Song", "MAS", Variant::Dx),
                entry("Old Song", "EXP", Variant::Std),
            ],
            &catalogs,
        );
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].pool, Pool::Unresolved);
        assert_eq!(records[1].pool, Pool::Legacy);
    }
}
