//! Chart master catalogs.
//!
//! Two independent catalogs exist per session: one for current-version
//! charts and one for legacy charts. Both are plain exact-match tables
//! keyed by (title, difficulty tier, variant), built once from master CSV
//! files and read-only afterwards.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs;
use std::path::Path;

use tracing::{error, info, warn};

use crate::chart::{ChartKey, ChartMetadata, Variant};
use crate::csv::{self, Table, field};
use crate::error::{Error, Result};

/// Header aliases for the master and score CSV files. The upstream files
/// use Japanese headers; English names are accepted for hand-written data.
pub(crate) mod columns {
    pub const TITLE: &[&str] = &["曲名", "title"];
    pub const DIFFICULTY: &[&str] = &["難易度", "difficulty"];
    pub const VARIANT: &[&str] = &["STDORDX", "variant"];
    pub const CONSTANT: &[&str] = &["譜面定数", "constant"];
    pub const LEVEL: &[&str] = &["レベル", "level"];
    pub const ARTWORK: &[&str] = &["画像ファイル名", "artwork"];
    pub const SCORE: &[&str] = &["スコア", "score"];
}

/// An immutable chart lookup table.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<ChartKey, ChartMetadata>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a master CSV file.
    ///
    /// A missing or unreadable file yields an empty catalog (every lookup
    /// will miss); a readable file without the variant column is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(
                    "Master data {} unreadable ({}), continuing with an empty catalog",
                    path.display(),
                    e
                );
                return Ok(Self::new());
            }
        };
        Self::parse(&csv::decode(&bytes), &path.display().to_string())
    }

    /// Parse master CSV content. `source_name` labels diagnostics.
    pub fn parse(content: &str, source_name: &str) -> Result<Self> {
        let table = Table::parse(content);
        if table.is_empty() {
            return Ok(Self::new());
        }

        let variant_col = require_column(&table, columns::VARIANT, "STDORDX", source_name)?;
        let title_col = require_column(&table, columns::TITLE, "曲名", source_name)?;
        let difficulty_col = require_column(&table, columns::DIFFICULTY, "難易度", source_name)?;
        let constant_col = require_column(&table, columns::CONSTANT, "譜面定数", source_name)?;
        let level_col = table.column(columns::LEVEL);
        let artwork_col = table.column(columns::ARTWORK);

        let mut entries = HashMap::new();
        for row in table.rows() {
            let title = field(row, title_col);
            if title.is_empty() {
                continue;
            }

            let variant_text = field(row, variant_col).trim();
            let Ok(variant) = variant_text.parse::<Variant>() else {
                warn!(
                    "{}: '{}' has variant '{}' (expected STD or DX), skipping row",
                    source_name, title, variant_text
                );
                continue;
            };

            let constant_text = field(row, constant_col).trim();
            let Ok(constant) = constant_text.parse::<f64>() else {
                warn!(
                    "{}: '{}' has unparseable chart constant '{}', skipping row",
                    source_name, title, constant_text
                );
                continue;
            };

            let key = ChartKey {
                title: title.to_string(),
                difficulty: field(row, difficulty_col).trim().to_string(),
                variant,
            };
            let meta = ChartMetadata {
                constant,
                level: level_col.map(|i| field(row, i).to_string()).unwrap_or_default(),
                variant,
                artwork: artwork_col
                    .map(|i| field(row, i).to_string())
                    .filter(|name| !name.is_empty()),
            };

            match entries.entry(key) {
                Entry::Occupied(mut slot) => {
                    warn!(
                        "{}: duplicate chart '{}' [{} {}], keeping the later row",
                        source_name,
                        slot.key().title,
                        slot.key().difficulty,
                        slot.key().variant
                    );
                    slot.insert(meta);
                }
                Entry::Vacant(slot) => {
                    slot.insert(meta);
                }
            }
        }

        Ok(Self { entries })
    }

    pub fn get(&self, key: &ChartKey) -> Option<&ChartMetadata> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ChartKey, &ChartMetadata)> {
        self.entries.iter()
    }
}

fn require_column(
    table: &Table,
    names: &[&str],
    label: &str,
    source_name: &str,
) -> Result<usize> {
    table.column(names).ok_or_else(|| Error::MissingColumn {
        source_name: source_name.to_string(),
        column: label.to_string(),
    })
}

/// The current and legacy catalogs for one session.
#[derive(Debug, Clone, Default)]
pub struct CatalogPair {
    pub current: Catalog,
    pub legacy: Catalog,
}

impl CatalogPair {
    /// Load both catalogs. Each builds independently: a failed or missing
    /// source degrades that catalog to empty instead of aborting the run.
    pub fn load(current_path: impl AsRef<Path>, legacy_path: impl AsRef<Path>) -> Self {
        let current = Self::load_one(current_path.as_ref(), "current");
        let legacy = Self::load_one(legacy_path.as_ref(), "legacy");

        if current.is_empty() && legacy.is_empty() {
            error!("No master data loaded from either catalog; no score can resolve");
        }

        Self { current, legacy }
    }

    fn load_one(path: &Path, label: &str) -> Catalog {
        match Catalog::load(path) {
            Ok(catalog) => {
                info!("Loaded {} {} charts from {}", catalog.len(), label, path.display());
                catalog
            }
            Err(e) => {
                warn!(
                    "Failed to build {} catalog from {}: {}",
                    label,
                    path.display(),
                    e
                );
                Catalog::new()
            }
        }
    }
}
