pub mod catalog;
pub mod chart;
pub mod config;
pub mod csv;
pub mod error;
pub mod export;
pub mod leaderboard;
pub mod rating;
pub mod record;
pub mod score;

pub use catalog::{Catalog, CatalogPair};
pub use chart::{ChartKey, ChartMetadata, Variant};
pub use error::{Error, Result};
pub use leaderboard::{Leaderboard, RankedRecord, aggregate};
pub use rating::{compute_rating, rank_coefficient};
pub use record::{Pool, Record, resolve, resolve_all};
pub use score::RawEntry;
