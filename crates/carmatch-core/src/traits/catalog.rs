use crate::errors::CarmatchResult;
use crate::models::{RankedItem, RankingQuery};

/// Executes a ranking query against the vehicle catalog.
///
/// Implementations return at most `query.limit` rows that satisfy the
/// predicate, sorted by score descending with item id ascending on ties.
pub trait ICatalogStore: Send + Sync {
    fn rank(&self, query: &RankingQuery) -> CarmatchResult<Vec<RankedItem>>;

    /// Human-readable store name for logs.
    fn name(&self) -> &str;
}
