use carmatch_core::errors::CarmatchResult;
use carmatch_core::models::ranking_query::{rank_order, RankedItem, RankingQuery};
use carmatch_core::models::CatalogItem;
use carmatch_core::traits::ICatalogStore;
use tracing::debug;

/// Catalog held in a `Vec`. Scores every row on each call.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    items: Vec<CatalogItem>,
}

impl InMemoryCatalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ICatalogStore for InMemoryCatalog {
    fn rank(&self, query: &RankingQuery) -> CarmatchResult<Vec<RankedItem>> {
        let mut ranked: Vec<RankedItem> = self
            .items
            .iter()
            .filter(|item| query.predicate.matches(item))
            .map(|item| {
                let breakdown = query.expression.evaluate(item);
                RankedItem {
                    item: item.clone(),
                    score: breakdown.total,
                    breakdown,
                }
            })
            .collect();
        let matched = ranked.len();
        ranked.sort_by(rank_order);
        ranked.truncate(query.limit);
        debug!(
            catalog = self.items.len(),
            matched,
            returned = ranked.len(),
            "in-memory catalog ranked"
        );
        Ok(ranked)
    }

    fn name(&self) -> &str {
        "in-memory"
    }
}
