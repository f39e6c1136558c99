//! Property tests for carmatch-ranking: both stores return the same ordered
//! rows, every row satisfies the predicate, and the limit is honored.

use proptest::prelude::*;

use carmatch_core::dimension::Dimension;
use carmatch_core::flags::{Flag, FlagKind, FlagSet, FlagValue, Stance};
use carmatch_core::models::{CatalogItem, InferredFilters};
use carmatch_core::traits::ICatalogStore;
use carmatch_core::WeightVector;
use carmatch_ranking::{build_ranking_query, InMemoryCatalog, SqliteCatalog};

fn weights() -> impl Strategy<Value = WeightVector> {
    prop::collection::vec(0.0f64..1.0, Dimension::ALL.len()).prop_map(|values| {
        Dimension::ALL
            .iter()
            .zip(values)
            .filter(|(_, v)| *v > 0.5)
            .map(|(d, v)| (*d, v))
            .collect()
    })
}

fn stance() -> impl Strategy<Value = Stance> {
    prop_oneof![
        Just(Stance::Neutral),
        Just(Stance::Favor),
        Just(Stance::StrongFavor),
        Just(Stance::FavorOccasional),
        Just(Stance::FavorExtreme),
        Just(Stance::Penalize),
        Just(Stance::StrongPenalize),
    ]
}

fn flags() -> impl Strategy<Value = FlagSet> {
    prop::collection::vec((any::<bool>(), stance()), Flag::ALL.len()).prop_map(|values| {
        let mut set = FlagSet::defaults();
        for (flag, (on, stance)) in Flag::ALL.iter().zip(values) {
            let value = match flag.kind() {
                FlagKind::Bool => FlagValue::Bool(on),
                FlagKind::Stance => FlagValue::Stance(stance),
            };
            set.set(*flag, value);
        }
        set
    })
}

fn filters() -> impl Strategy<Value = InferredFilters> {
    (
        prop::option::of(1u32..8),
        prop::option::of(0.0f64..9.0),
        prop::option::of(10_000.0f64..70_000.0),
    )
        .prop_map(|(seats, aesthetics, price)| InferredFilters {
            min_seats: seats,
            min_aesthetics: aesthetics,
            max_cash_price: price,
            ..Default::default()
        })
}

fn catalog() -> Vec<CatalogItem> {
    test_fixtures::sample_catalog()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn stores_return_identical_rankings(
        w in weights(),
        f in filters(),
        flags in flags(),
        limit in 1usize..15,
    ) {
        let query = build_ranking_query(&w, &f, &flags, limit);

        let memory = InMemoryCatalog::new(catalog()).rank(&query).unwrap();
        let sqlite = SqliteCatalog::open_in_memory().unwrap();
        sqlite.insert_items(&catalog()).unwrap();
        let sqlite = sqlite.rank(&query).unwrap();

        let memory_ids: Vec<&str> = memory.iter().map(|r| r.item.id.as_str()).collect();
        let sqlite_ids: Vec<&str> = sqlite.iter().map(|r| r.item.id.as_str()).collect();
        prop_assert_eq!(memory_ids, sqlite_ids);
        for (a, b) in memory.iter().zip(&sqlite) {
            prop_assert!((a.score - b.score).abs() < 1e-9);
        }
    }

    #[test]
    fn rows_satisfy_predicate_and_limit(
        w in weights(),
        f in filters(),
        flags in flags(),
        limit in 1usize..15,
    ) {
        let query = build_ranking_query(&w, &f, &flags, limit);
        let ranked = InMemoryCatalog::new(catalog()).rank(&query).unwrap();

        prop_assert!(ranked.len() <= limit);
        let eligible = catalog().iter().filter(|i| query.predicate.matches(i)).count();
        prop_assert_eq!(ranked.len(), eligible.min(limit));
        for row in &ranked {
            prop_assert!(query.predicate.matches(&row.item));
            prop_assert!((row.score - row.breakdown.total).abs() < 1e-12);
        }
    }
}
