//! End-to-end ranking over the sample catalog, against both stores.

use std::collections::BTreeSet;
use std::sync::Arc;

use carmatch_core::config::CarmatchConfig;
use carmatch_core::flags::{Flag, FlagSet, FlagValue, Stance};
use carmatch_core::models::ranking_query::ItemCondition;
use carmatch_core::models::{
    AcquisitionMode, CatalogItem, ClimateInfo, EconomicsInfo, MechanicalType, PassengerInfo,
};
use carmatch_core::profile::{TriState, UserProfile};
use carmatch_core::traits::ICatalogStore;
use carmatch_core::WeightVector;
use carmatch_ranking::{
    build_ranking_query, InMemoryCatalog, RankingEngine, RankingInputs, SqliteCatalog,
};
use carmatch_weights::BaseWeightCache;

fn catalog() -> Vec<CatalogItem> {
    test_fixtures::sample_catalog()
}

fn sqlite_store() -> SqliteCatalog {
    let store = SqliteCatalog::open_in_memory().unwrap();
    store.insert_items(&catalog()).unwrap();
    store
}

fn stores() -> Vec<Arc<dyn ICatalogStore>> {
    vec![
        Arc::new(InMemoryCatalog::new(catalog())),
        Arc::new(sqlite_store()),
    ]
}

fn engine(store: Arc<dyn ICatalogStore>) -> RankingEngine {
    let config = CarmatchConfig::default();
    let cache = BaseWeightCache::from_config(&config.weights);
    RankingEngine::new(&config, &cache, store).unwrap()
}

fn ids(items: &[carmatch_core::models::ranking_query::RankedItem]) -> Vec<&str> {
    items.iter().map(|r| r.item.id.as_str()).collect()
}

#[test]
fn sqlite_insert_is_idempotent() {
    let store = sqlite_store();
    assert_eq!(store.count().unwrap(), 12);
    store.insert_items(&catalog()).unwrap();
    assert_eq!(store.count().unwrap(), 12);
}

#[test]
fn family_profile_respects_hard_filters() {
    let profile: UserProfile = test_fixtures::profile("complete");
    let passengers: PassengerInfo = test_fixtures::passengers("family");
    let climate: ClimateInfo = test_fixtures::climate("coastal");

    for store in stores() {
        let name = store.name().to_string();
        let outcome = engine(store)
            .rank(&RankingInputs {
                profile: Some(&profile),
                passengers: Some(&passengers),
                climate: &climate,
                economics: None,
                filters: None,
                limit: 0,
            })
            .unwrap();

        let returned: BTreeSet<&str> = ids(&outcome.items).into_iter().collect();
        let expected: BTreeSet<&str> = [
            "corolla-hev",
            "leon-tdi",
            "touran-tsi",
            "tucson-phev",
            "wrangler-rubicon",
        ]
        .into_iter()
        .collect();
        assert_eq!(returned, expected, "store {name}");
        assert_eq!(outcome.filters.min_seats, Some(5));
        for ranked in &outcome.items {
            assert!(ranked.item.seats >= 5);
            assert!(!ranked.item.mechanical_type.is_electric());
        }
    }
}

#[test]
fn stores_agree_on_order_and_scores() {
    let profile: UserProfile = test_fixtures::profile("sporty_enthusiast");
    let passengers: PassengerInfo = test_fixtures::passengers("alone");
    let climate: ClimateInfo = test_fixtures::climate("mountain_zbe");
    let inputs = RankingInputs {
        profile: Some(&profile),
        passengers: Some(&passengers),
        climate: &climate,
        economics: None,
        filters: None,
        limit: 12,
    };

    let memory = engine(Arc::new(InMemoryCatalog::new(catalog())))
        .rank(&inputs)
        .unwrap();
    let sqlite = engine(Arc::new(sqlite_store())).rank(&inputs).unwrap();

    assert_eq!(ids(&memory.items), ids(&sqlite.items));
    for (a, b) in memory.items.iter().zip(&sqlite.items) {
        assert!((a.score - b.score).abs() < 1e-9, "{} scored differently", a.item.id);
        assert_eq!(a.breakdown.applied, b.breakdown.applied);
    }
}

#[test]
fn results_are_sorted_by_score_then_id() {
    let profile: UserProfile = test_fixtures::profile("complete");
    let outcome = engine(Arc::new(sqlite_store()))
        .rank(&RankingInputs {
            profile: Some(&profile),
            passengers: None,
            climate: &ClimateInfo::default(),
            economics: None,
            filters: None,
            limit: 20,
        })
        .unwrap();
    for pair in outcome.items.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.score > b.score || (a.score == b.score && a.item.id < b.item.id));
    }
}

#[test]
fn electric_only_commuter_sees_only_electric_items() {
    let profile: UserProfile = test_fixtures::profile("urban_commuter");
    let passengers: PassengerInfo = test_fixtures::passengers("alone");

    for store in stores() {
        let outcome = engine(store)
            .rank(&RankingInputs {
                profile: Some(&profile),
                passengers: Some(&passengers),
                climate: &ClimateInfo::default(),
                economics: None,
                filters: None,
                limit: 0,
            })
            .unwrap();

        let returned: BTreeSet<&str> = ids(&outcome.items).into_iter().collect();
        assert_eq!(returned, ["i3-rex", "model3-lr"].into_iter().collect());
        assert_eq!(outcome.filters.mechanical_types, MechanicalType::ELECTRIC.to_vec());

        // No garage, so the battery-electric item carries the charging penalty.
        let model3 = outcome
            .items
            .iter()
            .find(|r| r.item.id == "model3-lr")
            .unwrap();
        assert!(model3
            .breakdown
            .applied
            .contains(&Flag::PenalizeBevWithoutHomeCharging));
    }
}

#[test]
fn missing_profile_ranks_by_id_within_the_budget() {
    let economics = EconomicsInfo {
        budget_defined: TriState::No,
        annual_income: Some(60_000.0),
        savings: Some(20_000.0),
        ..Default::default()
    };

    for store in stores() {
        let outcome = engine(store)
            .rank(&RankingInputs {
                profile: None,
                passengers: None,
                climate: &ClimateInfo::default(),
                economics: Some(&economics),
                filters: None,
                limit: 0,
            })
            .unwrap();

        assert!(outcome.raw_weights.is_empty());
        assert!(outcome.flags.active().is_empty());
        assert_eq!(
            outcome.filters.recommended_acquisition,
            Some(AcquisitionMode::Financed)
        );
        assert_eq!(outcome.filters.max_monthly_installment, Some(500.0));
        // Every score is zero, so the id breaks every tie.
        assert_eq!(
            ids(&outcome.items),
            vec![
                "berlingo-van",
                "corolla-hev",
                "dacia-glp",
                "gt86",
                "i3-rex",
                "ibz-tsi",
                "leon-tdi",
                "touran-tsi",
            ]
        );
    }
}

#[test]
fn limit_truncates_results() {
    for store in stores() {
        let outcome = engine(store)
            .rank(&RankingInputs {
                profile: None,
                passengers: None,
                climate: &ClimateInfo::default(),
                economics: None,
                filters: None,
                limit: 3,
            })
            .unwrap();
        assert_eq!(ids(&outcome.items), vec!["berlingo-van", "corolla-hev", "dacia-glp"]);
    }
}

#[test]
fn extreme_adventure_in_snow_rewards_all_wheel_drive() {
    let mut flags = FlagSet::defaults();
    flags.set(Flag::AllWheelDrive, FlagValue::Stance(Stance::FavorExtreme));
    flags.set(Flag::LowRangeGearing, FlagValue::Stance(Stance::FavorExtreme));
    let query = build_ranking_query(&WeightVector::new(), &Default::default(), &flags, 12);

    let adjustments = &query.expression.adjustments;
    assert_eq!(adjustments.len(), 2);
    assert!(adjustments
        .iter()
        .any(|a| a.condition == ItemCondition::AllWheelDrive && a.magnitude > 0.0));

    for store in stores() {
        let items = store.rank(&query).unwrap();
        assert_eq!(items[0].item.id, "hilux-dc");
        assert_eq!(items[1].item.id, "wrangler-rubicon");
        assert_eq!(
            items[0].breakdown.applied,
            vec![Flag::AllWheelDrive, Flag::LowRangeGearing]
        );
        let awd_only = items.iter().find(|r| r.item.id == "model3-lr").unwrap();
        assert_eq!(awd_only.breakdown.applied, vec![Flag::AllWheelDrive]);
    }
}

#[test]
fn manual_penalty_only_hits_manual_gearboxes() {
    let mut flags = FlagSet::defaults();
    flags.set(Flag::PenalizeManual, FlagValue::Bool(true));
    let query = build_ranking_query(&WeightVector::new(), &Default::default(), &flags, 12);
    let items = InMemoryCatalog::new(catalog()).rank(&query).unwrap();

    for ranked in &items {
        if ranked.item.automatic {
            assert_eq!(ranked.score, 0.0);
        } else {
            assert!(ranked.score < 0.0);
            assert_eq!(ranked.breakdown.applied, vec![Flag::PenalizeManual]);
        }
    }
    // Automatics float to the top.
    assert!(items[0].item.automatic);
}
