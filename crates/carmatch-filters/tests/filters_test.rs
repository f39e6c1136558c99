use carmatch_core::config::{EconomicsConfig, FiltersConfig};
use carmatch_core::models::{
    AcquisitionMode, BodyType, ClimateInfo, EconomicsInfo, InferredFilters, MechanicalType,
    PassengerInfo,
};
use carmatch_core::profile::{TriState, UserProfile};
use carmatch_filters::{
    apply_economics, apply_passenger_seats, compile_filters, recommend_acquisition,
    restrict_to_electric, FilterCompiler,
};

fn compile(profile: &UserProfile) -> InferredFilters {
    compile_filters(None, Some(profile), &ClimateInfo::default())
}

#[test]
fn not_electric_only_backfills_twelve_non_electric_types() {
    let profile = UserProfile {
        electric_only: TriState::No,
        ..Default::default()
    };
    let filters = compile(&profile);
    assert_eq!(filters.mechanical_types.len(), 12);
    assert!(!filters.mechanical_types.contains(&MechanicalType::BatteryElectric));
    assert!(!filters.mechanical_types.contains(&MechanicalType::RangeExtended));
}

#[test]
fn electric_only_leaves_mechanical_list_to_explicit_rule() {
    let profile = UserProfile {
        electric_only: TriState::Yes,
        ..Default::default()
    };
    let mut filters = compile(&profile);
    assert!(filters.mechanical_types.is_empty());

    restrict_to_electric(&mut filters, Some(&profile));
    assert_eq!(
        filters.mechanical_types,
        vec![MechanicalType::BatteryElectric, MechanicalType::RangeExtended]
    );
}

#[test]
fn restrict_to_electric_never_clobbers() {
    let profile = UserProfile {
        electric_only: TriState::Yes,
        ..Default::default()
    };
    let mut filters = InferredFilters {
        mechanical_types: vec![MechanicalType::PluginHybridGasoline],
        ..Default::default()
    };
    restrict_to_electric(&mut filters, Some(&profile));
    assert_eq!(filters.mechanical_types, vec![MechanicalType::PluginHybridGasoline]);
}

#[test]
fn preset_values_are_never_overwritten() {
    let existing = InferredFilters {
        min_aesthetics: Some(8.0),
        mechanical_types: vec![MechanicalType::Diesel],
        body_types: vec![BodyType::Suv],
        ..Default::default()
    };
    let profile: UserProfile = test_fixtures::profile("complete");
    let filters = compile_filters(Some(&existing), Some(&profile), &ClimateInfo::default());
    assert_eq!(filters.min_aesthetics, Some(8.0));
    assert_eq!(filters.mechanical_types, vec![MechanicalType::Diesel]);
    assert_eq!(filters.body_types, vec![BodyType::Suv]);
    assert_eq!(filters.min_premium, Some(1.0));
}

#[test]
fn missing_profile_returns_existing_filters() {
    let existing = InferredFilters {
        min_premium: Some(3.0),
        ..Default::default()
    };
    let filters = compile_filters(Some(&existing), None, &ClimateInfo::default());
    assert_eq!(filters, existing);
    assert_eq!(compile_filters(None, None, &ClimateInfo::default()), InferredFilters::default());
}

#[test]
fn minimum_scores_follow_two_tiers() {
    let valued = compile(&UserProfile {
        values_aesthetics: TriState::Yes,
        motor_enthusiast: TriState::Yes,
        ..Default::default()
    });
    assert_eq!(valued.min_aesthetics, Some(5.0));
    assert_eq!(valued.min_premium, Some(5.0));

    let not_valued = compile(&UserProfile {
        values_aesthetics: TriState::No,
        motor_enthusiast: TriState::No,
        ..Default::default()
    });
    assert_eq!(not_valued.min_aesthetics, Some(1.0));
    assert_eq!(not_valued.min_premium, Some(1.0));

    let unanswered = compile(&UserProfile::default());
    assert_eq!(unanswered.min_aesthetics, None);
    assert_eq!(unanswered.min_premium, None);
}

#[test]
fn singularity_has_four_distinct_combinations() {
    let mut seen = Vec::new();
    for enthusiast in [TriState::Yes, TriState::No] {
        for exclusive in [TriState::Yes, TriState::No] {
            let filters = compile(&UserProfile {
                motor_enthusiast: enthusiast,
                prefers_exclusive_design: exclusive,
                ..Default::default()
            });
            seen.push(filters.min_singularity.unwrap());
        }
    }
    assert_eq!(seen, vec![4.5, 3.5, 1.5, 0.5]);
}

#[test]
fn configured_tiers_are_used() {
    let compiler = FilterCompiler::new(FiltersConfig {
        aesthetics_min_valued: 7.5,
        ..Default::default()
    });
    let filters = compiler.compile(
        None,
        Some(&UserProfile {
            values_aesthetics: TriState::Yes,
            ..Default::default()
        }),
        &ClimateInfo::default(),
    );
    assert_eq!(filters.min_aesthetics, Some(7.5));
}

#[test]
fn travelling_alone_needs_one_seat() {
    let passengers = PassengerInfo {
        usually_carries_companions: TriState::No,
        ..Default::default()
    };
    let mut filters = InferredFilters::default();
    apply_passenger_seats(&mut filters, Some(&passengers));
    assert_eq!(filters.min_seats, Some(1));
}

#[test]
fn family_fixture_needs_five_seats() {
    let passengers: PassengerInfo = test_fixtures::passengers("family");
    let mut filters = InferredFilters::default();
    apply_passenger_seats(&mut filters, Some(&passengers));
    assert_eq!(filters.min_seats, Some(5));
}

// ── economics ────────────────────────────────────────────────────────────

#[test]
fn advisory_income_sixty_thousand_savings_twenty_thousand_finances() {
    let info = EconomicsInfo {
        budget_defined: TriState::No,
        annual_income: Some(60_000.0),
        savings: Some(20_000.0),
        ..Default::default()
    };
    let mut filters = InferredFilters::default();
    apply_economics(&mut filters, &info, &EconomicsConfig::default());

    assert_eq!(filters.recommended_acquisition, Some(AcquisitionMode::Financed));
    assert_eq!(filters.max_monthly_installment, Some(500.0));
    assert_eq!(filters.max_cash_price, None);

    let json = serde_json::to_value(&filters).unwrap();
    assert_eq!(json["modo_adquisicion_recomendado"], "Financiado");
    assert_eq!(json["cuota_max_calculada"], 500.0);
    assert!(json["precio_max_contado_recomendado"].is_null());
}

#[test]
fn self_defined_budget_echoes_user_ceiling() {
    let info = EconomicsInfo {
        budget_defined: TriState::Yes,
        acquisition_mode: Some(AcquisitionMode::Cash),
        cash_payment: Some(27_500.0),
        ..Default::default()
    };
    let advice = recommend_acquisition(&info, &EconomicsConfig::default()).unwrap();
    assert_eq!(advice.mode, AcquisitionMode::Cash);
    assert_eq!(advice.max_cash_price, Some(27_500.0));
    assert_eq!(advice.max_monthly_installment, None);
}

#[test]
fn economics_backfill_keeps_extracted_ceiling() {
    let info = EconomicsInfo {
        budget_defined: TriState::No,
        annual_income: Some(60_000.0),
        savings: Some(20_000.0),
        ..Default::default()
    };
    let mut filters = InferredFilters {
        max_cash_price: Some(18_000.0),
        ..Default::default()
    };
    apply_economics(&mut filters, &info, &EconomicsConfig::default());
    assert_eq!(filters.max_cash_price, Some(18_000.0));
    assert_eq!(filters.recommended_acquisition, None);
    assert_eq!(filters.max_monthly_installment, None);
}

#[test]
fn unknown_budget_mode_gives_no_advice() {
    assert_eq!(
        recommend_acquisition(&EconomicsInfo::default(), &EconomicsConfig::default()),
        None
    );
}
