use super::common::*;
use crate::onboarding::retailers::eligibility::{
    EligibilityCriterion, EligibilityThresholds, MINIMUM_ANNUAL_REVENUE, MINIMUM_CATALOG_ITEMS,
    MINIMUM_GROSS_MERCHANDISE_VALUE, MINIMUM_STORE_COUNT,
};

#[test]
fn qualified_profile_with_stocked_catalog_is_eligible() {
    let report = engine().evaluate(&profile_with(Some(10_000.0), Some(8_000.0), Some(3), Some("Square")), 12);

    assert!(report.eligible());
    assert!(report.shortfalls.is_empty());
    assert!(report.reasons().is_empty());
}

#[test]
fn empty_profile_misses_every_criterion_in_order() {
    let report = engine().evaluate(&profile_with(None, None, None, None), 0);

    assert!(!report.eligible());
    assert_eq!(
        report.reasons(),
        vec![
            "Revenue below required minimum",
            "GMV too low",
            "Store count too low",
            "No POS system",
            "No SKUs uploaded",
        ]
    );
    assert_eq!(report.shortfalls, EligibilityCriterion::CHECK_ORDER.to_vec());
}

#[test]
fn empty_catalog_is_the_only_blocker_for_a_threshold_profile() {
    let report = engine().evaluate(&profile_with(Some(5_000.0), Some(5_000.0), Some(1), Some("Clover")), 0);

    assert!(!report.eligible());
    assert_eq!(report.reasons(), vec!["No SKUs uploaded"]);
}

#[test]
fn revenue_and_gmv_boundaries_are_inclusive() {
    let exactly = engine().evaluate(&profile_with(Some(5_000.0), Some(5_000.0), Some(1), Some("Square")), 1);
    assert!(exactly.eligible());

    let just_under = engine().evaluate(
        &profile_with(Some(4_999.99), Some(4_999.99), Some(1), Some("Square")),
        1,
    );
    assert_eq!(
        just_under.shortfalls,
        vec![
            EligibilityCriterion::Revenue,
            EligibilityCriterion::GrossMerchandiseValue,
        ]
    );
}

#[test]
fn store_and_catalog_counts_require_at_least_one() {
    let no_stores = engine().evaluate(&profile_with(Some(9_000.0), Some(9_000.0), Some(0), Some("Square")), 1);
    assert_eq!(no_stores.shortfalls, vec![EligibilityCriterion::StoreCount]);

    let one_store = engine().evaluate(&profile_with(Some(9_000.0), Some(9_000.0), Some(1), Some("Square")), 1);
    assert!(one_store.eligible());

    let no_items = engine().evaluate(&profile_with(Some(9_000.0), Some(9_000.0), Some(1), Some("Square")), 0);
    assert_eq!(no_items.shortfalls, vec![EligibilityCriterion::CatalogDepth]);
}

#[test]
fn partial_failures_keep_the_fixed_order() {
    // GMV and catalog fail; revenue, stores, and POS pass.
    let report = engine().evaluate(&profile_with(Some(7_500.0), Some(100.0), Some(2), Some("Toast")), 0);

    assert_eq!(
        report.shortfalls,
        vec![
            EligibilityCriterion::GrossMerchandiseValue,
            EligibilityCriterion::CatalogDepth,
        ]
    );
}

#[test]
fn eligible_exactly_when_no_reasons_remain() {
    let revenue_options = [None, Some(4_999.99), Some(5_000.0)];
    let pos_options: [Option<&str>; 2] = [None, Some("Square")];
    let counts = [0_u64, 1, 40];

    for revenue in revenue_options {
        for pos in pos_options {
            for count in counts {
                let report =
                    engine().evaluate(&profile_with(revenue, Some(6_000.0), Some(1), pos), count);
                assert_eq!(
                    report.eligible(),
                    report.reasons().is_empty(),
                    "revenue {revenue:?}, pos {pos:?}, count {count}"
                );
            }
        }
    }
}

#[test]
fn improving_one_attribute_never_adds_reasons() {
    let before = engine().evaluate(&profile_with(Some(4_999.99), None, Some(0), None), 0);
    let after = engine().evaluate(&profile_with(Some(5_000.0), None, Some(0), None), 0);

    assert_eq!(before.shortfalls.len(), 5);
    assert_eq!(after.shortfalls.len(), 4);
    assert!(!after.shortfalls.contains(&EligibilityCriterion::Revenue));

    let stocked = engine().evaluate(&profile_with(Some(5_000.0), None, Some(0), None), 3);
    assert_eq!(stocked.shortfalls.len(), 3);
}

#[test]
fn blank_pos_system_normalizes_to_absent_before_evaluation() {
    let profile = profile_with(Some(9_000.0), Some(9_000.0), Some(2), Some("   "));
    assert_eq!(profile.pos_system, None);

    let report = engine().evaluate(&profile, 5);
    assert_eq!(report.shortfalls, vec![EligibilityCriterion::PosSystem]);
}

#[test]
fn check_order_covers_each_criterion_once() {
    let order = EligibilityCriterion::CHECK_ORDER;
    assert_eq!(order.len(), 5);
    for criterion in order {
        assert_eq!(
            order.iter().filter(|entry| **entry == criterion).count(),
            1,
            "{criterion:?} listed more than once"
        );
    }
}

#[test]
fn default_thresholds_match_the_published_minimums() {
    let defaults = EligibilityThresholds::default();
    assert_eq!(defaults.minimum_revenue, MINIMUM_ANNUAL_REVENUE);
    assert_eq!(defaults.minimum_gmv, MINIMUM_GROSS_MERCHANDISE_VALUE);
    assert_eq!(defaults.minimum_store_count, MINIMUM_STORE_COUNT);
    assert_eq!(defaults.minimum_catalog_items, MINIMUM_CATALOG_ITEMS);
}

#[test]
fn shortfall_texts_are_stable() {
    assert_eq!(
        EligibilityCriterion::Revenue.shortfall_text(),
        "Revenue below required minimum"
    );
    assert_eq!(
        EligibilityCriterion::GrossMerchandiseValue.shortfall_text(),
        "GMV too low"
    );
    assert_eq!(
        EligibilityCriterion::StoreCount.shortfall_text(),
        "Store count too low"
    );
    assert_eq!(EligibilityCriterion::PosSystem.shortfall_text(), "No POS system");
    assert_eq!(
        EligibilityCriterion::CatalogDepth.shortfall_text(),
        "No SKUs uploaded"
    );
}
