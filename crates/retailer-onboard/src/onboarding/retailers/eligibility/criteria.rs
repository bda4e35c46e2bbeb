use serde::{Deserialize, Serialize};

use super::super::domain::RetailerProfile;
use super::thresholds::EligibilityThresholds;

/// The readiness criteria a retailer must satisfy before the marketplace
/// integration is unlocked. Variants double as structured shortfall tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityCriterion {
    Revenue,
    GrossMerchandiseValue,
    StoreCount,
    PosSystem,
    CatalogDepth,
}

impl EligibilityCriterion {
    /// Fixed evaluation order. Shortfall lists always follow this order
    /// regardless of which subset fails.
    pub const CHECK_ORDER: [EligibilityCriterion; 5] = [
        EligibilityCriterion::Revenue,
        EligibilityCriterion::GrossMerchandiseValue,
        EligibilityCriterion::StoreCount,
        EligibilityCriterion::PosSystem,
        EligibilityCriterion::CatalogDepth,
    ];

    /// Retailer-facing text for a missed criterion.
    pub const fn shortfall_text(self) -> &'static str {
        match self {
            EligibilityCriterion::Revenue => "Revenue below required minimum",
            EligibilityCriterion::GrossMerchandiseValue => "GMV too low",
            EligibilityCriterion::StoreCount => "Store count too low",
            EligibilityCriterion::PosSystem => "No POS system",
            EligibilityCriterion::CatalogDepth => "No SKUs uploaded",
        }
    }
}

/// Check every criterion, never short-circuiting, so a retailer sees all
/// outstanding blockers in one pass. An absent attribute fails its check;
/// blank strings were already normalized to absent at intake.
pub(crate) fn shortfalls(
    profile: &RetailerProfile,
    catalog_items: u64,
    thresholds: &EligibilityThresholds,
) -> Vec<EligibilityCriterion> {
    let mut missed = Vec::new();

    for criterion in EligibilityCriterion::CHECK_ORDER {
        let satisfied = match criterion {
            EligibilityCriterion::Revenue => profile
                .revenue
                .map(|amount| amount >= thresholds.minimum_revenue)
                .unwrap_or(false),
            EligibilityCriterion::GrossMerchandiseValue => profile
                .gmv
                .map(|amount| amount >= thresholds.minimum_gmv)
                .unwrap_or(false),
            EligibilityCriterion::StoreCount => profile
                .store_count
                .map(|count| count >= thresholds.minimum_store_count)
                .unwrap_or(false),
            EligibilityCriterion::PosSystem => profile.pos_system.is_some(),
            EligibilityCriterion::CatalogDepth => catalog_items >= thresholds.minimum_catalog_items,
        };

        if !satisfied {
            missed.push(criterion);
        }
    }

    missed
}
