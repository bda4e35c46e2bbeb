mod criteria;
mod thresholds;

pub use criteria::EligibilityCriterion;
pub use thresholds::{
    EligibilityThresholds, MINIMUM_ANNUAL_REVENUE, MINIMUM_CATALOG_ITEMS,
    MINIMUM_GROSS_MERCHANDISE_VALUE, MINIMUM_STORE_COUNT,
};

use serde::{Deserialize, Serialize};

use super::domain::{RetailerId, RetailerProfile};

/// Stateless evaluator applying the readiness thresholds to a profile and
/// a live catalog count. Total over its input domain: any subset of
/// profile fields may be absent and any count is acceptable.
pub struct EligibilityEngine {
    thresholds: EligibilityThresholds,
}

impl EligibilityEngine {
    pub fn new(thresholds: EligibilityThresholds) -> Self {
        Self { thresholds }
    }

    pub fn evaluate(&self, profile: &RetailerProfile, catalog_items: u64) -> EligibilityReport {
        EligibilityReport {
            retailer_id: profile.id.clone(),
            catalog_items,
            shortfalls: criteria::shortfalls(profile, catalog_items, &self.thresholds),
        }
    }
}

/// Evaluation output carrying the structured shortfall tags, ordered by
/// [`EligibilityCriterion::CHECK_ORDER`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityReport {
    pub retailer_id: RetailerId,
    pub catalog_items: u64,
    pub shortfalls: Vec<EligibilityCriterion>,
}

impl EligibilityReport {
    pub fn eligible(&self) -> bool {
        self.shortfalls.is_empty()
    }

    pub fn reasons(&self) -> Vec<&'static str> {
        self.shortfalls
            .iter()
            .map(|criterion| criterion.shortfall_text())
            .collect()
    }

    pub fn view(&self) -> EligibilityView {
        EligibilityView {
            eligible: self.eligible(),
            reasons: self.reasons().into_iter().map(str::to_string).collect(),
        }
    }
}

/// Wire shape returned to API consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityView {
    pub eligible: bool,
    pub reasons: Vec<String>,
}
