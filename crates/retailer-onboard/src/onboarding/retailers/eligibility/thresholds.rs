use serde::{Deserialize, Serialize};

/// Annual revenue floor, in currency units. Exactly this value passes.
pub const MINIMUM_ANNUAL_REVENUE: f64 = 5_000.0;

/// Gross merchandise value floor, in currency units. Exactly this value passes.
pub const MINIMUM_GROSS_MERCHANDISE_VALUE: f64 = 5_000.0;

/// At least one physical storefront.
pub const MINIMUM_STORE_COUNT: u32 = 1;

/// At least one catalog entry, of any source.
pub const MINIMUM_CATALOG_ITEMS: u64 = 1;

/// The marketplace readiness floors applied by the evaluator. Values are
/// fixed for the current integration; the struct exists so tests and any
/// future tuning pass thresholds in one place instead of editing logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityThresholds {
    pub minimum_revenue: f64,
    pub minimum_gmv: f64,
    pub minimum_store_count: u32,
    pub minimum_catalog_items: u64,
}

impl Default for EligibilityThresholds {
    fn default() -> Self {
        Self {
            minimum_revenue: MINIMUM_ANNUAL_REVENUE,
            minimum_gmv: MINIMUM_GROSS_MERCHANDISE_VALUE,
            minimum_store_count: MINIMUM_STORE_COUNT,
            minimum_catalog_items: MINIMUM_CATALOG_ITEMS,
        }
    }
}
