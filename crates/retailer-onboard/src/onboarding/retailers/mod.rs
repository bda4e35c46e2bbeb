//! Retailer registration, the catalog-intake service facade, and the
//! marketplace eligibility evaluator.

pub mod domain;
pub mod eligibility;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{RegistrationView, RetailerId, RetailerProfile, RetailerSubmission};
pub use eligibility::{
    EligibilityCriterion, EligibilityEngine, EligibilityReport, EligibilityThresholds,
    EligibilityView,
};
pub use repository::{CatalogIndex, RetailerDirectory, StorageError};
pub use router::onboarding_router;
pub use service::{OnboardingService, OnboardingServiceError, ValidationError};
