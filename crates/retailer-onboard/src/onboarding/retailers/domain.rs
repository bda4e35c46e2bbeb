use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for registered retailers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RetailerId(pub String);

impl fmt::Display for RetailerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Onboarding form payload. Only the store name is mandatory; every other
/// field may be left blank by the retailer and filled in later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetailerSubmission {
    pub store_name: String,
    pub address: Option<String>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub logo_url: Option<String>,
    pub revenue: Option<f64>,
    pub gmv: Option<f64>,
    pub store_count: Option<u32>,
    pub pos_system: Option<String>,
    pub offers_ecommerce: Option<bool>,
    pub offers_delivery: Option<bool>,
    pub channel_partner: Option<String>,
}

/// A retailer's stored onboarding record. The identifier is stable once
/// assigned; every eligibility-relevant field may legitimately be unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetailerProfile {
    pub id: RetailerId,
    pub store_name: String,
    pub address: Option<String>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub logo_url: Option<String>,
    pub revenue: Option<f64>,
    pub gmv: Option<f64>,
    pub store_count: Option<u32>,
    pub pos_system: Option<String>,
    pub offers_ecommerce: Option<bool>,
    pub offers_delivery: Option<bool>,
    pub channel_partner: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl RetailerProfile {
    /// Build the stored record from a form submission. Blank and
    /// whitespace-only strings collapse to `None` here so every consumer
    /// downstream sees a single absent representation.
    pub fn from_submission(
        id: RetailerId,
        submission: RetailerSubmission,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            store_name: submission.store_name.trim().to_string(),
            address: normalized_text(submission.address),
            contact_name: normalized_text(submission.contact_name),
            contact_phone: normalized_text(submission.contact_phone),
            contact_email: normalized_text(submission.contact_email),
            logo_url: normalized_text(submission.logo_url),
            revenue: submission.revenue,
            gmv: submission.gmv,
            store_count: submission.store_count,
            pos_system: normalized_text(submission.pos_system),
            offers_ecommerce: submission.offers_ecommerce,
            offers_delivery: submission.offers_delivery,
            channel_partner: normalized_text(submission.channel_partner),
            created_at,
        }
    }

    pub fn registration_view(&self) -> RegistrationView {
        RegistrationView {
            retailer_id: self.id.clone(),
            store_name: self.store_name.clone(),
            created_at: self.created_at,
        }
    }
}

/// Response body confirming a registration.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationView {
    pub retailer_id: RetailerId,
    pub store_name: String,
    pub created_at: DateTime<Utc>,
}

fn normalized_text(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
