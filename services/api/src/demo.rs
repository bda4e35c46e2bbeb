use crate::infra::{InMemoryCatalogIndex, InMemoryMediaStore, InMemoryRetailerDirectory};
use clap::Args;
use retailer_onboard::config::StorageConfig;
use retailer_onboard::error::AppError;
use retailer_onboard::onboarding::catalog::{ManualSkuEntry, PhotoDescriptor};
use retailer_onboard::onboarding::retailers::{
    CatalogIndex, EligibilityReport, EligibilityThresholds, OnboardingService,
    OnboardingServiceError, RetailerSubmission,
};
use std::path::PathBuf;
use std::sync::Arc;

const SAMPLE_CATALOG_CSV: &str = "Name,Price,Unit Size,Category\n\
Heirloom Tomatoes,4.99,1 lb,Produce\n\
Raw Honey,$12.50,12 oz,Pantry\n\
Cut Flowers,,bunch,Floral\n";

const SAMPLE_PHOTOS: [&str; 2] = ["market-shelf.jpg", "seasonal-display.png"];

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional CSV catalog file to import instead of the built-in sample.
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { catalog_csv } = args;

    let retailers = Arc::new(InMemoryRetailerDirectory::default());
    let catalog = Arc::new(InMemoryCatalogIndex::default());
    let media = Arc::new(InMemoryMediaStore::default());
    let service = OnboardingService::new(
        retailers,
        catalog.clone(),
        media.clone(),
        EligibilityThresholds::default(),
        StorageConfig {
            catalog_bucket: "catalog-archives".to_string(),
        },
    );

    println!("Retailer onboarding demo");

    let submission = RetailerSubmission {
        store_name: "Prairie Sky Farm Store".to_string(),
        address: Some("412 Orchard Rd, Ames, IA".to_string()),
        contact_name: Some("Dana Whitfield".to_string()),
        contact_phone: Some("555-0114".to_string()),
        contact_email: Some("dana@prairiesky.example".to_string()),
        logo_url: None,
        revenue: Some(12_500.0),
        gmv: Some(9_800.0),
        store_count: Some(2),
        pos_system: Some("Square".to_string()),
        offers_ecommerce: Some(true),
        offers_delivery: Some(true),
        channel_partner: None,
    };

    let profile = service.register(submission)?;
    println!(
        "\nRegistered {} as {} ({})",
        profile.store_name,
        profile.id,
        profile
            .created_at
            .to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
    );

    let before = service.eligibility(&profile.id)?;
    render_eligibility("Before catalog intake", &before);

    let csv_text = match catalog_csv {
        Some(path) => std::fs::read_to_string(path)?,
        None => SAMPLE_CATALOG_CSV.to_string(),
    };

    let summary = service.import_catalog_csv(&profile.id, &csv_text)?;
    println!(
        "\nCSV import: {} accepted, {} rejected, raw payload archived at {} ({} object(s) stored)",
        summary.accepted,
        summary.rejected.len(),
        summary.archive_key,
        media.object_count()
    );
    for issue in &summary.rejected {
        println!("  line {}: {}", issue.line, issue.reason);
    }

    service.add_manual_item(
        &profile.id,
        ManualSkuEntry {
            name: "Cider Donuts".to_string(),
            price: Some(5.0),
            unit_size: Some("half dozen".to_string()),
            category: Some("Bakery".to_string()),
            image_key: None,
        },
    )?;
    println!("\nManual SKU recorded: Cider Donuts");

    let photos: Vec<PhotoDescriptor> = SAMPLE_PHOTOS
        .iter()
        .map(|file_name| {
            let content_type = mime_guess::from_path(file_name).first_or_octet_stream();
            println!("Staging {file_name} ({content_type})");
            PhotoDescriptor {
                file_name: (*file_name).to_string(),
                storage_key: format!("{}/photos/{file_name}", profile.id),
            }
        })
        .collect();
    let photo_items = service.attach_photos(&profile.id, photos)?;
    println!("Photo-derived entries: {}", photo_items.len());

    let after = service.eligibility(&profile.id)?;
    render_eligibility("After catalog intake", &after);
    println!(
        "API consumers receive: {}",
        serde_json::json!(after.view())
    );

    let items = catalog
        .items_for(&profile.id)
        .map_err(OnboardingServiceError::Storage)?;
    println!("\nCatalog entries ({}):", items.len());
    for item in items {
        let price = item
            .price
            .map(|price| format!("${price:.2}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {} {} [{}] {}",
            item.id,
            item.name,
            item.source.label(),
            price
        );
    }

    Ok(())
}

fn render_eligibility(label: &str, report: &EligibilityReport) {
    println!("\n{label}: catalog items = {}", report.catalog_items);
    if report.eligible() {
        println!("  Eligible for the marketplace integration");
    } else {
        println!("  Not eligible yet:");
        for reason in report.reasons() {
            println!("  - {reason}");
        }
    }
}
