use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryCatalogIndex, InMemoryMediaStore, InMemoryRetailerDirectory};
use crate::routes::with_onboarding_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use retailer_onboard::config::AppConfig;
use retailer_onboard::error::AppError;
use retailer_onboard::onboarding::retailers::{EligibilityThresholds, OnboardingService};
use retailer_onboard::telemetry;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let retailers = Arc::new(InMemoryRetailerDirectory::default());
    let catalog = Arc::new(InMemoryCatalogIndex::default());
    let media = Arc::new(InMemoryMediaStore::default());
    let onboarding_service = Arc::new(OnboardingService::new(
        retailers,
        catalog,
        media,
        EligibilityThresholds::default(),
        config.storage.clone(),
    ));

    let app = with_onboarding_routes(onboarding_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "retailer onboarding portal ready");

    axum::serve(listener, app).await?;
    Ok(())
}
