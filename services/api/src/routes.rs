use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use retailer_onboard::onboarding::media::MediaGateway;
use retailer_onboard::onboarding::retailers::{
    onboarding_router, CatalogIndex, OnboardingService, RetailerDirectory,
};

#[derive(Debug, Serialize)]
pub(crate) struct HealthStatus {
    pub(crate) status: &'static str,
}

pub(crate) fn with_onboarding_routes<R, C, M>(
    service: Arc<OnboardingService<R, C, M>>,
) -> axum::Router
where
    R: RetailerDirectory + 'static,
    C: CatalogIndex + 'static,
    M: MediaGateway + 'static,
{
    onboarding_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        HealthStatus { status: "ready" }
    } else {
        HealthStatus {
            status: "initializing",
        }
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
