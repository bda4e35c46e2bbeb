use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{RetailerId, RetailerSubmission};
use super::repository::{CatalogIndex, RetailerDirectory, StorageError};
use super::service::{OnboardingService, OnboardingServiceError};
use crate::onboarding::catalog::{ManualSkuEntry, PhotoDescriptor};
use crate::onboarding::media::MediaGateway;

/// Router builder exposing the onboarding API surface.
pub fn onboarding_router<R, C, M>(service: Arc<OnboardingService<R, C, M>>) -> Router
where
    R: RetailerDirectory + 'static,
    C: CatalogIndex + 'static,
    M: MediaGateway + 'static,
{
    Router::new()
        .route("/api/v1/retailers", post(register_handler::<R, C, M>))
        .route(
            "/api/v1/retailers/:retailer_id",
            get(profile_handler::<R, C, M>),
        )
        .route(
            "/api/v1/retailers/:retailer_id/eligibility",
            get(eligibility_handler::<R, C, M>),
        )
        .route(
            "/api/v1/retailers/:retailer_id/catalog/items",
            post(manual_item_handler::<R, C, M>),
        )
        .route(
            "/api/v1/retailers/:retailer_id/catalog/csv",
            post(csv_import_handler::<R, C, M>),
        )
        .route(
            "/api/v1/retailers/:retailer_id/catalog/photos",
            post(photo_batch_handler::<R, C, M>),
        )
        .with_state(service)
}

/// Inline CSV payload, submitted as text inside the JSON body.
#[derive(Debug, Deserialize)]
pub struct CsvImportRequest {
    pub csv: String,
}

/// Batch of staged product photos.
#[derive(Debug, Deserialize)]
pub struct PhotoBatchRequest {
    pub files: Vec<PhotoDescriptor>,
}

pub(crate) async fn register_handler<R, C, M>(
    State(service): State<Arc<OnboardingService<R, C, M>>>,
    axum::Json(submission): axum::Json<RetailerSubmission>,
) -> Response
where
    R: RetailerDirectory + 'static,
    C: CatalogIndex + 'static,
    M: MediaGateway + 'static,
{
    match service.register(submission) {
        Ok(profile) => {
            (StatusCode::CREATED, axum::Json(profile.registration_view())).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn profile_handler<R, C, M>(
    State(service): State<Arc<OnboardingService<R, C, M>>>,
    Path(retailer_id): Path<String>,
) -> Response
where
    R: RetailerDirectory + 'static,
    C: CatalogIndex + 'static,
    M: MediaGateway + 'static,
{
    let id = RetailerId(retailer_id);
    match service.profile(&id) {
        Ok(profile) => (StatusCode::OK, axum::Json(profile)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn eligibility_handler<R, C, M>(
    State(service): State<Arc<OnboardingService<R, C, M>>>,
    Path(retailer_id): Path<String>,
) -> Response
where
    R: RetailerDirectory + 'static,
    C: CatalogIndex + 'static,
    M: MediaGateway + 'static,
{
    let id = RetailerId(retailer_id);
    match service.eligibility(&id) {
        Ok(report) => (StatusCode::OK, axum::Json(report.view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn manual_item_handler<R, C, M>(
    State(service): State<Arc<OnboardingService<R, C, M>>>,
    Path(retailer_id): Path<String>,
    axum::Json(entry): axum::Json<ManualSkuEntry>,
) -> Response
where
    R: RetailerDirectory + 'static,
    C: CatalogIndex + 'static,
    M: MediaGateway + 'static,
{
    let id = RetailerId(retailer_id);
    match service.add_manual_item(&id, entry) {
        Ok(item) => (StatusCode::CREATED, axum::Json(item)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn csv_import_handler<R, C, M>(
    State(service): State<Arc<OnboardingService<R, C, M>>>,
    Path(retailer_id): Path<String>,
    axum::Json(request): axum::Json<CsvImportRequest>,
) -> Response
where
    R: RetailerDirectory + 'static,
    C: CatalogIndex + 'static,
    M: MediaGateway + 'static,
{
    let id = RetailerId(retailer_id);
    match service.import_catalog_csv(&id, &request.csv) {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn photo_batch_handler<R, C, M>(
    State(service): State<Arc<OnboardingService<R, C, M>>>,
    Path(retailer_id): Path<String>,
    axum::Json(request): axum::Json<PhotoBatchRequest>,
) -> Response
where
    R: RetailerDirectory + 'static,
    C: CatalogIndex + 'static,
    M: MediaGateway + 'static,
{
    let id = RetailerId(retailer_id);
    match service.attach_photos(&id, request.files) {
        Ok(items) => (
            StatusCode::ACCEPTED,
            axum::Json(json!({ "items": items })),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

/// One mapping from service errors to wire responses. Unknown retailers
/// and infrastructure failures must stay distinguishable to consumers.
fn error_response(error: OnboardingServiceError) -> Response {
    let status = match &error {
        OnboardingServiceError::Validation(_) | OnboardingServiceError::Import(_) => {
            StatusCode::BAD_REQUEST
        }
        OnboardingServiceError::UnknownRetailer(_) => StatusCode::NOT_FOUND,
        OnboardingServiceError::Storage(StorageError::Conflict) => StatusCode::CONFLICT,
        OnboardingServiceError::Storage(StorageError::Unavailable(_)) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        OnboardingServiceError::Media(_) => StatusCode::BAD_GATEWAY,
    };

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
