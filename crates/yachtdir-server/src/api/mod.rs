mod locations;
mod vendors;

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use yachtdir_core::{AppConfig, Directory, Tier};

use crate::middleware::{request_id, RequestId, REQUEST_ID_HEADER};

#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<Directory>,
    pub config: Arc<AppConfig>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    vendors: usize,
    products: usize,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }

    pub(super) fn validation(request_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(request_id, "validation_error", message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

pub(super) fn respond<T: Serialize>(req_id: RequestId, data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    })
}

/// Requested result count, defaulted and clamped to `[1, cap]`.
pub(super) fn normalize_limit(limit: Option<usize>, config: &AppConfig) -> usize {
    limit
        .unwrap_or(config.default_max_results)
        .clamp(1, config.max_results_cap)
}

pub(super) fn parse_tier(req_id: &str, raw: Option<&str>) -> Result<Tier, ApiError> {
    let raw =
        raw.ok_or_else(|| ApiError::validation(req_id, "'tier' query parameter is required"))?;
    raw.parse::<Tier>()
        .map_err(|e| ApiError::validation(req_id, e.to_string()))
}

/// Malformed query strings answer with the JSON error envelope instead of
/// axum's plain-text rejection.
pub(super) fn query_params<T>(
    req_id: &str,
    query: Result<Query<T>, QueryRejection>,
) -> Result<T, ApiError> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| ApiError::validation(req_id, rejection.body_text()))
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/vendors/nearby", get(vendors::list_nearby_vendors))
        .route(
            "/api/v1/vendors/nearby-by-category",
            get(vendors::list_nearby_vendors_by_category),
        )
        .route("/api/v1/vendors/sanitize", post(vendors::sanitize_vendor_update))
        .route("/api/v1/vendors/export", get(vendors::export_vendor_sheet))
        .route("/api/v1/locations/validate", post(locations::validate_locations))
        .route(
            "/api/v1/locations/tier-access",
            post(locations::check_location_tier_access),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    respond(
        req_id,
        HealthData {
            status: "ok",
            vendors: state.directory.vendors.len(),
            products: state.directory.products.len(),
        },
    )
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
