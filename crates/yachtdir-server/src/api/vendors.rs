use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use yachtdir_access::{
    export_filename, export_vendors, sanitize_update, Actor, ExportScope, Sanitized,
};
use yachtdir_core::{Coordinates, Location, Tier, UnknownTier};
use yachtdir_search::{
    filter_by_distance, nearby_vendors_by_category, CategoryMatch, CategorySearch,
    TracingObserver, VendorMatch,
};

use crate::middleware::RequestId;

use super::{
    normalize_limit, parse_tier, query_params, respond, ApiError, ApiResponse, AppState,
};

#[derive(Debug, Serialize)]
pub(super) struct NearbyVendorItem {
    vendor_id: String,
    vendor_name: String,
    tier: Tier,
    distance_km: Option<f64>,
    matched_location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    products_in_category: Option<usize>,
}

impl From<&VendorMatch<'_>> for NearbyVendorItem {
    fn from(m: &VendorMatch<'_>) -> Self {
        Self {
            vendor_id: m.vendor.id.clone(),
            vendor_name: m.vendor.name.clone(),
            tier: m.vendor.tier,
            distance_km: m.distance,
            matched_location: m.matched_location.cloned(),
            products_in_category: None,
        }
    }
}

impl From<&CategoryMatch<'_>> for NearbyVendorItem {
    fn from(m: &CategoryMatch<'_>) -> Self {
        Self {
            vendor_id: m.vendor.id.clone(),
            vendor_name: m.vendor.name.clone(),
            tier: m.vendor.tier,
            distance_km: m.distance,
            matched_location: m.matched_location.cloned(),
            products_in_category: Some(m.products_in_category),
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct NearbyVendorsData {
    vendors: Vec<NearbyVendorItem>,
    vendors_with_coordinates: usize,
    vendors_without_coordinates: usize,
    is_filtering: bool,
}

#[derive(Debug, Deserialize)]
pub(super) struct NearbyQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub radius_km: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CategoryQuery {
    pub category: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub exclude_vendor_id: Option<String>,
    pub radius_km: Option<f64>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TierQuery {
    pub tier: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct SheetData {
    filename: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Both coordinates or neither; a lone `lat` or `lon` is a client error.
fn origin(
    req_id: &str,
    lat: Option<f64>,
    lon: Option<f64>,
) -> Result<Option<Coordinates>, ApiError> {
    match (lat, lon) {
        (Some(lat), Some(lon)) => Ok(Some(Coordinates::new(lat, lon))),
        (None, None) => Ok(None),
        _ => Err(ApiError::validation(
            req_id,
            "'lat' and 'lon' must be provided together",
        )),
    }
}

pub(super) async fn list_nearby_vendors(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<NearbyQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<NearbyVendorsData>>, ApiError> {
    let query = query_params(&req_id.0, query)?;
    let user_location = origin(&req_id.0, query.lat, query.lon)?;
    let radius = query.radius_km.unwrap_or(state.config.default_radius_km);

    let result = filter_by_distance(
        &state.directory.vendors,
        user_location,
        radius,
        &TracingObserver,
    )
    .map_err(|e| ApiError::validation(req_id.0.clone(), e.to_string()))?;

    let data = NearbyVendorsData {
        vendors: result.vendors.iter().map(NearbyVendorItem::from).collect(),
        vendors_with_coordinates: result.vendors_with_coordinates,
        vendors_without_coordinates: result.vendors_without_coordinates,
        is_filtering: result.is_filtering,
    };
    Ok(respond(req_id, data))
}

pub(super) async fn list_nearby_vendors_by_category(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<CategoryQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<NearbyVendorItem>>>, ApiError> {
    let query = query_params(&req_id.0, query)?;
    let category = query
        .category
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| ApiError::validation(req_id.0.clone(), "'category' is required"))?;

    let search = CategorySearch {
        user_location: origin(&req_id.0, query.lat, query.lon)?,
        category,
        exclude_vendor_id: query.exclude_vendor_id,
        radius_km: query.radius_km.unwrap_or(state.config.default_radius_km),
        max_results: normalize_limit(query.limit, &state.config),
    };

    let result = nearby_vendors_by_category(
        &state.directory.vendors,
        &state.directory.products,
        &search,
        &TracingObserver,
    );
    if let Some(e) = result.error {
        return Err(ApiError::validation(req_id.0, e.to_string()));
    }

    let data = result.vendors.iter().map(NearbyVendorItem::from).collect();
    Ok(respond(req_id, data))
}

pub(super) async fn sanitize_vendor_update(
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<TierQuery>, QueryRejection>,
    Json(body): Json<Map<String, Value>>,
) -> Result<Json<ApiResponse<Sanitized>>, ApiError> {
    let query = query_params(&req_id.0, query)?;
    let tier = parse_tier(&req_id.0, query.tier.as_deref())?;
    Ok(respond(req_id, sanitize_update(body, Actor::Vendor { tier })))
}

/// `tier` is a vendor tier or `admin` for the full column set.
pub(super) async fn export_vendor_sheet(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<TierQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<SheetData>>, ApiError> {
    let query = query_params(&req_id.0, query)?;
    let scope: ExportScope = query
        .tier
        .as_deref()
        .ok_or_else(|| ApiError::validation(&req_id.0, "'tier' query parameter is required"))?
        .parse()
        .map_err(|e: UnknownTier| ApiError::validation(&req_id.0, e.to_string()))?;

    let sheet = export_vendors(&state.directory.vendors, scope);
    tracing::info!(
        rows = sheet.rows.len(),
        columns = sheet.headers.len(),
        scope = ?scope,
        "vendor sheet exported"
    );

    let data = SheetData {
        filename: export_filename(None, scope.tier(), chrono::Utc::now().date_naive()),
        headers: sheet.headers,
        rows: sheet.rows,
    };
    Ok(respond(req_id, data))
}
