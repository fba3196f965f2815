use axum::{
    extract::{rejection::QueryRejection, Query},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use yachtdir_access::{validate_location_limit, LocationLimit};
use yachtdir_core::Location;
use yachtdir_search::{
    auto_designate_hq_location, check_tier_location_access, validate_vendor_locations,
    LocationValidation,
};

use crate::middleware::RequestId;

use super::{parse_tier, query_params, respond, vendors::TierQuery, ApiError, ApiResponse};

#[derive(Debug, Deserialize)]
pub(super) struct LocationsBody {
    pub locations: Vec<Location>,
    /// Promote the first location to HQ before validating when none is marked.
    #[serde(default)]
    pub auto_designate_hq: bool,
}

#[derive(Debug, Serialize)]
pub(super) struct ValidatedLocations {
    #[serde(flatten)]
    validation: LocationValidation,
    locations: Vec<Location>,
}

#[derive(Debug, Serialize)]
pub(super) struct LocationTierAccess {
    allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    limit: LocationLimit,
}

pub(super) async fn validate_locations(
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<LocationsBody>,
) -> Result<Json<ApiResponse<ValidatedLocations>>, ApiError> {
    let locations = if body.auto_designate_hq {
        auto_designate_hq_location(body.locations)
    } else {
        body.locations
    };
    let validation = validate_vendor_locations(&locations);
    if !validation.valid {
        tracing::debug!(errors = ?validation.errors, "location list rejected");
    }
    Ok(respond(
        req_id,
        ValidatedLocations {
            validation,
            locations,
        },
    ))
}

pub(super) async fn check_location_tier_access(
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<TierQuery>, QueryRejection>,
    Json(body): Json<LocationsBody>,
) -> Result<Json<ApiResponse<LocationTierAccess>>, ApiError> {
    let query = query_params(&req_id.0, query)?;
    let tier = parse_tier(&req_id.0, query.tier.as_deref())?;
    let access = check_tier_location_access(tier, &body.locations);
    let limit = validate_location_limit(tier, body.locations.len());
    Ok(respond(
        req_id,
        LocationTierAccess {
            allowed: access.allowed,
            error: access.error,
            limit,
        },
    ))
}
