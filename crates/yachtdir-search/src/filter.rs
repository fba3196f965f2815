//! Distance filtering and nearest-first ranking of vendors.

use serde::Serialize;
use yachtdir_core::{checked_distance, Coordinates, CoordinateError, DistanceUnit, Location, Vendor};

use crate::eligibility::eligible_locations;
use crate::error::SearchError;
use crate::observer::{FilterStats, SearchObserver};

/// A vendor annotated with the location that matched a distance search.
#[derive(Debug, Clone, Serialize)]
pub struct VendorMatch<'a> {
    pub vendor: &'a Vendor,
    /// Kilometres from the search origin; `None` when not filtering.
    pub distance: Option<f64>,
    pub matched_location: Option<&'a Location>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationFilterResult<'a> {
    pub vendors: Vec<VendorMatch<'a>>,
    pub vendors_with_coordinates: usize,
    pub vendors_without_coordinates: usize,
    /// `false` when no origin was supplied and `vendors` is the unfiltered input.
    pub is_filtering: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NearbyCheck {
    pub is_nearby: bool,
    pub distance: Option<f64>,
}

pub(crate) fn validate_search(origin: Coordinates, max_distance: f64) -> Result<(), SearchError> {
    origin.validate().map_err(SearchError::InvalidOrigin)?;
    if !max_distance.is_finite() || max_distance < 0.0 {
        return Err(SearchError::InvalidRadius(max_distance));
    }
    Ok(())
}

/// Nearest eligible location of `vendor`, in kilometres.
///
/// Equidistant locations resolve to the first one in the vendor's list.
///
/// # Errors
///
/// Returns the first `CoordinateError` hit while measuring any eligible location.
pub fn nearest_location(
    vendor: &Vendor,
    origin: Coordinates,
) -> Result<Option<(&Location, f64)>, CoordinateError> {
    let mut best: Option<(&Location, f64)> = None;

    for location in eligible_locations(vendor) {
        let Some(coords) = location.coordinates() else {
            continue;
        };
        let distance = checked_distance(origin, coords, DistanceUnit::Km)?;
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((location, distance));
        }
    }

    Ok(best)
}

/// Nearest eligible location within `max_distance`, or `None`.
///
/// A measurement failure is reported and counts as no match.
pub(crate) fn match_within<'a>(
    vendor: &'a Vendor,
    origin: Coordinates,
    max_distance: f64,
    observer: &dyn SearchObserver,
) -> Option<(&'a Location, f64)> {
    match nearest_location(vendor, origin) {
        Ok(Some((location, distance))) if distance <= max_distance => Some((location, distance)),
        Ok(_) => None,
        Err(e) => {
            observer.distance_failed(vendor, &e);
            None
        }
    }
}

pub(crate) fn sort_by_distance<T>(items: &mut [T], distance: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| distance(a).total_cmp(&distance(b)));
}

/// Restrict `vendors` to those with an eligible location within
/// `max_distance` km of `user_location`, nearest first.
///
/// With no origin every vendor is returned unchanged and `is_filtering` is
/// `false`.
///
/// # Errors
///
/// Returns `SearchError` when the origin is out of range or `max_distance` is
/// negative or non-finite. Per-vendor failures never abort the pass.
pub fn filter_by_distance<'a>(
    vendors: &'a [Vendor],
    user_location: Option<Coordinates>,
    max_distance: f64,
    observer: &dyn SearchObserver,
) -> Result<LocationFilterResult<'a>, SearchError> {
    let vendors_with_coordinates = vendors
        .iter()
        .filter(|v| !eligible_locations(v).is_empty())
        .count();
    let vendors_without_coordinates = vendors.len() - vendors_with_coordinates;

    let Some(origin) = user_location else {
        return Ok(LocationFilterResult {
            vendors: vendors
                .iter()
                .map(|vendor| VendorMatch {
                    vendor,
                    distance: None,
                    matched_location: None,
                })
                .collect(),
            vendors_with_coordinates,
            vendors_without_coordinates,
            is_filtering: false,
        });
    };

    validate_search(origin, max_distance)?;

    let mut matches: Vec<VendorMatch<'a>> = vendors
        .iter()
        .filter_map(|vendor| {
            match_within(vendor, origin, max_distance, observer).map(|(location, distance)| {
                VendorMatch {
                    vendor,
                    distance: Some(distance),
                    matched_location: Some(location),
                }
            })
        })
        .collect();

    sort_by_distance(&mut matches, |m| m.distance.unwrap_or(f64::INFINITY));

    observer.filter_completed(FilterStats {
        total: vendors.len(),
        with_coordinates: vendors_with_coordinates,
        matched: matches.len(),
    });

    Ok(LocationFilterResult {
        vendors: matches,
        vendors_with_coordinates,
        vendors_without_coordinates,
        is_filtering: true,
    })
}

/// Matched vendors only, without the coordinate statistics.
///
/// # Errors
///
/// Same as [`filter_by_distance`].
pub fn nearby_vendors<'a>(
    vendors: &'a [Vendor],
    user_location: Option<Coordinates>,
    max_distance: f64,
    observer: &dyn SearchObserver,
) -> Result<Vec<VendorMatch<'a>>, SearchError> {
    filter_by_distance(vendors, user_location, max_distance, observer).map(|r| r.vendors)
}

/// Vendors with an eligible location within `radius_km` of (`latitude`, `longitude`).
///
/// # Errors
///
/// Same as [`filter_by_distance`].
pub fn find_vendors_within_radius<'a>(
    vendors: &'a [Vendor],
    latitude: f64,
    longitude: f64,
    radius_km: f64,
    observer: &dyn SearchObserver,
) -> Result<Vec<VendorMatch<'a>>, SearchError> {
    nearby_vendors(
        vendors,
        Some(Coordinates::new(latitude, longitude)),
        radius_km,
        observer,
    )
}

/// Whether a single vendor has an eligible location within `max_distance`.
///
/// `distance` is the nearest eligible location even when it is out of range.
/// Missing origin or any measurement failure yields "not nearby".
pub fn is_vendor_nearby(
    vendor: &Vendor,
    user_location: Option<Coordinates>,
    max_distance: f64,
    observer: &dyn SearchObserver,
) -> NearbyCheck {
    let not_nearby = NearbyCheck {
        is_nearby: false,
        distance: None,
    };

    let Some(origin) = user_location else {
        return not_nearby;
    };
    if let Err(e) = validate_search(origin, max_distance) {
        observer.search_failed(&e);
        return not_nearby;
    }

    match nearest_location(vendor, origin) {
        Ok(Some((_, distance))) => NearbyCheck {
            is_nearby: distance <= max_distance,
            distance: Some(distance),
        },
        Ok(None) => not_nearby,
        Err(e) => {
            observer.distance_failed(vendor, &e);
            not_nearby
        }
    }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
