//! Structural checks on a vendor's location list.

use serde::Serialize;
use yachtdir_core::{Location, Tier};

const MAX_ADDRESS_CHARS: usize = 500;
const MAX_CITY_CHARS: usize = 255;
const MAX_COUNTRY_CHARS: usize = 255;

pub const LATITUDE_RANGE_MESSAGE: &str = "Latitude must be between -90 and 90";
pub const LONGITUDE_RANGE_MESSAGE: &str = "Longitude must be between -180 and 180";
pub const MISSING_HQ_MESSAGE: &str = "Exactly one location must be designated as Headquarters";
pub const MULTIPLE_HQ_MESSAGE: &str = "Only one location can be designated as Headquarters";
pub const MULTI_LOCATION_TIER_MESSAGE: &str = "Multiple locations require Tier 2 subscription";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationValidation {
    pub valid: bool,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierLocationAccess {
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn too_long(value: Option<&str>, max: usize) -> bool {
    value.is_some_and(|s| s.chars().count() > max)
}

fn out_of_range(value: Option<f64>, bound: f64) -> bool {
    value.is_some_and(|v| !(-bound..=bound).contains(&v))
}

/// Validate coordinates, field lengths, and HQ designation.
///
/// Each distinct message is reported once regardless of how many locations
/// trigger it. An empty list is valid.
#[must_use]
pub fn validate_vendor_locations(locations: &[Location]) -> LocationValidation {
    let mut errors: Vec<String> = Vec::new();
    let mut push = |message: &str| {
        if !errors.iter().any(|e| e == message) {
            errors.push(message.to_string());
        }
    };

    for location in locations {
        if out_of_range(location.latitude, 90.0) {
            push(LATITUDE_RANGE_MESSAGE);
        }
        if out_of_range(location.longitude, 180.0) {
            push(LONGITUDE_RANGE_MESSAGE);
        }
        if too_long(location.address.as_deref(), MAX_ADDRESS_CHARS) {
            push("Address must not exceed 500 characters");
        }
        if too_long(location.city.as_deref(), MAX_CITY_CHARS) {
            push("City must not exceed 255 characters");
        }
        if too_long(location.country.as_deref(), MAX_COUNTRY_CHARS) {
            push("Country must not exceed 255 characters");
        }
    }

    if !locations.is_empty() {
        match locations.iter().filter(|l| l.is_hq()).count() {
            0 => push(MISSING_HQ_MESSAGE),
            1 => {}
            _ => push(MULTIPLE_HQ_MESSAGE),
        }
    }

    LocationValidation {
        valid: errors.is_empty(),
        errors,
    }
}

/// Whether `tier` may list this many locations at all.
///
/// Below tier2 only a single location is permitted here, independent of the
/// per-tier numeric limits enforced at save time.
#[must_use]
pub fn check_tier_location_access(tier: Tier, locations: &[Location]) -> TierLocationAccess {
    if locations.len() > 1 && !tier.is_at_least(Tier::Tier2) {
        return TierLocationAccess {
            allowed: false,
            error: Some(MULTI_LOCATION_TIER_MESSAGE.to_string()),
        };
    }
    TierLocationAccess {
        allowed: true,
        error: None,
    }
}

/// Make HQ designation explicit on every location.
///
/// When nothing is flagged, the first location becomes HQ. An existing HQ is
/// never moved; every other unset flag becomes `false`.
#[must_use]
pub fn auto_designate_hq_location(mut locations: Vec<Location>) -> Vec<Location> {
    let has_hq = locations.iter().any(Location::is_hq);
    for (i, location) in locations.iter_mut().enumerate() {
        if !has_hq && i == 0 {
            location.is_hq = Some(true);
        } else if location.is_hq.is_none() {
            location.is_hq = Some(false);
        }
    }
    locations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(lat: f64, lon: f64, hq: Option<bool>) -> Location {
        Location {
            latitude: Some(lat),
            longitude: Some(lon),
            is_hq: hq,
            ..Location::default()
        }
    }

    #[test]
    fn empty_list_is_valid() {
        let result = validate_vendor_locations(&[]);
        assert!(result.valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn single_hq_is_valid() {
        let result = validate_vendor_locations(&[at(43.7384, 7.4246, Some(true))]);
        assert_eq!(
            result,
            LocationValidation {
                valid: true,
                errors: vec![]
            }
        );
    }

    #[test]
    fn latitude_out_of_range() {
        let result = validate_vendor_locations(&[at(91.0, 0.0, Some(true))]);
        assert!(!result.valid);
        assert_eq!(result.errors, vec![LATITUDE_RANGE_MESSAGE.to_string()]);
    }

    #[test]
    fn longitude_out_of_range() {
        let result = validate_vendor_locations(&[at(0.0, -180.5, Some(true))]);
        assert_eq!(result.errors, vec![LONGITUDE_RANGE_MESSAGE.to_string()]);
    }

    #[test]
    fn bounds_are_inclusive() {
        let result = validate_vendor_locations(&[
            at(90.0, 180.0, Some(true)),
            at(-90.0, -180.0, Some(false)),
        ]);
        assert!(result.valid, "{:?}", result.errors);
    }

    #[test]
    fn nan_latitude_is_out_of_range() {
        let result = validate_vendor_locations(&[at(f64::NAN, 0.0, Some(true))]);
        assert_eq!(result.errors, vec![LATITUDE_RANGE_MESSAGE.to_string()]);
    }

    #[test]
    fn missing_coordinates_are_allowed() {
        let location = Location {
            address: Some("Quai Antoine 1er".to_string()),
            is_hq: Some(true),
            ..Location::default()
        };
        assert!(validate_vendor_locations(&[location]).valid);
    }

    #[test]
    fn long_text_fields_rejected() {
        let location = Location {
            address: Some("a".repeat(501)),
            city: Some("c".repeat(256)),
            country: Some("k".repeat(256)),
            is_hq: Some(true),
            ..Location::default()
        };
        let result = validate_vendor_locations(&[location]);
        assert_eq!(
            result.errors,
            vec![
                "Address must not exceed 500 characters".to_string(),
                "City must not exceed 255 characters".to_string(),
                "Country must not exceed 255 characters".to_string(),
            ]
        );
    }

    #[test]
    fn length_limits_count_characters_not_bytes() {
        let location = Location {
            city: Some("é".repeat(255)),
            is_hq: Some(true),
            ..Location::default()
        };
        assert!(validate_vendor_locations(&[location]).valid);
    }

    #[test]
    fn no_hq_is_rejected() {
        let result =
            validate_vendor_locations(&[at(1.0, 1.0, Some(false)), at(2.0, 2.0, None)]);
        assert_eq!(result.errors, vec![MISSING_HQ_MESSAGE.to_string()]);
    }

    #[test]
    fn two_hqs_are_rejected() {
        let result =
            validate_vendor_locations(&[at(1.0, 1.0, Some(true)), at(2.0, 2.0, Some(true))]);
        assert_eq!(result.errors, vec![MULTIPLE_HQ_MESSAGE.to_string()]);
    }

    #[test]
    fn repeated_violation_reported_once() {
        let result = validate_vendor_locations(&[
            at(100.0, 0.0, Some(true)),
            at(-100.0, 0.0, Some(false)),
        ]);
        assert_eq!(result.errors, vec![LATITUDE_RANGE_MESSAGE.to_string()]);
    }

    #[test]
    fn free_tier_cannot_list_two_locations() {
        let locations = [at(1.0, 1.0, Some(true)), at(2.0, 2.0, Some(false))];
        let access = check_tier_location_access(Tier::Free, &locations);
        assert!(!access.allowed);
        assert_eq!(access.error.as_deref(), Some(MULTI_LOCATION_TIER_MESSAGE));

        assert!(!check_tier_location_access(Tier::Tier1, &locations).allowed);
    }

    #[test]
    fn tier2_may_list_many_locations() {
        let locations = [at(1.0, 1.0, Some(true)), at(2.0, 2.0, Some(false))];
        for tier in [Tier::Tier2, Tier::Tier3] {
            let access = check_tier_location_access(tier, &locations);
            assert!(access.allowed);
            assert!(access.error.is_none());
        }
    }

    #[test]
    fn single_location_always_allowed() {
        assert!(check_tier_location_access(Tier::Free, &[at(1.0, 1.0, Some(true))]).allowed);
        assert!(check_tier_location_access(Tier::Free, &[]).allowed);
    }

    #[test]
    fn first_location_becomes_hq_when_none_flagged() {
        let out = auto_designate_hq_location(vec![at(1.0, 1.0, None), at(2.0, 2.0, None)]);
        assert_eq!(out[0].is_hq, Some(true));
        assert_eq!(out[1].is_hq, Some(false));
    }

    #[test]
    fn explicit_false_on_first_is_overridden_when_no_hq() {
        let out =
            auto_designate_hq_location(vec![at(1.0, 1.0, Some(false)), at(2.0, 2.0, None)]);
        assert_eq!(out[0].is_hq, Some(true));
        assert_eq!(out[1].is_hq, Some(false));
    }

    #[test]
    fn existing_hq_is_preserved() {
        let out = auto_designate_hq_location(vec![
            at(1.0, 1.0, None),
            at(2.0, 2.0, Some(true)),
            at(3.0, 3.0, None),
        ]);
        let flags: Vec<Option<bool>> = out.iter().map(|l| l.is_hq).collect();
        assert_eq!(flags, vec![Some(false), Some(true), Some(false)]);
    }

    #[test]
    fn auto_designate_empty_is_empty() {
        assert!(auto_designate_hq_location(Vec::new()).is_empty());
    }

    #[test]
    fn auto_designated_list_passes_validation() {
        let out = auto_designate_hq_location(vec![at(1.0, 1.0, None), at(2.0, 2.0, None)]);
        assert!(validate_vendor_locations(&out).valid);
    }
}
