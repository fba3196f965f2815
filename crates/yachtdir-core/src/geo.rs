//! Coordinates and great-circle distance.

use serde::{Deserialize, Serialize};

use crate::error::CoordinateError;

const EARTH_RADIUS_KM: f64 = 6371.0;
const EARTH_RADIUS_MILES: f64 = 3959.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check both components against the inclusive WGS84 bounds.
    ///
    /// NaN fails the range check, so non-finite values are rejected here too.
    ///
    /// # Errors
    ///
    /// Returns the first component that is out of range.
    pub fn validate(&self) -> Result<(), CoordinateError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(self.longitude));
        }
        Ok(())
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Km,
    Miles,
}

impl DistanceUnit {
    #[must_use]
    pub const fn earth_radius(self) -> f64 {
        match self {
            DistanceUnit::Km => EARTH_RADIUS_KM,
            DistanceUnit::Miles => EARTH_RADIUS_MILES,
        }
    }
}

/// Haversine great-circle distance between two points given in degrees.
///
/// Inputs are not range-checked; see [`checked_distance`].
#[must_use]
pub fn haversine_distance(from: Coordinates, to: Coordinates, unit: DistanceUnit) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    unit.earth_radius() * c
}

/// Validate both points, then compute the Haversine distance.
///
/// # Errors
///
/// Returns `CoordinateError` when either point is out of range or the result
/// is not finite.
pub fn checked_distance(
    from: Coordinates,
    to: Coordinates,
    unit: DistanceUnit,
) -> Result<f64, CoordinateError> {
    from.validate()?;
    to.validate()?;
    let distance = haversine_distance(from, to, unit);
    if distance.is_finite() {
        Ok(distance)
    } else {
        Err(CoordinateError::NonFiniteDistance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONACO: Coordinates = Coordinates::new(43.7384, 7.4246);
    const NICE: Coordinates = Coordinates::new(43.7102, 7.2620);
    const FORT_LAUDERDALE: Coordinates = Coordinates::new(26.122_439, -80.137_314);
    const MIAMI: Coordinates = Coordinates::new(25.7617, -80.1918);

    #[test]
    fn fort_lauderdale_to_miami_is_about_42_km() {
        let d = haversine_distance(FORT_LAUDERDALE, MIAMI, DistanceUnit::Km);
        assert!(d > 40.0 && d < 45.0, "got {d}");
    }

    #[test]
    fn new_york_to_los_angeles() {
        let ny = Coordinates::new(40.7128, -74.0060);
        let la = Coordinates::new(34.0522, -118.2437);
        let d = haversine_distance(ny, la, DistanceUnit::Km);
        assert!(d > 3900.0 && d < 4000.0, "got {d}");
    }

    #[test]
    fn southern_hemisphere() {
        let sydney = Coordinates::new(-33.8688, 151.2093);
        let melbourne = Coordinates::new(-37.8136, 144.9631);
        let d = haversine_distance(sydney, melbourne, DistanceUnit::Km);
        assert!(d > 700.0 && d < 750.0, "got {d}");
    }

    #[test]
    fn identical_points_are_zero() {
        assert_eq!(
            haversine_distance(FORT_LAUDERDALE, FORT_LAUDERDALE, DistanceUnit::Km),
            0.0
        );
    }

    #[test]
    fn distance_is_symmetric() {
        let pairs = [
            (MONACO, NICE),
            (MONACO, FORT_LAUDERDALE),
            (Coordinates::new(-90.0, 0.0), Coordinates::new(90.0, 180.0)),
        ];
        for (a, b) in pairs {
            let ab = haversine_distance(a, b, DistanceUnit::Km);
            let ba = haversine_distance(b, a, DistanceUnit::Km);
            assert!((ab - ba).abs() < 1e-9, "{ab} != {ba}");
        }
    }

    #[test]
    fn miles_use_smaller_radius() {
        let km = haversine_distance(MONACO, NICE, DistanceUnit::Km);
        let miles = haversine_distance(MONACO, NICE, DistanceUnit::Miles);
        assert!((miles / km - 3959.0 / 6371.0).abs() < 1e-9);
    }

    #[test]
    fn bounds_are_inclusive() {
        for c in [
            Coordinates::new(90.0, 0.0),
            Coordinates::new(-90.0, 0.0),
            Coordinates::new(0.0, 180.0),
            Coordinates::new(0.0, -180.0),
        ] {
            assert!(c.is_valid(), "{c:?} should be valid");
        }
    }

    #[test]
    fn out_of_range_and_nan_rejected() {
        assert_eq!(
            Coordinates::new(91.0, 0.0).validate(),
            Err(CoordinateError::LatitudeOutOfRange(91.0))
        );
        assert_eq!(
            Coordinates::new(0.0, -180.5).validate(),
            Err(CoordinateError::LongitudeOutOfRange(-180.5))
        );
        assert!(!Coordinates::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn checked_distance_rejects_bad_points() {
        let bad = Coordinates::new(200.0, 0.0);
        assert!(checked_distance(MONACO, bad, DistanceUnit::Km).is_err());
        let ok = checked_distance(MONACO, NICE, DistanceUnit::Km).unwrap();
        assert!(ok > 12.5 && ok < 14.5, "got {ok}");
    }
}
