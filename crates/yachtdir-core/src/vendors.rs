use serde::{Deserialize, Serialize};

use crate::geo::Coordinates;
use crate::tier::Tier;

/// One physical office or showroom of a vendor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// `None` means the flag was never set; treated as `false` everywhere
    /// except HQ auto-designation.
    #[serde(default, rename = "isHQ", skip_serializing_if = "Option::is_none")]
    pub is_hq: Option<bool>,
}

impl Location {
    /// Usable coordinates: both components present and finite.
    ///
    /// Range is not checked here; out-of-range values surface later as a
    /// distance error.
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => {
                Some(Coordinates::new(lat, lon))
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn is_hq(&self) -> bool {
        self.is_hq == Some(true)
    }

    /// Short human label, e.g. `"Monaco HQ"` or `"Fort Lauderdale, United States"`.
    #[must_use]
    pub fn label(&self) -> String {
        if let Some(name) = self.location_name.as_deref().filter(|s| !s.is_empty()) {
            return name.to_string();
        }
        let parts: Vec<&str> = [self.city.as_deref(), self.country.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            self.address.clone().unwrap_or_default()
        } else {
            parts.join(", ")
        }
    }
}

/// A vendor as the search and access layers see it.
///
/// Profile fields outside the core shape (website, case studies, ...) are
/// kept verbatim in `profile` for export and tier checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: String,
    #[serde(alias = "companyName")]
    pub name: String,
    #[serde(default)]
    pub tier: Tier,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(flatten)]
    pub profile: serde_json::Map<String, serde_json::Value>,
}

impl Vendor {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, tier: Tier) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tier,
            locations: Vec::new(),
            profile: serde_json::Map::new(),
        }
    }

    #[must_use]
    pub fn with_locations(mut self, locations: Vec<Location>) -> Self {
        self.locations = locations;
        self
    }

    /// The location flagged as headquarters, if any.
    #[must_use]
    pub fn hq_location(&self) -> Option<&Location> {
        self.locations.iter().find(|l| l.is_hq())
    }
}

/// Older profiles stored a single `location` that was either free text or a
/// structured object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LegacyLocation {
    Text(String),
    Structured(Location),
}

/// Vendor shape as stored on disk, before legacy normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct VendorRecord {
    pub id: String,
    #[serde(alias = "companyName")]
    pub name: String,
    #[serde(default)]
    pub tier: Option<Tier>,
    #[serde(default)]
    pub locations: Option<Vec<Location>>,
    #[serde(default)]
    pub location: Option<LegacyLocation>,
    #[serde(flatten)]
    pub profile: serde_json::Map<String, serde_json::Value>,
}

impl VendorRecord {
    /// Fold the legacy `location` field into `locations`.
    ///
    /// A non-empty `locations` list always wins. Otherwise the legacy value
    /// becomes the sole location and is marked HQ.
    #[must_use]
    pub fn into_vendor(self) -> Vendor {
        let locations = match (self.locations, self.location) {
            (Some(list), _) if !list.is_empty() => list,
            (_, Some(LegacyLocation::Structured(loc))) => vec![Location {
                is_hq: Some(true),
                ..loc
            }],
            (_, Some(LegacyLocation::Text(text))) if !text.trim().is_empty() => {
                vec![Location {
                    address: Some(text),
                    is_hq: Some(true),
                    ..Location::default()
                }]
            }
            _ => Vec::new(),
        };

        Vendor {
            id: self.id,
            name: self.name,
            tier: self.tier.unwrap_or_default(),
            locations,
            profile: self.profile,
        }
    }
}
