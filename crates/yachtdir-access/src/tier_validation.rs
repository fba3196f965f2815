//! Which profile fields each tier may hold, and whether a tier change is safe.

use serde::Serialize;
use serde_json::{Map, Value};
use yachtdir_core::{Tier, TierFeature};

const FREE_FIELDS: &[&str] = &[
    "companyName",
    "slug",
    "description",
    "logo",
    "contactEmail",
    "contactPhone",
    "published",
    "featured",
    "partner",
];

const TIER1_FIELDS: &[&str] = &[
    "website",
    "linkedinUrl",
    "twitterUrl",
    "foundedYear",
    "certifications",
    "awards",
    "totalProjects",
    "employeeCount",
    "linkedinFollowers",
    "instagramFollowers",
    "clientSatisfactionScore",
    "repeatClientPercentage",
    "videoUrl",
    "videoThumbnail",
    "videoDuration",
    "videoTitle",
    "videoDescription",
    "caseStudies",
    "innovationHighlights",
    "teamMembers",
    "yachtProjects",
    "longDescription",
    "serviceAreas",
    "companyValues",
];

const TIER2_FIELDS: &[&str] = &[
    "locations",
    "featuredInCategory",
    "advancedAnalytics",
    "apiAccess",
    "customDomain",
];

const TIER3_FIELDS: &[&str] = &["promotionPack", "editorialContent"];

/// Fields introduced at exactly `tier` (not inherited ones).
const fn fields_introduced_at(tier: Tier) -> &'static [&'static str] {
    match tier {
        Tier::Free => FREE_FIELDS,
        Tier::Tier1 => TIER1_FIELDS,
        Tier::Tier2 => TIER2_FIELDS,
        Tier::Tier3 => TIER3_FIELDS,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TierValidation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub restricted_fields: Vec<String>,
}

impl TierValidation {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            restricted_fields: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationLimit {
    pub valid: bool,
    pub max_allowed: usize,
    pub current: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Lowest tier that may hold `field`, or `None` for fields outside the matrix.
#[must_use]
pub fn minimum_tier_for_field(field: &str) -> Option<Tier> {
    Tier::ALL
        .into_iter()
        .find(|t| fields_introduced_at(*t).contains(&field))
}

#[must_use]
pub fn validate_field_access(tier: Tier, field: &str) -> bool {
    minimum_tier_for_field(field).is_some_and(|min| tier.is_at_least(min))
}

/// Check a batch of field names; every inaccessible one is listed in a single
/// error message.
pub fn validate_fields_access<'a, I>(tier: Tier, fields: I) -> TierValidation
where
    I: IntoIterator<Item = &'a str>,
{
    let restricted: Vec<String> = fields
        .into_iter()
        .filter(|f| !validate_field_access(tier, f))
        .map(str::to_string)
        .collect();

    if restricted.is_empty() {
        return TierValidation {
            valid: true,
            ..TierValidation::default()
        };
    }

    TierValidation {
        valid: false,
        errors: vec![format!(
            "Fields {} are not accessible for {tier} tier",
            restricted.join(", ")
        )],
        restricted_fields: restricted,
    }
}

#[must_use]
pub fn validate_location_limit(tier: Tier, count: usize) -> LocationLimit {
    let max_allowed = tier.max_locations();
    let valid = count <= max_allowed;
    LocationLimit {
        valid,
        max_allowed,
        current: count,
        message: (!valid).then(|| {
            format!("Tier {tier} allows maximum {max_allowed} location(s), but {count} provided")
        }),
    }
}

/// Every field `tier` may hold, lower tiers' fields first.
#[must_use]
pub fn accessible_fields(tier: Tier) -> Vec<&'static str> {
    Tier::ALL
        .into_iter()
        .filter(|t| tier.is_at_least(*t))
        .flat_map(fields_introduced_at)
        .copied()
        .collect()
}

#[must_use]
pub fn tier_features(tier: Tier) -> Vec<TierFeature> {
    tier.features()
}

fn has_data(value: &Value) -> bool {
    match value {
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::String(s) => !s.is_empty(),
        Value::Null | Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Whether a vendor holding `vendor_data` can move from `current` to `new`.
///
/// Upgrades and lateral moves always pass. A downgrade fails for each field
/// the vendor would lose that still carries data, and when the location list
/// exceeds the new tier's limit.
#[must_use]
pub fn validate_tier_change(
    current: Tier,
    new: Tier,
    vendor_data: &Map<String, Value>,
) -> TierValidation {
    if new >= current {
        return TierValidation::from_errors(Vec::new());
    }

    let retained = accessible_fields(new);
    let mut errors: Vec<String> = accessible_fields(current)
        .into_iter()
        .filter(|f| !retained.contains(f))
        .filter(|f| vendor_data.get(*f).is_some_and(has_data))
        .map(|f| format!("Cannot downgrade: Vendor has data in {f} which requires {current}"))
        .collect();

    if let Some(Value::Array(locations)) = vendor_data.get("locations") {
        let limit = validate_location_limit(new, locations.len());
        if let Some(message) = limit.message {
            errors.push(message);
        }
    }

    TierValidation::from_errors(errors)
}
