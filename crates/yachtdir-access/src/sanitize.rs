//! Strip profile fields a vendor's tier does not allow before an update is saved.

use serde::Serialize;
use serde_json::{Map, Value};
use yachtdir_core::Tier;

use crate::tier_validation::minimum_tier_for_field;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sanitized {
    pub payload: Map<String, Value>,
    /// Keys dropped from the payload, in payload order.
    pub removed: Vec<String>,
}

/// Who is submitting an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Admin,
    Vendor { tier: Tier },
}

/// A single location (the HQ) may be written at any tier; only a list of
/// several needs tier2.
fn locations_allowed(value: &Value, tier: Tier) -> bool {
    tier.is_at_least(Tier::Tier2) || value.as_array().is_none_or(|list| list.len() <= 1)
}

/// Remove every key whose minimum tier is above `tier`.
///
/// `locations` is judged by its length instead of the field matrix. Keys
/// outside the matrix are left alone; schema validation owns them. Running
/// the result through again removes nothing.
#[must_use]
pub fn sanitize_for_tier(payload: Map<String, Value>, tier: Tier) -> Sanitized {
    let mut removed = Vec::new();
    let payload: Map<String, Value> = payload
        .into_iter()
        .filter(|(key, value)| {
            let allowed = if key == "locations" {
                locations_allowed(value, tier)
            } else {
                minimum_tier_for_field(key).is_none_or(|min| tier.is_at_least(min))
            };
            if !allowed {
                removed.push(key.clone());
            }
            allowed
        })
        .collect();

    if !removed.is_empty() {
        tracing::debug!(
            tier = %tier,
            removed = ?removed,
            "dropped fields above vendor tier"
        );
    }

    Sanitized { payload, removed }
}

/// Admins write any field; vendors are limited to their tier.
#[must_use]
pub fn sanitize_update(payload: Map<String, Value>, actor: Actor) -> Sanitized {
    match actor {
        Actor::Admin => Sanitized {
            payload,
            removed: Vec::new(),
        },
        Actor::Vendor { tier } => sanitize_for_tier(payload, tier),
    }
}
