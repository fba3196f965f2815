use yachtdir_core::{Location, Tier, Vendor};

/// Locations a tier may expose, ignoring coordinates.
///
/// Free and tier1 vendors show only their HQ; tier2 and up show everything.
#[must_use]
pub fn filter_locations_by_tier(locations: &[Location], tier: Tier) -> Vec<&Location> {
    let all = tier.is_at_least(Tier::Tier2);
    locations.iter().filter(|l| all || l.is_hq()).collect()
}

/// Locations usable in distance search: tier-visible and carrying finite
/// coordinates. Input order is preserved.
#[must_use]
pub fn eligible_locations(vendor: &Vendor) -> Vec<&Location> {
    filter_locations_by_tier(&vendor.locations, vendor.tier)
        .into_iter()
        .filter(|l| l.coordinates().is_some())
        .collect()
}
