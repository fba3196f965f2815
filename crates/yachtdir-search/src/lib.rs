//! Tier-aware proximity search over the vendor directory.

pub mod category;
pub mod eligibility;
pub mod error;
pub mod filter;
pub mod observer;
pub mod validation;

pub use category::{nearby_vendors_by_category, CategoryMatch, CategorySearch, CategorySearchResult};
pub use eligibility::{eligible_locations, filter_locations_by_tier};
pub use error::SearchError;
pub use filter::{
    filter_by_distance, find_vendors_within_radius, is_vendor_nearby, nearby_vendors,
    nearest_location, LocationFilterResult, NearbyCheck, VendorMatch,
};
pub use observer::{FilterStats, NoopObserver, SearchObserver, TracingObserver};
pub use validation::{
    auto_designate_hq_location, check_tier_location_access, validate_vendor_locations,
    LocationValidation, TierLocationAccess,
};
