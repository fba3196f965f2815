//! Nearby vendors that list at least one product in a given category.

use std::collections::HashSet;

use serde::Serialize;
use yachtdir_core::{Coordinates, Location, Product, Vendor};

use crate::eligibility::eligible_locations;
use crate::error::SearchError;
use crate::filter::{match_within, sort_by_distance, validate_search};
use crate::observer::{FilterStats, SearchObserver};

pub const DEFAULT_CATEGORY_RADIUS_KM: f64 = 500.0;
pub const DEFAULT_CATEGORY_MAX_RESULTS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySearch {
    pub user_location: Option<Coordinates>,
    pub category: String,
    /// Usually the vendor whose page is showing the recommendations.
    pub exclude_vendor_id: Option<String>,
    pub radius_km: f64,
    pub max_results: usize,
}

impl CategorySearch {
    #[must_use]
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            user_location: None,
            category: category.into(),
            exclude_vendor_id: None,
            radius_km: DEFAULT_CATEGORY_RADIUS_KM,
            max_results: DEFAULT_CATEGORY_MAX_RESULTS,
        }
    }

    #[must_use]
    pub fn near(mut self, origin: Coordinates) -> Self {
        self.user_location = Some(origin);
        self
    }

    #[must_use]
    pub fn excluding(mut self, vendor_id: impl Into<String>) -> Self {
        self.exclude_vendor_id = Some(vendor_id.into());
        self
    }

    #[must_use]
    pub fn within(mut self, radius_km: f64) -> Self {
        self.radius_km = radius_km;
        self
    }

    #[must_use]
    pub fn limit(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryMatch<'a> {
    pub vendor: &'a Vendor,
    pub distance: Option<f64>,
    pub matched_location: Option<&'a Location>,
    pub products_in_category: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategorySearchResult<'a> {
    pub vendors: Vec<CategoryMatch<'a>>,
    /// Set when the search could not run; `vendors` is then empty.
    #[serde(serialize_with = "serialize_error")]
    pub error: Option<SearchError>,
}

fn serialize_error<S>(error: &Option<SearchError>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match error {
        Some(e) => serializer.serialize_some(&e.to_string()),
        None => serializer.serialize_none(),
    }
}

impl CategorySearchResult<'_> {
    fn failed(error: SearchError) -> Self {
        Self {
            vendors: Vec::new(),
            error: Some(error),
        }
    }
}

/// Vendors owning a product in `search.category`, optionally restricted to
/// `search.radius_km` around the user and ranked nearest first.
///
/// Never fails outright: an invalid origin or radius is returned in
/// [`CategorySearchResult::error`] with an empty vendor list.
pub fn nearby_vendors_by_category<'a>(
    vendors: &'a [Vendor],
    products: &[Product],
    search: &CategorySearch,
    observer: &dyn SearchObserver,
) -> CategorySearchResult<'a> {
    let in_category: Vec<&Product> = products
        .iter()
        .filter(|p| p.category == search.category)
        .collect();

    let owner_ids: HashSet<&str> = in_category.iter().filter_map(|p| p.owner_id()).collect();
    if owner_ids.is_empty() {
        return CategorySearchResult {
            vendors: Vec::new(),
            error: None,
        };
    }

    let product_count = |vendor: &Vendor| {
        in_category
            .iter()
            .filter(|p| p.owner_id() == Some(vendor.id.as_str()))
            .count()
    };

    let candidates = vendors.iter().filter(|v| {
        owner_ids.contains(v.id.as_str())
            && search.exclude_vendor_id.as_deref() != Some(v.id.as_str())
    });

    let Some(origin) = search.user_location else {
        let vendors = candidates
            .take(search.max_results)
            .map(|vendor| CategoryMatch {
                vendor,
                distance: None,
                matched_location: None,
                products_in_category: product_count(vendor),
            })
            .collect();
        return CategorySearchResult {
            vendors,
            error: None,
        };
    };

    if let Err(e) = validate_search(origin, search.radius_km) {
        observer.search_failed(&e);
        return CategorySearchResult::failed(e);
    }

    let candidates: Vec<&Vendor> = candidates.collect();
    let mut matches: Vec<CategoryMatch<'a>> = candidates
        .iter()
        .copied()
        .filter_map(|vendor| {
            match_within(vendor, origin, search.radius_km, observer).map(|(location, distance)| {
                CategoryMatch {
                    vendor,
                    distance: Some(distance),
                    matched_location: Some(location),
                    products_in_category: product_count(vendor),
                }
            })
        })
        .collect();

    sort_by_distance(&mut matches, |m| m.distance.unwrap_or(f64::INFINITY));
    matches.truncate(search.max_results);

    observer.filter_completed(FilterStats {
        total: candidates.len(),
        with_coordinates: candidates
            .iter()
            .filter(|v| !eligible_locations(v).is_empty())
            .count(),
        matched: matches.len(),
    });

    CategorySearchResult {
        vendors: matches,
        error: None,
    }
}
