use std::path::PathBuf;

use yachtdir_core::{load_directory, Coordinates, Directory};
use yachtdir_search::{
    filter_by_distance, nearby_vendors_by_category, validate_vendor_locations, CategorySearch,
    NoopObserver,
};

const NICE: Coordinates = Coordinates::new(43.7102, 7.2620);

fn fixture() -> Directory {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../config/directory.yaml");
    load_directory(&path).expect("directory fixture should load")
}

#[test]
fn riviera_vendors_near_nice() {
    let directory = fixture();
    let result = filter_by_distance(&directory.vendors, Some(NICE), 100.0, &NoopObserver)
        .expect("valid search");

    let ids: Vec<&str> = result.vendors.iter().map(|m| m.vendor.id.as_str()).collect();
    assert_eq!(ids, vec!["riviera-marine-electronics", "azur-yacht-lighting"]);
    assert_eq!(
        result.vendors_with_coordinates + result.vendors_without_coordinates,
        directory.vendors.len()
    );
    assert_eq!(result.vendors_without_coordinates, 1, "legacy text location has no coordinates");
}

#[test]
fn tier3_branch_is_searchable() {
    let directory = fixture();
    let result = filter_by_distance(&directory.vendors, Some(NICE), 200.0, &NoopObserver)
        .expect("valid search");
    let gulfstream = result
        .vendors
        .iter()
        .find(|m| m.vendor.id == "gulfstream-nav")
        .expect("Genoa branch within 200 km");
    assert_eq!(
        gulfstream.matched_location.and_then(|l| l.city.as_deref()),
        Some("Genoa")
    );
}

#[test]
fn navigation_vendors_by_category() {
    let directory = fixture();
    let search = CategorySearch::new("Navigation Systems").near(NICE);
    let result =
        nearby_vendors_by_category(&directory.vendors, &directory.products, &search, &NoopObserver);

    assert!(result.error.is_none());
    let found: Vec<(&str, usize)> = result
        .vendors
        .iter()
        .map(|m| (m.vendor.id.as_str(), m.products_in_category))
        .collect();
    assert_eq!(
        found,
        vec![("riviera-marine-electronics", 1), ("gulfstream-nav", 2)]
    );
}

#[test]
fn partner_products_count_toward_category() {
    let directory = fixture();
    let result = nearby_vendors_by_category(
        &directory.vendors,
        &directory.products,
        &CategorySearch::new("Audio Visual"),
        &NoopObserver,
    );
    assert_eq!(result.vendors.len(), 1);
    assert_eq!(result.vendors[0].vendor.id, "solent-av-systems");
}

#[test]
fn fixture_locations_are_well_formed() {
    let directory = fixture();
    for vendor in &directory.vendors {
        let validation = validate_vendor_locations(&vendor.locations);
        assert!(validation.valid, "{}: {:?}", vendor.id, validation.errors);
    }
}
