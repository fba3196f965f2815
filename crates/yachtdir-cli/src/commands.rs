//! Subcommand handlers. Each prints one pretty-printed JSON document to stdout.

use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use serde_json::{Map, Value};
use yachtdir_access::{
    export_filename, export_vendors, sanitize_update, validate_location_limit, Actor,
    ExportScope, LocationLimit,
};
use yachtdir_core::{Coordinates, Directory, Tier};
use yachtdir_search::{
    check_tier_location_access, filter_by_distance, nearby_vendors_by_category,
    validate_vendor_locations, CategorySearch, LocationValidation, TierLocationAccess,
    TracingObserver,
};

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn load(path: &Path) -> anyhow::Result<Directory> {
    let directory = yachtdir_core::load_directory(path)?;
    tracing::debug!(
        path = %path.display(),
        vendors = directory.vendors.len(),
        products = directory.products.len(),
        "directory loaded"
    );
    Ok(directory)
}

pub(crate) fn run_nearby(
    directory: &Directory,
    lat: f64,
    lon: f64,
    radius_km: f64,
) -> anyhow::Result<()> {
    let result = filter_by_distance(
        &directory.vendors,
        Some(Coordinates::new(lat, lon)),
        radius_km,
        &TracingObserver,
    )?;
    print_json(&result)
}

pub(crate) fn run_category(directory: &Directory, search: &CategorySearch) -> anyhow::Result<()> {
    let result = nearby_vendors_by_category(
        &directory.vendors,
        &directory.products,
        search,
        &TracingObserver,
    );
    if let Some(e) = result.error {
        return Err(e.into());
    }
    print_json(&result.vendors)
}

#[derive(Debug, Serialize)]
struct VendorLocationReport<'a> {
    vendor_id: &'a str,
    tier: Tier,
    locations: LocationValidation,
    tier_access: TierLocationAccess,
    limit: LocationLimit,
}

impl VendorLocationReport<'_> {
    fn is_clean(&self) -> bool {
        self.locations.valid && self.tier_access.allowed && self.limit.valid
    }
}

/// Audit every vendor; only vendors with at least one problem are printed.
pub(crate) fn run_validate(directory: &Directory) -> anyhow::Result<()> {
    let reports: Vec<VendorLocationReport<'_>> = directory
        .vendors
        .iter()
        .map(|vendor| VendorLocationReport {
            vendor_id: &vendor.id,
            tier: vendor.tier,
            locations: validate_vendor_locations(&vendor.locations),
            tier_access: check_tier_location_access(vendor.tier, &vendor.locations),
            limit: validate_location_limit(vendor.tier, vendor.locations.len()),
        })
        .filter(|report| !report.is_clean())
        .collect();

    tracing::info!(
        checked = directory.vendors.len(),
        with_problems = reports.len(),
        "location audit finished"
    );
    print_json(&reports)
}

#[derive(Debug, Serialize)]
struct SheetOutput {
    filename: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

pub(crate) fn run_export(directory: &Directory, tier: &str) -> anyhow::Result<()> {
    let scope: ExportScope = tier.parse()?;

    let sheet = export_vendors(&directory.vendors, scope);
    print_json(&SheetOutput {
        filename: export_filename(None, scope.tier(), chrono::Utc::now().date_naive()),
        headers: sheet.headers,
        rows: sheet.rows,
    })
}

pub(crate) fn run_sanitize(tier: &str, file: &Path) -> anyhow::Result<()> {
    let tier: Tier = tier.parse()?;
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let payload: Map<String, Value> = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON object", file.display()))?;

    print_json(&sanitize_update(payload, Actor::Vendor { tier }))
}
