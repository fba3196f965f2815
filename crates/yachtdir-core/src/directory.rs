use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::DirectoryError;
use crate::products::Product;
use crate::vendors::{Vendor, VendorRecord};

#[derive(Debug, Deserialize)]
struct DirectoryFile {
    #[serde(default)]
    vendors: Vec<VendorRecord>,
    #[serde(default)]
    products: Vec<Product>,
}

/// Vendors and products materialized in memory. Read-only once loaded.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    pub vendors: Vec<Vendor>,
    pub products: Vec<Product>,
}

impl Directory {
    #[must_use]
    pub fn vendor(&self, id: &str) -> Option<&Vendor> {
        self.vendors.iter().find(|v| v.id == id)
    }

    pub fn products_for_vendor<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Product> {
        self.products.iter().filter(move |p| p.owner_id() == Some(id))
    }
}

/// Load, normalize, and validate a directory file.
///
/// The file is YAML; JSON documents parse as well.
///
/// # Errors
///
/// Returns `DirectoryError` if the file cannot be read, parsed, or fails validation.
pub fn load_directory(path: &Path) -> Result<Directory, DirectoryError> {
    let content = std::fs::read_to_string(path).map_err(|e| DirectoryError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_directory(&content)
}

/// Parse directory content already in memory.
///
/// # Errors
///
/// Returns `DirectoryError` if the content cannot be parsed or fails validation.
pub fn parse_directory(content: &str) -> Result<Directory, DirectoryError> {
    let file: DirectoryFile = serde_yaml::from_str(content)?;
    let directory = Directory {
        vendors: file
            .vendors
            .into_iter()
            .map(VendorRecord::into_vendor)
            .collect(),
        products: file.products,
    };
    validate_directory(&directory)?;
    Ok(directory)
}

fn validate_directory(directory: &Directory) -> Result<(), DirectoryError> {
    let mut seen_ids = HashSet::new();

    for vendor in &directory.vendors {
        if vendor.id.trim().is_empty() {
            return Err(DirectoryError::Validation(format!(
                "vendor '{}' has an empty id",
                vendor.name
            )));
        }

        if vendor.name.trim().is_empty() {
            return Err(DirectoryError::Validation(format!(
                "vendor '{}' has an empty name",
                vendor.id
            )));
        }

        if !seen_ids.insert(vendor.id.as_str()) {
            return Err(DirectoryError::Validation(format!(
                "duplicate vendor id: '{}'",
                vendor.id
            )));
        }
    }

    Ok(())
}
