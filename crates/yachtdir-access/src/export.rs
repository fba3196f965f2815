//! Tabular export and cell-level import of vendor profiles.
//!
//! Produces header and row data only; writing an actual workbook is left to
//! the caller.

use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, Utc};
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Number, Value};
use yachtdir_core::{Location, Tier, UnknownTier, Vendor};

use crate::error::ImportError;
use crate::field_mapping::{
    exportable_fields_for_tier, field_mapping_by_column, importable_fields_for_tier,
    CellTransform, FieldDataType, FieldMapping, ValueBound, VENDOR_FIELD_MAPPINGS,
};

// Whole numbers below this magnitude are stored as JSON integers.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^\s/?#]+[^\s]*$").expect("valid url regex")
});

/// Which columns an export may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportScope {
    Tier(Tier),
    /// Every exportable column, including admin-only ones.
    Admin,
}

impl ExportScope {
    #[must_use]
    pub fn fields(self) -> Vec<&'static FieldMapping> {
        match self {
            ExportScope::Tier(tier) => exportable_fields_for_tier(tier),
            ExportScope::Admin => VENDOR_FIELD_MAPPINGS.iter().filter(|f| f.exportable).collect(),
        }
    }

    /// The vendor tier, or `None` for the admin scope.
    #[must_use]
    pub const fn tier(self) -> Option<Tier> {
        match self {
            ExportScope::Tier(tier) => Some(tier),
            ExportScope::Admin => None,
        }
    }
}

/// `admin` or a tier name, matched exactly like [`Tier`]'s own parser.
impl FromStr for ExportScope {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "admin" => Ok(ExportScope::Admin),
            other => other.parse().map(ExportScope::Tier),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetExport {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// One header per column in `scope`, one row per vendor.
#[must_use]
pub fn export_vendors(vendors: &[Vendor], scope: ExportScope) -> SheetExport {
    let fields = scope.fields();
    SheetExport {
        headers: fields.iter().map(|f| f.excel_column.to_string()).collect(),
        rows: vendors
            .iter()
            .map(|vendor| fields.iter().map(|f| export_cell(vendor, f)).collect())
            .collect(),
    }
}

fn hq_or_first(vendor: &Vendor) -> Option<&Location> {
    vendor.hq_location().or_else(|| vendor.locations.first())
}

/// Cell text for `mapping` on `vendor`; empty when the vendor has no value.
#[must_use]
pub fn export_cell(vendor: &Vendor, mapping: &FieldMapping) -> String {
    let location_text = |pick: fn(&Location) -> Option<&String>| {
        hq_or_first(vendor)
            .and_then(pick)
            .cloned()
            .unwrap_or_default()
    };

    match mapping.field_name {
        "companyName" => vendor.name.clone(),
        "tier" => vendor.tier.to_string(),
        "hqAddress" => location_text(|l| l.address.as_ref()),
        "hqCity" => location_text(|l| l.city.as_ref()),
        "hqCountry" => location_text(|l| l.country.as_ref()),
        field => vendor
            .profile
            .get(field)
            .map(|value| render(mapping, value))
            .unwrap_or_default(),
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn render(mapping: &FieldMapping, value: &Value) -> String {
    if value.is_null() {
        return String::new();
    }
    match mapping.transform {
        Some(CellTransform::KeyedList(key)) => value
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.get(key).and_then(Value::as_str))
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default(),
        Some(CellTransform::YesNo) => String::from(if truthy(value) { "Yes" } else { "No" }),
        None => match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
    }
}

fn check_length(mapping: &FieldMapping, value: &str) -> Result<(), ImportError> {
    let actual = value.chars().count();
    match mapping.max_length {
        Some(max) if actual > max => Err(ImportError::TooLong {
            field: mapping.field_name.to_string(),
            max,
            actual,
        }),
        _ => Ok(()),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn parse_number(mapping: &FieldMapping, raw: &str) -> Result<Value, ImportError> {
    let field = || mapping.field_name.to_string();
    let n: f64 = raw
        .parse()
        .ok()
        .filter(|n: &f64| n.is_finite())
        .ok_or_else(|| ImportError::InvalidNumber {
            field: field(),
            value: raw.to_string(),
        })?;

    if let Some(min) = mapping.min_value.filter(|min| n < *min) {
        return Err(ImportError::BelowMinimum { field: field(), min });
    }
    let max = match mapping.max_value {
        Some(ValueBound::Fixed(max)) => Some(max),
        Some(ValueBound::CurrentYear) => Some(f64::from(Utc::now().year())),
        None => None,
    };
    if let Some(max) = max.filter(|max| n > *max) {
        return Err(ImportError::AboveMaximum { field: field(), max });
    }

    if n.fract() == 0.0 && n.abs() < MAX_EXACT_INTEGER {
        Ok(Value::from(n as i64))
    } else {
        Number::from_f64(n)
            .map(Value::Number)
            .ok_or_else(|| ImportError::InvalidNumber {
                field: field(),
                value: raw.to_string(),
            })
    }
}

fn parse_boolean(mapping: &FieldMapping, raw: &str) -> Result<Value, ImportError> {
    match raw.to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "1" => Ok(Value::Bool(true)),
        "no" | "n" | "false" | "0" => Ok(Value::Bool(false)),
        _ => Err(ImportError::InvalidBoolean {
            field: mapping.field_name.to_string(),
            value: raw.to_string(),
        }),
    }
}

fn split_list(mapping: &FieldMapping, raw: &str) -> Value {
    let parts = raw.split(',').map(str::trim).filter(|s| !s.is_empty());
    match mapping.transform {
        Some(CellTransform::KeyedList(key)) => Value::Array(
            parts
                .map(|part| {
                    let mut item = Map::new();
                    item.insert(key.to_string(), Value::String(part.to_string()));
                    Value::Object(item)
                })
                .collect(),
        ),
        _ => Value::Array(parts.map(|p| Value::String(p.to_string())).collect()),
    }
}

/// Parse one sheet cell into the value stored on the profile.
///
/// A blank cell yields `Ok(None)` unless the column is required.
///
/// # Errors
///
/// Returns `ImportError` when the column is export-only or the cell fails the
/// column's type, length, or range rules.
pub fn import_value(mapping: &FieldMapping, raw: &str) -> Result<Option<Value>, ImportError> {
    let field = || mapping.field_name.to_string();
    if !mapping.importable {
        return Err(ImportError::NotImportable { field: field() });
    }

    let raw = raw.trim();
    if raw.is_empty() {
        return if mapping.required {
            Err(ImportError::MissingRequired { field: field() })
        } else {
            Ok(None)
        };
    }

    let value = match mapping.data_type {
        FieldDataType::String | FieldDataType::Phone => {
            check_length(mapping, raw)?;
            Value::String(raw.to_string())
        }
        FieldDataType::Email => {
            check_length(mapping, raw)?;
            if !EMAIL_RE.is_match(raw) {
                return Err(ImportError::InvalidEmail { field: field() });
            }
            Value::String(raw.to_string())
        }
        FieldDataType::Url => {
            if !URL_RE.is_match(raw) {
                return Err(ImportError::InvalidUrl { field: field() });
            }
            Value::String(raw.to_string())
        }
        FieldDataType::Number | FieldDataType::Year => parse_number(mapping, raw)?,
        FieldDataType::Boolean => parse_boolean(mapping, raw)?,
        FieldDataType::Date => {
            let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                ImportError::InvalidDate {
                    field: field(),
                    value: raw.to_string(),
                }
            })?;
            Value::String(date.format("%Y-%m-%d").to_string())
        }
        FieldDataType::ArrayString => split_list(mapping, raw),
        FieldDataType::Json => {
            serde_json::from_str(raw).map_err(|e| ImportError::InvalidJson {
                field: field(),
                reason: e.to_string(),
            })?
        }
    };

    Ok(Some(value))
}

/// Result of importing one spreadsheet row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportedRow {
    pub data: Map<String, Value>,
    pub errors: Vec<String>,
    /// Headers that are unknown, export-only, or above the vendor's tier.
    pub ignored_columns: Vec<String>,
}

/// Import a row given its headers, keeping only columns open to `tier`.
///
/// A row shorter than `headers` reads as blank cells. Required columns
/// missing from `headers` are reported as errors.
#[must_use]
pub fn import_row(headers: &[&str], cells: &[&str], tier: Tier) -> ImportedRow {
    let mut row = ImportedRow::default();

    for (i, header) in headers.iter().enumerate() {
        let cell = cells.get(i).copied().unwrap_or("");
        let Some(mapping) = field_mapping_by_column(header)
            .filter(|m| m.importable && m.access_level.is_open_to(tier))
        else {
            row.ignored_columns.push((*header).to_string());
            continue;
        };
        match import_value(mapping, cell) {
            Ok(Some(value)) => {
                row.data.insert(mapping.field_name.to_string(), value);
            }
            Ok(None) => {}
            Err(e) => row.errors.push(e.to_string()),
        }
    }

    for required in importable_fields_for_tier(tier).into_iter().filter(|f| f.required) {
        if !headers.contains(&required.excel_column) {
            row.errors.push(
                ImportError::MissingRequired {
                    field: required.field_name.to_string(),
                }
                .to_string(),
            );
        }
    }

    row
}

/// Download name such as `Riviera_Marine_vendor_data_tier2_2026-10-14.xlsx`.
///
/// Every character outside `[A-Za-z0-9]` in the vendor name becomes `_`.
#[must_use]
pub fn export_filename(vendor_name: Option<&str>, tier: Option<Tier>, date: NaiveDate) -> String {
    let name = vendor_name
        .map(|n| {
            let safe: String = n
                .chars()
                .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
                .collect();
            format!("{safe}_")
        })
        .unwrap_or_default();
    let tier_suffix = tier.map(|t| format!("_tier{}", t.rank())).unwrap_or_default();
    format!(
        "{name}vendor_data{tier_suffix}_{}.xlsx",
        date.format("%Y-%m-%d")
    )
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
