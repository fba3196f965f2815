//! Tier-gated access to vendor profile fields: validation, sanitization, and
//! spreadsheet export.

pub mod error;
pub mod export;
pub mod field_mapping;
pub mod sanitize;
pub mod tier_validation;

pub use error::ImportError;
pub use export::{
    export_cell, export_filename, export_vendors, import_row, import_value, ExportScope,
    ImportedRow, SheetExport,
};
pub use field_mapping::{
    exportable_fields_for_tier, field_counts, field_mapping, field_mapping_by_column,
    fields_for_tier, has_field_access, importable_fields_for_tier, locked_fields_for_tier,
    required_fields_for_tier, CellTransform, FieldAccessLevel, FieldDataType, FieldMapping,
    ValueBound, VENDOR_FIELD_MAPPINGS,
};
pub use sanitize::{sanitize_for_tier, sanitize_update, Actor, Sanitized};
pub use tier_validation::{
    accessible_fields, minimum_tier_for_field, tier_features, validate_field_access,
    validate_fields_access, validate_location_limit, validate_tier_change, LocationLimit,
    TierValidation,
};
