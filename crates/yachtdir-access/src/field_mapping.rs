//! Spreadsheet column definitions for vendor profile fields.

use std::collections::BTreeMap;

use serde::Serialize;
use yachtdir_core::Tier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FieldAccessLevel {
    Free,
    Tier1,
    Tier2,
    Tier3,
    /// Editable only through the CMS; never offered for vendor import.
    Admin,
}

impl FieldAccessLevel {
    /// Minimum vendor tier, or `None` for admin-only fields.
    #[must_use]
    pub const fn required_tier(self) -> Option<Tier> {
        match self {
            FieldAccessLevel::Free => Some(Tier::Free),
            FieldAccessLevel::Tier1 => Some(Tier::Tier1),
            FieldAccessLevel::Tier2 => Some(Tier::Tier2),
            FieldAccessLevel::Tier3 => Some(Tier::Tier3),
            FieldAccessLevel::Admin => None,
        }
    }

    #[must_use]
    pub fn is_open_to(self, tier: Tier) -> bool {
        self.required_tier().is_some_and(|min| tier.is_at_least(min))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldDataType {
    String,
    Number,
    Email,
    Url,
    Phone,
    Boolean,
    Date,
    Year,
    /// Comma-separated on the sheet.
    ArrayString,
    Json,
}

/// Upper bound for numeric cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueBound {
    Fixed(f64),
    /// The calendar year at the time of import.
    CurrentYear,
}

/// Conversion between the stored value and the sheet cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CellTransform {
    /// List of single-key objects, e.g. `[{ "area": "Caribbean" }]`, shown
    /// as `"Caribbean, Mediterranean"`.
    KeyedList(&'static str),
    YesNo,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMapping {
    pub field_name: &'static str,
    pub excel_column: &'static str,
    pub access_level: FieldAccessLevel,
    pub data_type: FieldDataType,
    pub required: bool,
    pub max_length: Option<usize>,
    pub min_value: Option<f64>,
    pub max_value: Option<ValueBound>,
    pub exportable: bool,
    pub importable: bool,
    pub transform: Option<CellTransform>,
    pub description: &'static str,
    pub example: Option<&'static str>,
}

impl FieldMapping {
    const fn new(
        field_name: &'static str,
        excel_column: &'static str,
        access_level: FieldAccessLevel,
        data_type: FieldDataType,
        description: &'static str,
    ) -> Self {
        Self {
            field_name,
            excel_column,
            access_level,
            data_type,
            required: false,
            max_length: None,
            min_value: None,
            max_value: None,
            exportable: true,
            importable: true,
            transform: None,
            description,
            example: None,
        }
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    const fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    const fn range(mut self, min: f64, max: Option<ValueBound>) -> Self {
        self.min_value = Some(min);
        self.max_value = max;
        self
    }

    /// Uploaded through the dashboard, so exported but never imported.
    const fn export_only(mut self) -> Self {
        self.importable = false;
        self
    }

    const fn transform(mut self, transform: CellTransform) -> Self {
        self.transform = Some(transform);
        self
    }

    const fn example(mut self, example: &'static str) -> Self {
        self.example = Some(example);
        self
    }
}

use FieldAccessLevel as Level;
use FieldDataType as Kind;

/// Every column the vendor sheet knows about, in sheet order.
///
/// Structured content such as case studies, team members, and the full
/// location list is edited in the dashboard and has no column here.
pub static VENDOR_FIELD_MAPPINGS: &[FieldMapping] = &[
    FieldMapping::new(
        "companyName",
        "Company Name",
        Level::Free,
        Kind::String,
        "Official company name",
    )
    .required()
    .max_length(255)
    .example("Acme Marine Technologies"),
    FieldMapping::new(
        "description",
        "Short Description",
        Level::Free,
        Kind::String,
        "Brief company description (max 300 chars)",
    )
    .required()
    .max_length(300)
    .example("Leading provider of marine navigation systems for superyachts"),
    FieldMapping::new(
        "contactEmail",
        "Contact Email",
        Level::Free,
        Kind::Email,
        "Primary contact email address",
    )
    .required()
    .example("contact@acme-marine.com"),
    FieldMapping::new(
        "contactPhone",
        "Contact Phone",
        Level::Free,
        Kind::Phone,
        "Primary contact phone number",
    )
    .example("+1-555-123-4567"),
    FieldMapping::new(
        "logo",
        "Logo URL",
        Level::Free,
        Kind::Url,
        "Company logo URL (file upload via dashboard)",
    )
    .export_only()
    .example("https://example.com/logos/acme.png"),
    FieldMapping::new(
        "website",
        "Website URL",
        Level::Tier1,
        Kind::Url,
        "Company website URL",
    )
    .example("https://www.acme-marine.com"),
    FieldMapping::new(
        "linkedinUrl",
        "LinkedIn URL",
        Level::Tier1,
        Kind::Url,
        "LinkedIn company page URL",
    )
    .example("https://linkedin.com/company/acme-marine"),
    FieldMapping::new(
        "twitterUrl",
        "Twitter/X URL",
        Level::Tier1,
        Kind::Url,
        "Twitter/X profile URL",
    )
    .example("https://twitter.com/acme_marine"),
    FieldMapping::new(
        "foundedYear",
        "Founded Year",
        Level::Tier1,
        Kind::Year,
        "Year company was founded",
    )
    .range(1800.0, Some(ValueBound::CurrentYear))
    .example("1995"),
    FieldMapping::new(
        "employeeCount",
        "Employee Count",
        Level::Tier1,
        Kind::Number,
        "Total number of employees",
    )
    .range(0.0, None)
    .example("125"),
    FieldMapping::new(
        "totalProjects",
        "Total Projects Completed",
        Level::Tier1,
        Kind::Number,
        "Total number of projects completed",
    )
    .range(0.0, None)
    .example("450"),
    FieldMapping::new(
        "videoUrl",
        "Introduction Video URL",
        Level::Tier1,
        Kind::Url,
        "Company introduction video URL (YouTube, Vimeo, etc.)",
    )
    .example("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
    FieldMapping::new(
        "videoTitle",
        "Video Title",
        Level::Tier1,
        Kind::String,
        "Title for introduction video",
    )
    .max_length(100)
    .example("Welcome to Acme Marine Technologies"),
    FieldMapping::new(
        "videoThumbnail",
        "Video Thumbnail URL",
        Level::Tier1,
        Kind::Url,
        "Video thumbnail image URL (file upload via dashboard)",
    )
    .export_only()
    .example("https://example.com/thumbnails/video-thumb.jpg"),
    FieldMapping::new(
        "yearsInBusiness",
        "Years in Business",
        Level::Tier1,
        Kind::Number,
        "Number of years in business",
    )
    .range(0.0, None)
    .example("25"),
    FieldMapping::new(
        "hqAddress",
        "HQ Address",
        Level::Tier1,
        Kind::String,
        "Headquarters full address",
    )
    .max_length(500)
    .example("123 Harbor View Drive, Fort Lauderdale, FL 33316"),
    FieldMapping::new(
        "hqCity",
        "HQ City",
        Level::Tier1,
        Kind::String,
        "Headquarters city",
    )
    .max_length(255)
    .example("Fort Lauderdale"),
    FieldMapping::new(
        "hqCountry",
        "HQ Country",
        Level::Tier1,
        Kind::String,
        "Headquarters country",
    )
    .max_length(255)
    .example("United States"),
    FieldMapping::new(
        "longDescription",
        "Detailed Description",
        Level::Tier1,
        Kind::String,
        "Detailed company description (max 2000 chars)",
    )
    .max_length(2000),
    FieldMapping::new(
        "linkedinFollowers",
        "LinkedIn Followers",
        Level::Tier1,
        Kind::Number,
        "Number of LinkedIn followers",
    )
    .range(0.0, None)
    .example("15000"),
    FieldMapping::new(
        "instagramFollowers",
        "Instagram Followers",
        Level::Tier1,
        Kind::Number,
        "Number of Instagram followers",
    )
    .range(0.0, None)
    .example("8500"),
    FieldMapping::new(
        "clientSatisfactionScore",
        "Client Satisfaction Score",
        Level::Tier1,
        Kind::Number,
        "Client satisfaction score (0-10)",
    )
    .range(0.0, Some(ValueBound::Fixed(10.0)))
    .example("9"),
    FieldMapping::new(
        "repeatClientPercentage",
        "Repeat Client Percentage",
        Level::Tier1,
        Kind::Number,
        "Percentage of repeat clients (0-100)",
    )
    .range(0.0, Some(ValueBound::Fixed(100.0)))
    .example("78"),
    FieldMapping::new(
        "videoDescription",
        "Video Description",
        Level::Tier1,
        Kind::String,
        "Description for introduction video",
    )
    .max_length(500),
    FieldMapping::new(
        "serviceAreas",
        "Service Areas",
        Level::Tier1,
        Kind::ArrayString,
        "Comma-separated list of service areas/regions",
    )
    .transform(CellTransform::KeyedList("area"))
    .example("Mediterranean, Caribbean, Pacific Northwest"),
    FieldMapping::new(
        "companyValues",
        "Company Values",
        Level::Tier1,
        Kind::ArrayString,
        "Comma-separated list of company values/principles",
    )
    .transform(CellTransform::KeyedList("value"))
    .example("Quality, Innovation, Integrity, Sustainability"),
    FieldMapping::new(
        "featured",
        "Featured Vendor",
        Level::Admin,
        Kind::Boolean,
        "Whether vendor is featured (admin only)",
    )
    .export_only()
    .transform(CellTransform::YesNo),
    FieldMapping::new(
        "partner",
        "Strategic Partner",
        Level::Admin,
        Kind::Boolean,
        "Whether vendor is a strategic partner (admin only)",
    )
    .export_only()
    .transform(CellTransform::YesNo),
    FieldMapping::new(
        "tier",
        "Subscription Tier",
        Level::Admin,
        Kind::String,
        "Vendor subscription tier (admin only)",
    )
    .export_only(),
];

/// Columns open to `tier`, in sheet order. Admin columns are never included.
#[must_use]
pub fn fields_for_tier(tier: Tier) -> Vec<&'static FieldMapping> {
    VENDOR_FIELD_MAPPINGS
        .iter()
        .filter(|f| f.access_level.is_open_to(tier))
        .collect()
}

#[must_use]
pub fn exportable_fields_for_tier(tier: Tier) -> Vec<&'static FieldMapping> {
    fields_for_tier(tier).into_iter().filter(|f| f.exportable).collect()
}

#[must_use]
pub fn importable_fields_for_tier(tier: Tier) -> Vec<&'static FieldMapping> {
    fields_for_tier(tier).into_iter().filter(|f| f.importable).collect()
}

#[must_use]
pub fn required_fields_for_tier(tier: Tier) -> Vec<&'static FieldMapping> {
    fields_for_tier(tier).into_iter().filter(|f| f.required).collect()
}

#[must_use]
pub fn field_mapping(field_name: &str) -> Option<&'static FieldMapping> {
    VENDOR_FIELD_MAPPINGS.iter().find(|f| f.field_name == field_name)
}

#[must_use]
pub fn field_mapping_by_column(column: &str) -> Option<&'static FieldMapping> {
    VENDOR_FIELD_MAPPINGS.iter().find(|f| f.excel_column == column)
}

/// `false` for unknown fields and for admin-only fields.
#[must_use]
pub fn has_field_access(tier: Tier, field_name: &str) -> bool {
    field_mapping(field_name).is_some_and(|f| f.access_level.is_open_to(tier))
}

/// Columns a higher tier would unlock; drives upgrade prompts.
#[must_use]
pub fn locked_fields_for_tier(tier: Tier) -> Vec<&'static FieldMapping> {
    VENDOR_FIELD_MAPPINGS
        .iter()
        .filter(|f| f.access_level != FieldAccessLevel::Admin && !f.access_level.is_open_to(tier))
        .collect()
}

/// Number of columns per access level. Levels with no columns are omitted.
#[must_use]
pub fn field_counts() -> BTreeMap<FieldAccessLevel, usize> {
    let mut counts = BTreeMap::new();
    for field in VENDOR_FIELD_MAPPINGS {
        *counts.entry(field.access_level).or_insert(0) += 1;
    }
    counts
}
