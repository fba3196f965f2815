use serde::{Deserialize, Serialize};

/// A catalog product listed by a vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<String>,
    /// Older records reference the owning vendor as a partner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<String>,
    pub category: String,
}

impl Product {
    #[must_use]
    pub fn new(vendor_id: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: None,
            name: None,
            vendor_id: Some(vendor_id.into()),
            partner_id: None,
            category: category.into(),
        }
    }

    /// Owning vendor id: `vendor_id`, falling back to `partner_id`. Empty
    /// strings count as absent.
    #[must_use]
    pub fn owner_id(&self) -> Option<&str> {
        self.vendor_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.partner_id.as_deref().filter(|s| !s.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_id_prefers_vendor_id() {
        let product = Product {
            partner_id: Some("p-1".to_string()),
            ..Product::new("v-1", "Navigation Systems")
        };
        assert_eq!(product.owner_id(), Some("v-1"));
    }

    #[test]
    fn owner_id_falls_back_to_partner_id() {
        let product = Product {
            id: None,
            name: None,
            vendor_id: Some(String::new()),
            partner_id: Some("p-1".to_string()),
            category: "Navigation Systems".to_string(),
        };
        assert_eq!(product.owner_id(), Some("p-1"));
    }

    #[test]
    fn owner_id_none_when_unowned() {
        let product = Product {
            id: None,
            name: None,
            vendor_id: None,
            partner_id: None,
            category: "Lighting".to_string(),
        };
        assert!(product.owner_id().is_none());
    }

    #[test]
    fn deserializes_camel_case_ids() {
        let product: Product =
            serde_json::from_str(r#"{"partnerId":"p-9","category":"Audio Visual"}"#).unwrap();
        assert_eq!(product.owner_id(), Some("p-9"));
        assert_eq!(product.category, "Audio Visual");
    }
}
