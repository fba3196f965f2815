use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownTier;

/// Vendor subscription level. Ordering follows [`Tier::rank`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    Free,
    Tier1,
    Tier2,
    Tier3,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Free, Tier::Tier1, Tier::Tier2, Tier::Tier3];

    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Tier::Free => 0,
            Tier::Tier1 => 1,
            Tier::Tier2 => 2,
            Tier::Tier3 => 3,
        }
    }

    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(Tier::Free),
            1 => Some(Tier::Tier1),
            2 => Some(Tier::Tier2),
            3 => Some(Tier::Tier3),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_at_least(self, minimum: Tier) -> bool {
        self.rank() >= minimum.rank()
    }

    /// The next tier up, or `None` at the top of the ladder.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_rank(self.rank() + 1)
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Tier::Free => "Free",
            Tier::Tier1 => "Professional",
            Tier::Tier2 => "Business",
            Tier::Tier3 => "Enterprise",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Tier::Free => "Basic profile with single location",
            Tier::Tier1 => "Enhanced profile with up to 3 locations",
            Tier::Tier2 => "Business profile with up to 10 locations and analytics",
            Tier::Tier3 => "Enterprise profile with unlimited locations and premium features",
        }
    }

    #[must_use]
    pub const fn max_locations(self) -> usize {
        match self {
            Tier::Free => 1,
            Tier::Tier1 => 3,
            Tier::Tier2 => 10,
            Tier::Tier3 => 999,
        }
    }

    #[must_use]
    pub const fn max_products(self) -> usize {
        match self {
            Tier::Free => 3,
            Tier::Tier1 => 10,
            Tier::Tier2 => 25,
            Tier::Tier3 => 999,
        }
    }

    /// Media gallery item limit.
    #[must_use]
    pub const fn max_media(self) -> usize {
        match self {
            Tier::Free => 5,
            Tier::Tier1 => 20,
            Tier::Tier2 => 50,
            Tier::Tier3 => 999,
        }
    }

    #[must_use]
    pub const fn can_add_location(self, current: usize) -> bool {
        current < self.max_locations()
    }

    #[must_use]
    pub const fn can_add_product(self, current: usize) -> bool {
        current < self.max_products()
    }

    #[must_use]
    pub const fn can_add_media(self, current: usize) -> bool {
        current < self.max_media()
    }

    #[must_use]
    pub const fn pricing(self) -> TierPricing {
        match self {
            Tier::Free => TierPricing {
                monthly: 0,
                yearly: 0,
            },
            Tier::Tier1 => TierPricing {
                monthly: 99,
                yearly: 990,
            },
            Tier::Tier2 => TierPricing {
                monthly: 299,
                yearly: 2990,
            },
            Tier::Tier3 => TierPricing {
                monthly: 999,
                yearly: 9990,
            },
        }
    }

    #[must_use]
    pub const fn can_access(self, feature: TierFeature) -> bool {
        self.is_at_least(feature.minimum_tier())
    }

    /// Every feature this tier unlocks, in declaration order.
    #[must_use]
    pub fn features(self) -> Vec<TierFeature> {
        TierFeature::ALL
            .iter()
            .copied()
            .filter(|f| self.can_access(*f))
            .collect()
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Free => write!(f, "free"),
            Tier::Tier1 => write!(f, "tier1"),
            Tier::Tier2 => write!(f, "tier2"),
            Tier::Tier3 => write!(f, "tier3"),
        }
    }
}

impl FromStr for Tier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "free" => Ok(Tier::Free),
            "tier1" => Ok(Tier::Tier1),
            "tier2" => Ok(Tier::Tier2),
            "tier3" => Ok(Tier::Tier3),
            other => Err(UnknownTier(other.to_string())),
        }
    }
}

/// Monthly and yearly list price in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierPricing {
    pub monthly: u32,
    pub yearly: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TierFeature {
    MultipleLocations,
    EnhancedProfile,
    MediaGallery,
    ProductManagement,
    AdvancedAnalytics,
    ApiAccess,
    CustomDomain,
    ExcelImport,
    PromotionPack,
    EditorialContent,
}

impl TierFeature {
    pub const ALL: [TierFeature; 10] = [
        TierFeature::MultipleLocations,
        TierFeature::EnhancedProfile,
        TierFeature::MediaGallery,
        TierFeature::ProductManagement,
        TierFeature::AdvancedAnalytics,
        TierFeature::ApiAccess,
        TierFeature::CustomDomain,
        TierFeature::ExcelImport,
        TierFeature::PromotionPack,
        TierFeature::EditorialContent,
    ];

    #[must_use]
    pub const fn minimum_tier(self) -> Tier {
        match self {
            TierFeature::MultipleLocations
            | TierFeature::EnhancedProfile
            | TierFeature::MediaGallery => Tier::Tier1,
            TierFeature::ProductManagement
            | TierFeature::AdvancedAnalytics
            | TierFeature::ApiAccess
            | TierFeature::CustomDomain
            | TierFeature::ExcelImport => Tier::Tier2,
            TierFeature::PromotionPack | TierFeature::EditorialContent => Tier::Tier3,
        }
    }
}

/// The tier a vendor must move to for `feature`, or `None` if already entitled.
#[must_use]
pub const fn upgrade_path(current: Tier, feature: TierFeature) -> Option<Tier> {
    if current.can_access(feature) {
        None
    } else {
        Some(feature.minimum_tier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_matches_declaration_order() {
        for pair in Tier::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].rank() + 1, pair[1].rank());
        }
    }

    #[test]
    fn from_rank_roundtrips_and_rejects_out_of_range() {
        for tier in Tier::ALL {
            assert_eq!(Tier::from_rank(tier.rank()), Some(tier));
        }
        assert_eq!(Tier::from_rank(4), None);
    }

    #[test]
    fn is_at_least_is_numeric() {
        assert!(Tier::Tier2.is_at_least(Tier::Tier1));
        assert!(Tier::Tier2.is_at_least(Tier::Tier2));
        assert!(!Tier::Tier1.is_at_least(Tier::Tier2));
        assert!(Tier::Free.is_at_least(Tier::Free));
    }

    #[test]
    fn next_stops_at_tier3() {
        assert_eq!(Tier::Free.next(), Some(Tier::Tier1));
        assert_eq!(Tier::Tier3.next(), None);
    }

    #[test]
    fn parse_and_display_agree() {
        for tier in Tier::ALL {
            assert_eq!(tier.to_string().parse::<Tier>().unwrap(), tier);
        }
        let err = "tier4".parse::<Tier>().unwrap_err();
        assert!(err.to_string().contains("tier4"));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Tier::Tier2).unwrap();
        assert_eq!(json, "\"tier2\"");
        let tier: Tier = serde_json::from_str("\"free\"").unwrap();
        assert_eq!(tier, Tier::Free);
    }

    #[test]
    fn location_limits_per_tier() {
        assert_eq!(Tier::Free.max_locations(), 1);
        assert_eq!(Tier::Tier1.max_locations(), 3);
        assert_eq!(Tier::Tier2.max_locations(), 10);
        assert!(Tier::Free.can_add_location(0));
        assert!(!Tier::Free.can_add_location(1));
        assert!(Tier::Tier3.can_add_product(500));
        assert!(!Tier::Tier1.can_add_media(20));
    }

    #[test]
    fn feature_access_follows_minimum_tier() {
        assert!(!Tier::Free.can_access(TierFeature::MultipleLocations));
        assert!(Tier::Tier1.can_access(TierFeature::MediaGallery));
        assert!(!Tier::Tier1.can_access(TierFeature::ProductManagement));
        assert!(Tier::Tier3.can_access(TierFeature::EditorialContent));
        assert!(Tier::Free.features().is_empty());
        assert_eq!(Tier::Tier3.features().len(), TierFeature::ALL.len());
    }

    #[test]
    fn upgrade_path_names_the_required_tier() {
        assert_eq!(
            upgrade_path(Tier::Tier1, TierFeature::ProductManagement),
            Some(Tier::Tier2)
        );
        assert_eq!(upgrade_path(Tier::Tier2, TierFeature::ProductManagement), None);
        assert_eq!(
            upgrade_path(Tier::Free, TierFeature::PromotionPack),
            Some(Tier::Tier3)
        );
    }

    #[test]
    fn display_names() {
        assert_eq!(Tier::Tier1.display_name(), "Professional");
        assert_eq!(Tier::Tier3.pricing().monthly, 999);
    }
}
