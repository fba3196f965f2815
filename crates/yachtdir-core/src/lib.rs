pub mod app_config;
pub mod config;
pub mod directory;
pub mod error;
pub mod geo;
pub mod products;
pub mod tier;
pub mod vendors;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use directory::{load_directory, parse_directory, Directory};
pub use error::{ConfigError, CoordinateError, DirectoryError, UnknownTier};
pub use geo::{checked_distance, haversine_distance, Coordinates, DistanceUnit};
pub use products::Product;
pub use tier::{upgrade_path, Tier, TierFeature, TierPricing};
pub use vendors::{LegacyLocation, Location, Vendor, VendorRecord};
