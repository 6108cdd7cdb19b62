pub mod app_config;
pub mod collections;
pub mod config;
pub mod products;
pub mod swatch;

pub use app_config::AppConfig;
pub use collections::{Collection, CollectionImage};
pub use config::{load_app_config, load_app_config_from_env};
pub use products::{Money, PriceRange, Product, ProductImage, ProductVariant, SelectedOption};
pub use swatch::{color_options, secondary_image, ColorOption, SwatchState};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A product reached the swatch selector with an empty image list.
    /// The storefront query caps images at 20 but never filters them out,
    /// so this indicates malformed catalog data upstream.
    #[error("product {handle} has no images")]
    MissingImages { handle: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
