use serde::{Deserialize, Serialize};

/// A monetary amount as returned by the storefront API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Decimal amount exactly as the API returns it, e.g. `"34.99"`.
    /// Kept as a string to avoid precision loss; formatting is the
    /// presentation layer's job.
    pub amount: String,
    /// ISO 4217 currency code (e.g., `"USD"`).
    pub currency_code: String,
}

/// Minimum and maximum variant prices for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min_variant_price: Money,
    pub max_variant_price: Money,
}

/// A product photo.
///
/// The alt text doubles as the linkage key for the secondary-image
/// convention: image `I` is the secondary shot of image `P` when
/// `I.alt_text == P.alt_text + "-secondary"`. There is no foreign key —
/// the relationship is recomputed by string equality on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    /// Opaque storefront image ID (a GID string).
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub alt_text: String,
    pub width: u32,
    pub height: u32,
}

/// One axis of variation for a variant, e.g. name=`"Color"`, value=`"Red"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOption {
    pub name: String,
    pub value: String,
}

/// A specific purchasable configuration of a [`Product`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVariant {
    /// Opaque storefront variant ID (a GID string).
    pub id: String,
    /// Display title, e.g. `"Red / Large"`.
    pub title: String,
    /// Ordered option name/value pairs describing this configuration.
    pub selected_options: Vec<SelectedOption>,
    /// The photo associated with this variant, if the store assigned one.
    #[serde(default)]
    pub image: Option<ProductImage>,
    pub available_for_sale: bool,
    pub price: Money,
}

impl ProductVariant {
    /// Returns the value of the selected option named `name`, if present.
    #[must_use]
    pub fn option_value(&self, name: &str) -> Option<&str> {
        self.selected_options
            .iter()
            .find(|o| o.name == name)
            .map(|o| o.value.as_str())
    }
}

/// A product as consumed by the homepage view, with its ordered image and
/// variant lists. Immutable for the lifetime of a page view; all derived
/// state (color options, swatch selection) is recomputed from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Opaque storefront product ID (a GID string).
    pub id: String,
    pub title: String,
    /// URL slug, e.g. `"classic-crew-tee"`.
    pub handle: String,
    pub vendor: String,
    pub price_range: PriceRange,
    /// Pre-sale comparison prices; `None` when the store set none.
    #[serde(default)]
    pub compare_at_price_range: Option<PriceRange>,
    /// Ordered images; index 0 is the default primary shot.
    pub images: Vec<ProductImage>,
    /// Ordered variants; index 0 is the storefront default.
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// Returns the default primary image (index 0), if the product has any.
    #[must_use]
    pub fn first_image(&self) -> Option<&ProductImage> {
        self.images.first()
    }

    /// Link target for this product, handed to the external router.
    #[must_use]
    pub fn url(&self) -> String {
        format!("/products/{}", self.handle)
    }

    /// Returns `true` if at least one variant is currently purchasable.
    #[must_use]
    pub fn has_available_variants(&self) -> bool {
        self.variants.iter().any(|v| v.available_for_sale)
    }

    /// Returns `true` when a compare-at price range exists with a non-empty
    /// minimum amount, i.e. the store is advertising a discount.
    #[must_use]
    pub fn is_on_sale(&self) -> bool {
        self.compare_at_price_range
            .as_ref()
            .is_some_and(|r| !r.min_variant_price.amount.is_empty())
    }
}
