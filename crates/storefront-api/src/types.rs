//! Wire types for the storefront GraphQL API.
//!
//! ## Observed response shape
//!
//! Every response is a `{"data": ..., "errors": [...]}` envelope. On
//! success `errors` is absent; on failure `data` may be `null` alongside a
//! non-empty `errors` array, and partial failures can carry both.
//! [`GraphQlResponse`] models all three cases with `#[serde(default)]`.
//!
//! List fields come back as connections; this client requests the flat
//! `nodes` form rather than `edges { node }`.
//!
//! `altText` is `null` for images the merchant never labeled; we default it
//! to an empty string since the swatch logic compares alt text by equality
//! and a missing label simply never matches. `width`/`height` are nullable
//! for SVGs; defaulted to 0.

use serde::{Deserialize, Serialize};

/// POST body for a GraphQL request.
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: serde_json::Value,
}

/// Top-level envelope for all storefront API responses.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct GraphQlResponse<T> {
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

/// A single entry of the `errors` array.
#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Connection wrapper in its flat `nodes` form.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Connection<T> {
    #[serde(default)]
    pub nodes: Vec<T>,
}

/// `data` payload of the featured-collection query.
#[derive(Debug, Deserialize)]
pub struct FeaturedCollectionData {
    pub collections: Connection<CollectionNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionNode {
    pub id: String,
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub image: Option<ImageNode>,
}

/// `data` payload of the recommended-products query.
#[derive(Debug, Deserialize)]
pub struct RecommendedProductsData {
    pub products: Connection<ProductNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductNode {
    pub id: String,
    pub title: String,
    pub handle: String,
    pub vendor: String,
    pub price_range: PriceRangeNode,
    #[serde(default)]
    pub compare_at_price_range: Option<PriceRangeNode>,
    pub images: Connection<ImageNode>,
    pub variants: Connection<VariantNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRangeNode {
    pub min_variant_price: MoneyNode,
    pub max_variant_price: MoneyNode,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyNode {
    pub amount: String,
    pub currency_code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageNode {
    /// Absent in the featured-collection query, which does not select `id`.
    #[serde(default)]
    pub id: String,
    pub url: String,
    /// `null` when the merchant left the image unlabeled.
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantNode {
    pub id: String,
    pub title: String,
    pub available_for_sale: bool,
    pub price: MoneyNode,
    #[serde(default)]
    pub selected_options: Vec<SelectedOptionNode>,
    #[serde(default)]
    pub image: Option<ImageNode>,
}

#[derive(Debug, Deserialize)]
pub struct SelectedOptionNode {
    pub name: String,
    pub value: String,
}
