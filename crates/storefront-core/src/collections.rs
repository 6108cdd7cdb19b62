use serde::{Deserialize, Serialize};

/// Hero image for a [`Collection`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionImage {
    pub url: String,
    #[serde(default)]
    pub alt_text: String,
    pub width: u32,
    pub height: u32,
}

/// A curated grouping of products, identified by a URL-friendly handle.
///
/// The homepage shows the single most recently updated collection as its
/// featured banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Opaque storefront collection ID (a GID string).
    pub id: String,
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub image: Option<CollectionImage>,
}

impl Collection {
    /// Link target for this collection, handed to the external router.
    #[must_use]
    pub fn url(&self) -> String {
        format!("/collections/{}", self.handle)
    }
}
