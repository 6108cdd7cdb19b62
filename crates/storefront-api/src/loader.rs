//! Two-phase homepage data loading.
//!
//! The featured collection is critical: the homepage is not ready until it
//! resolves, and a failure there propagates to the caller. The recommended
//! products are deferred: the fetch is spawned before the critical await so
//! the two run concurrently, but the homepage returns without waiting for
//! it. The caller resolves the deferred slot whenever it is ready to render
//! recommendations; any failure on that path degrades to "no
//! recommendations" instead of failing the page.
//!
//! There is no cancellation and no retry: once spawned, the deferred fetch
//! runs to completion or failure even if the critical fetch errors out.

use std::sync::Arc;

use storefront_core::{Collection, Product};
use tokio::task::JoinHandle;

use crate::client::StorefrontClient;
use crate::error::StorefrontError;

/// Homepage data: critical content plus the still-resolving deferred slot.
pub struct Homepage {
    /// The most recently updated collection; `None` when the store has no
    /// collections (an empty banner, not an error).
    pub featured_collection: Option<Collection>,
    pub recommended_products: DeferredProducts,
}

/// Handle to the in-flight recommended-products fetch.
pub struct DeferredProducts {
    handle: JoinHandle<Option<Vec<Product>>>,
}

impl DeferredProducts {
    /// Waits for the deferred fetch and returns its products, or `None` when
    /// the fetch failed — the failure was already logged at spawn site.
    pub async fn resolve(self) -> Option<Vec<Product>> {
        match self.handle.await {
            Ok(products) => products,
            Err(e) => {
                tracing::warn!(error = %e, "recommended-products task did not complete");
                None
            }
        }
    }
}

/// Loads homepage data with the critical/deferred split.
///
/// # Errors
///
/// Returns [`StorefrontError`] only for the critical featured-collection
/// fetch. Deferred-fetch failures never surface here; they collapse to
/// `None` in [`DeferredProducts::resolve`].
pub async fn load_homepage(client: Arc<StorefrontClient>) -> Result<Homepage, StorefrontError> {
    let deferred_client = Arc::clone(&client);
    let handle = tokio::spawn(async move {
        match deferred_client.recommended_products().await {
            Ok(products) => Some(products),
            Err(e) => {
                tracing::warn!(error = %e, "recommended-products fetch failed; rendering none");
                None
            }
        }
    });

    let featured_collection = client.featured_collection().await?;

    Ok(Homepage {
        featured_collection,
        recommended_products: DeferredProducts { handle },
    })
}
