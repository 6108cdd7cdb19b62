//! HTTP client for the storefront GraphQL API.
//!
//! Wraps `reqwest` with storefront-specific error handling, access-token
//! management, and typed response deserialization. Every call checks the
//! `errors` array in the GraphQL envelope and surfaces API-level failures
//! as [`StorefrontError::Api`].

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use storefront_core::{AppConfig, Collection, Product};

use crate::convert;
use crate::error::StorefrontError;
use crate::queries::{FEATURED_COLLECTION_QUERY, RECOMMENDED_PRODUCTS_QUERY};
use crate::types::{
    FeaturedCollectionData, GraphQlError, GraphQlRequest, GraphQlResponse,
    RecommendedProductsData,
};

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

/// Client for the storefront GraphQL API.
///
/// Manages the HTTP client, access token, endpoint URL, and the locale
/// context sent with every query. Use [`StorefrontClient::new`] for a real
/// shop or [`StorefrontClient::with_endpoint`] to point at a mock server in
/// tests.
#[derive(Debug)]
pub struct StorefrontClient {
    client: Client,
    endpoint: Url,
    access_token: String,
    country: String,
    language: String,
}

impl StorefrontClient {
    /// Creates a client for a shop domain such as
    /// `"acme-apparel.myshopify.com"`.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`StorefrontError::InvalidShopDomain`] if
    /// the domain does not form a valid endpoint URL.
    pub fn new(
        shop_domain: &str,
        access_token: &str,
        timeout_secs: u64,
        country: &str,
        language: &str,
    ) -> Result<Self, StorefrontError> {
        let endpoint = format!("https://{shop_domain}/api/graphql");
        Url::parse(&endpoint).map_err(|e| StorefrontError::InvalidShopDomain {
            shop_domain: shop_domain.to_string(),
            reason: e.to_string(),
        })?;
        Self::with_endpoint(&endpoint, access_token, timeout_secs, country, language)
    }

    /// Creates a client from loaded [`AppConfig`].
    ///
    /// # Errors
    ///
    /// Same as [`StorefrontClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, StorefrontError> {
        Self::new(
            &config.shop_domain,
            &config.access_token,
            config.request_timeout_secs,
            &config.country,
            &config.language,
        )
    }

    /// Creates a client with an explicit endpoint URL (for testing with
    /// wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`StorefrontError::InvalidShopDomain`] if
    /// `endpoint` is not a valid URL.
    pub fn with_endpoint(
        endpoint: &str,
        access_token: &str,
        timeout_secs: u64,
        country: &str,
        language: &str,
    ) -> Result<Self, StorefrontError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("storefront/0.1 (homepage)")
            .build()?;

        let endpoint = Url::parse(endpoint).map_err(|e| StorefrontError::InvalidShopDomain {
            shop_domain: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            endpoint,
            access_token: access_token.to_owned(),
            country: country.to_owned(),
            language: language.to_owned(),
        })
    }

    /// Fetches the featured collection: the single most recently updated
    /// collection, or `None` when the store has no collections at all.
    ///
    /// # Errors
    ///
    /// - [`StorefrontError::Api`] if the API returns GraphQL errors.
    /// - [`StorefrontError::Http`] on network failure or non-2xx HTTP status.
    /// - [`StorefrontError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn featured_collection(&self) -> Result<Option<Collection>, StorefrontError> {
        let data: FeaturedCollectionData = self
            .post_query(FEATURED_COLLECTION_QUERY, "featuredCollection")
            .await?;

        Ok(data
            .collections
            .nodes
            .into_iter()
            .next()
            .map(convert::collection))
    }

    /// Fetches up to four recommended products, most recently updated first.
    ///
    /// # Errors
    ///
    /// - [`StorefrontError::Api`] if the API returns GraphQL errors.
    /// - [`StorefrontError::Http`] on network failure or non-2xx HTTP status.
    /// - [`StorefrontError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn recommended_products(&self) -> Result<Vec<Product>, StorefrontError> {
        let data: RecommendedProductsData = self
            .post_query(RECOMMENDED_PRODUCTS_QUERY, "recommendedProducts")
            .await?;

        Ok(data
            .products
            .nodes
            .into_iter()
            .map(convert::product)
            .collect())
    }

    /// Sends one GraphQL POST with the locale context variables, asserts a
    /// 2xx HTTP status, parses the envelope, checks its `errors` array, and
    /// returns the `data` payload.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Http`] on network failure or a non-2xx
    /// status, [`StorefrontError::Api`] on GraphQL errors or a missing
    /// `data` field, and [`StorefrontError::Deserialize`] if the body does
    /// not match the expected envelope shape.
    async fn post_query<T: DeserializeOwned>(
        &self,
        query: &str,
        context: &str,
    ) -> Result<T, StorefrontError> {
        let request = GraphQlRequest {
            query,
            variables: serde_json::json!({
                "country": self.country,
                "language": self.language,
            }),
        };

        tracing::debug!(endpoint = %self.endpoint, operation = context, "issuing storefront query");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .json(&request)
            .send()
            .await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let envelope: GraphQlResponse<T> =
            serde_json::from_str(&body).map_err(|e| StorefrontError::Deserialize {
                context: context.to_string(),
                source: e,
            })?;

        if !envelope.errors.is_empty() {
            return Err(StorefrontError::Api(join_error_messages(&envelope.errors)));
        }
        envelope
            .data
            .ok_or_else(|| StorefrontError::Api(format!("{context}: response carried no data")))
    }
}

/// Joins the messages of a non-empty GraphQL `errors` array into one line.
fn join_error_messages(errors: &[GraphQlError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
