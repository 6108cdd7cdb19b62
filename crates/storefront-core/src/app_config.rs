/// Runtime configuration for the storefront client, loaded from environment
/// variables by [`crate::config::load_app_config`].
#[derive(Clone)]
pub struct AppConfig {
    /// Shop domain, e.g. `"acme-apparel.myshopify.com"`.
    pub shop_domain: String,
    /// Public storefront API access token.
    pub access_token: String,
    /// ISO 3166-1 alpha-2 country code for the locale context, e.g. `"US"`.
    pub country: String,
    /// ISO 639-1 language code for the locale context, e.g. `"EN"`.
    pub language: String,
    pub request_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("shop_domain", &self.shop_domain)
            .field("access_token", &"[redacted]")
            .field("country", &self.country)
            .field("language", &self.language)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}
