//! GraphQL documents sent to the storefront API.
//!
//! Both operations take `$country` / `$language` context variables so the
//! API localizes prices and titles. Result limits are baked into the
//! documents: one featured collection, four recommended products, and at
//! most 20 images / 10 variants per product.

/// Fetches the single most recently updated collection.
pub const FEATURED_COLLECTION_QUERY: &str = r"
query FeaturedCollection($country: CountryCode, $language: LanguageCode)
  @inContext(country: $country, language: $language) {
  collections(first: 1, sortKey: UPDATED_AT, reverse: true) {
    nodes {
      id
      title
      handle
      image {
        url
        altText
        width
        height
      }
    }
  }
}
";

/// Fetches up to four most recently updated products with the image and
/// variant data the product cards need.
pub const RECOMMENDED_PRODUCTS_QUERY: &str = r"
query RecommendedProducts($country: CountryCode, $language: LanguageCode)
  @inContext(country: $country, language: $language) {
  products(first: 4, sortKey: UPDATED_AT, reverse: true) {
    nodes {
      id
      title
      handle
      vendor
      priceRange {
        minVariantPrice { amount currencyCode }
        maxVariantPrice { amount currencyCode }
      }
      compareAtPriceRange {
        minVariantPrice { amount currencyCode }
        maxVariantPrice { amount currencyCode }
      }
      images(first: 20) {
        nodes {
          id
          url
          altText
          width
          height
        }
      }
      variants(first: 10) {
        nodes {
          id
          title
          availableForSale
          price { amount currencyCode }
          selectedOptions { name value }
          image {
            id
            url
            altText
            width
            height
          }
        }
      }
    }
  }
}
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_collection_query_is_limited_and_localized() {
        assert!(FEATURED_COLLECTION_QUERY.contains("collections(first: 1"));
        assert!(FEATURED_COLLECTION_QUERY.contains("sortKey: UPDATED_AT"));
        assert!(FEATURED_COLLECTION_QUERY.contains("@inContext"));
    }

    #[test]
    fn recommended_products_query_caps_nested_lists() {
        assert!(RECOMMENDED_PRODUCTS_QUERY.contains("products(first: 4"));
        assert!(RECOMMENDED_PRODUCTS_QUERY.contains("images(first: 20)"));
        assert!(RECOMMENDED_PRODUCTS_QUERY.contains("variants(first: 10)"));
        assert!(RECOMMENDED_PRODUCTS_QUERY.contains("@inContext"));
    }
}
