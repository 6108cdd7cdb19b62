//! Integration tests for `StorefrontClient` and the homepage loader using
//! wiremock HTTP mocks.

use std::sync::Arc;

use storefront_api::{load_homepage, StorefrontClient, StorefrontError};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> StorefrontClient {
    StorefrontClient::with_endpoint(base_url, "test-token", 30, "US", "EN")
        .expect("client construction should not fail")
}

fn collection_body() -> serde_json::Value {
    serde_json::json!({
        "data": {
            "collections": {
                "nodes": [
                    {
                        "id": "gid://shopify/Collection/7",
                        "title": "Summer Drop",
                        "handle": "summer-drop",
                        "image": {
                            "url": "https://cdn.example.com/summer.jpg",
                            "altText": "Summer Drop hero",
                            "width": 1600,
                            "height": 900
                        }
                    }
                ]
            }
        }
    })
}

fn products_body() -> serde_json::Value {
    serde_json::json!({
        "data": {
            "products": {
                "nodes": [
                    {
                        "id": "gid://shopify/Product/1",
                        "title": "Classic Crew Tee",
                        "handle": "classic-crew-tee",
                        "vendor": "Acme Apparel",
                        "priceRange": {
                            "minVariantPrice": { "amount": "34.99", "currencyCode": "USD" },
                            "maxVariantPrice": { "amount": "39.99", "currencyCode": "USD" }
                        },
                        "compareAtPriceRange": {
                            "minVariantPrice": { "amount": "49.99", "currencyCode": "USD" },
                            "maxVariantPrice": { "amount": "49.99", "currencyCode": "USD" }
                        },
                        "images": {
                            "nodes": [
                                {
                                    "id": "gid://shopify/ProductImage/1",
                                    "url": "https://cdn.example.com/red.jpg",
                                    "altText": "Red",
                                    "width": 1024,
                                    "height": 1024
                                },
                                {
                                    "id": "gid://shopify/ProductImage/2",
                                    "url": "https://cdn.example.com/red-alt.jpg",
                                    "altText": "Red-secondary",
                                    "width": 1024,
                                    "height": 1024
                                }
                            ]
                        },
                        "variants": {
                            "nodes": [
                                {
                                    "id": "gid://shopify/ProductVariant/11",
                                    "title": "Red",
                                    "availableForSale": true,
                                    "price": { "amount": "34.99", "currencyCode": "USD" },
                                    "selectedOptions": [
                                        { "name": "Color", "value": "Red" }
                                    ],
                                    "image": {
                                        "id": "gid://shopify/ProductImage/1",
                                        "url": "https://cdn.example.com/red.jpg",
                                        "altText": "Red",
                                        "width": 1024,
                                        "height": 1024
                                    }
                                }
                            ]
                        }
                    }
                ]
            }
        }
    })
}

#[tokio::test]
async fn featured_collection_returns_parsed_collection() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("X-Shopify-Storefront-Access-Token", "test-token"))
        .and(body_string_contains("FeaturedCollection"))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection_body()))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let collection = client
        .featured_collection()
        .await
        .expect("should parse collection")
        .expect("collection should be present");

    assert_eq!(collection.id, "gid://shopify/Collection/7");
    assert_eq!(collection.title, "Summer Drop");
    assert_eq!(collection.url(), "/collections/summer-drop");
    let image = collection.image.expect("hero image should be present");
    assert_eq!(image.alt_text, "Summer Drop hero");
}

#[tokio::test]
async fn featured_collection_none_when_store_has_no_collections() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "data": { "collections": { "nodes": [] } } });
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let collection = client
        .featured_collection()
        .await
        .expect("empty store should not be an error");
    assert!(collection.is_none());
}

#[tokio::test]
async fn recommended_products_returns_parsed_products() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_string_contains("RecommendedProducts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(products_body()))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let products = client
        .recommended_products()
        .await
        .expect("should parse products");

    assert_eq!(products.len(), 1);
    let product = &products[0];
    assert_eq!(product.title, "Classic Crew Tee");
    assert_eq!(product.vendor, "Acme Apparel");
    assert_eq!(product.url(), "/products/classic-crew-tee");
    assert!(product.is_on_sale());
    assert_eq!(product.images.len(), 2);
    assert_eq!(product.variants[0].option_value("Color"), Some("Red"));
}

#[tokio::test]
async fn graphql_errors_surface_as_api_error() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "data": null,
        "errors": [{ "message": "Throttled" }]
    });
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.featured_collection().await.unwrap_err();
    assert!(matches!(err, StorefrontError::Api(msg) if msg == "Throttled"));
}

#[tokio::test]
async fn http_error_surfaces_as_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.recommended_products().await.unwrap_err();
    assert!(matches!(err, StorefrontError::Http(_)));
}

#[tokio::test]
async fn loader_returns_critical_and_deferred_data() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_string_contains("FeaturedCollection"))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection_body()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("RecommendedProducts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(products_body()))
        .mount(&server)
        .await;

    let client = Arc::new(test_client(&server.uri()));
    let homepage = load_homepage(client).await.expect("critical fetch should succeed");

    let collection = homepage
        .featured_collection
        .expect("collection should be present");
    assert_eq!(collection.handle, "summer-drop");

    let products = homepage
        .recommended_products
        .resolve()
        .await
        .expect("deferred fetch should succeed");
    assert_eq!(products.len(), 1);
}

#[tokio::test]
async fn loader_degrades_deferred_failure_to_none() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_string_contains("FeaturedCollection"))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection_body()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("RecommendedProducts"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = Arc::new(test_client(&server.uri()));
    let homepage = load_homepage(client)
        .await
        .expect("critical path should be unaffected");

    assert!(homepage.featured_collection.is_some());
    assert!(homepage.recommended_products.resolve().await.is_none());
}

#[tokio::test]
async fn loader_propagates_critical_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_string_contains("FeaturedCollection"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("RecommendedProducts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(products_body()))
        .mount(&server)
        .await;

    let client = Arc::new(test_client(&server.uri()));
    assert!(load_homepage(client).await.is_err());
}
