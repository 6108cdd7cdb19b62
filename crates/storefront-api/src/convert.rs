//! Structural conversion from wire types to `storefront_core` domain types.
//!
//! No parsing or validation happens here beyond normalizing nullable wire
//! fields; amounts stay decimal strings and alt text defaults to empty.

use storefront_core::{
    Collection, CollectionImage, Money, PriceRange, Product, ProductImage, ProductVariant,
    SelectedOption,
};

use crate::types::{
    CollectionNode, ImageNode, MoneyNode, PriceRangeNode, ProductNode, VariantNode,
};

pub fn collection(node: CollectionNode) -> Collection {
    Collection {
        id: node.id,
        title: node.title,
        handle: node.handle,
        image: node.image.map(|i| CollectionImage {
            url: i.url,
            alt_text: i.alt_text.unwrap_or_default(),
            width: i.width,
            height: i.height,
        }),
    }
}

pub fn product(node: ProductNode) -> Product {
    // A compare-at range with a zero or empty minimum means the store set
    // no sale price; normalize it to absent so `is_on_sale` stays honest.
    let compare_at_price_range = node
        .compare_at_price_range
        .filter(|r| !matches!(r.min_variant_price.amount.as_str(), "" | "0.0" | "0.00"))
        .map(price_range);

    Product {
        id: node.id,
        title: node.title,
        handle: node.handle,
        vendor: node.vendor,
        price_range: price_range(node.price_range),
        compare_at_price_range,
        images: node.images.nodes.into_iter().map(image).collect(),
        variants: node.variants.nodes.into_iter().map(variant).collect(),
    }
}

fn variant(node: VariantNode) -> ProductVariant {
    ProductVariant {
        id: node.id,
        title: node.title,
        selected_options: node
            .selected_options
            .into_iter()
            .map(|o| SelectedOption {
                name: o.name,
                value: o.value,
            })
            .collect(),
        image: node.image.map(image),
        available_for_sale: node.available_for_sale,
        price: money(node.price),
    }
}

fn image(node: ImageNode) -> ProductImage {
    ProductImage {
        id: node.id,
        url: node.url,
        alt_text: node.alt_text.unwrap_or_default(),
        width: node.width,
        height: node.height,
    }
}

fn price_range(node: PriceRangeNode) -> PriceRange {
    PriceRange {
        min_variant_price: money(node.min_variant_price),
        max_variant_price: money(node.max_variant_price),
    }
}

fn money(node: MoneyNode) -> Money {
    Money {
        amount: node.amount,
        currency_code: node.currency_code,
    }
}
