use clap::{Parser, Subcommand};
use storefront_api::{load_homepage, StorefrontClient};
use storefront_core::{color_options, load_app_config, PriceRange, Product, SwatchState};

#[derive(Debug, Parser)]
#[command(name = "storefront-cli")]
#[command(about = "Storefront homepage command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch and print the homepage: featured collection + recommendations.
    Home,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Home) | None => home().await,
    }
}

async fn home() -> anyhow::Result<()> {
    let config = load_app_config()?;
    let client = std::sync::Arc::new(StorefrontClient::from_config(&config)?);

    // Critical data: a failure here fails the command.
    let homepage = load_homepage(client).await?;

    match &homepage.featured_collection {
        Some(collection) => println!("Featured: {} ({})", collection.title, collection.url()),
        None => println!("Featured: (store has no collections)"),
    }

    // Deferred data: a failure here was already logged and shows as "none".
    match homepage.recommended_products.resolve().await {
        Some(products) => {
            println!("Recommended products:");
            for product in &products {
                print_product(product);
            }
        }
        None => println!("No recommendations available."),
    }

    Ok(())
}

fn print_product(product: &Product) {
    let sale = if product.is_on_sale() { " (on sale)" } else { "" };
    println!(
        "  {} by {} — {}{}  {}",
        product.title,
        product.vendor,
        format_price(&product.price_range),
        sale,
        product.url()
    );

    let colors = color_options(&product.variants);
    if !colors.is_empty() {
        let values: Vec<&str> = colors.iter().map(|c| c.value.as_str()).collect();
        println!("    colors: {}", values.join(", "));
    }

    match SwatchState::new(&product.handle, &product.images, &colors) {
        Ok(state) => println!("    image: {}", state.displayed_image()),
        Err(e) => tracing::warn!(handle = %product.handle, error = %e, "skipping product card"),
    }
}

fn format_price(range: &PriceRange) -> String {
    let min = &range.min_variant_price;
    let max = &range.max_variant_price;
    if min.amount == max.amount {
        format!("{} {}", min.amount, min.currency_code)
    } else {
        format!("{}-{} {}", min.amount, max.amount, min.currency_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::Money;

    fn usd(amount: &str) -> Money {
        Money {
            amount: amount.to_string(),
            currency_code: "USD".to_string(),
        }
    }

    #[test]
    fn format_price_collapses_equal_min_max() {
        let range = PriceRange {
            min_variant_price: usd("34.99"),
            max_variant_price: usd("34.99"),
        };
        assert_eq!(format_price(&range), "34.99 USD");
    }

    #[test]
    fn format_price_shows_range_when_prices_differ() {
        let range = PriceRange {
            min_variant_price: usd("34.99"),
            max_variant_price: usd("39.99"),
        };
        assert_eq!(format_price(&range), "34.99-39.99 USD");
    }
}
