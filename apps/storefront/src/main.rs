//! # aoin-storefront
//!
//! Command-line driver for the storefront client logic.
//!
//! ```text
//! aoin-storefront [--config <PATH>] [path]       resolve a path, print PageView JSON
//! aoin-storefront [--config <PATH>] --cart-demo  run the cart screen end to end
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use aoin_core::Money;
use aoin_storefront::state::CatalogItem;
use aoin_storefront::{init_tracing, Storefront, DEMO_PROMO_CODE};
use clap::Parser;
use tracing::info;

/// Aoin Marketplace storefront, headless
#[derive(Parser, Debug)]
#[command(name = "aoin-storefront")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to storefront.toml (falls back to AOIN_CONFIG, then the user config dir)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run the cart screen end to end instead of resolving a path
    #[arg(long)]
    cart_demo: bool,

    /// Route to resolve
    #[arg(default_value = "/")]
    path: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args = Args::parse();
    let store = Storefront::load(args.config)?;

    if args.cart_demo {
        run_cart_demo(&store).await?;
    } else {
        let view = store.open(&args.path)?;
        println!("{}", serde_json::to_string_pretty(&view)?);
    }

    Ok(())
}

async fn run_cart_demo(store: &Storefront) -> Result<(), Box<dyn std::error::Error>> {
    store.open("/cart")?;
    let screen = store.cart_screen(Arc::new(store.local_promo()));

    screen.add_item(
        &CatalogItem {
            id: "kurta-1".to_string(),
            name: "Cotton Kurta".to_string(),
            price: Money::from_major_minor(1_199, 0),
        },
        2,
    )?;
    screen.add_item(
        &CatalogItem {
            id: "dupatta-3".to_string(),
            name: "Silk Dupatta".to_string(),
            price: Money::from_major_minor(849, 50),
        },
        1,
    )?;

    screen.widget().toggle_promo();
    screen.widget().set_promo_draft(format!(" {DEMO_PROMO_CODE} "));
    let outcome = screen.apply_promo().await;
    info!(?outcome, "promo applied");

    println!("{}", serde_json::to_string_pretty(&screen.render())?);

    screen.checkout();
    if let Some(current) = store.navigator().current() {
        println!("{}", serde_json::to_string_pretty(&current.page.render(&current.params))?);
    }

    for toast in store.context().toasts.drain() {
        println!("{}", serde_json::to_string(&toast)?);
    }
    Ok(())
}
