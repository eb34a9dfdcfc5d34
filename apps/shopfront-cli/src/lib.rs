//! # Shopfront CLI Library
//!
//! Runs the sample checkout. `main.rs` only calls [`run`]; everything else
//! lives here so it can be tested with an in-memory writer.
//!
//! ## Module Organization
//! ```text
//! shopfront_cli/
//! ├── lib.rs     ◄─── You are here (logging setup & run)
//! ├── config.rs  ◄─── ShopConfig: defaults, shopfront.toml, environment
//! ├── seed.rs    ◄─── Sample catalog and shopping list
//! └── error.rs   ◄─── ConfigError, AppError
//! ```
//!
//! ## Output Streams
//! - stdout: the notice, receipt and `Error: ...` lines, nothing else
//! - stderr: tracing output

pub mod config;
pub mod error;
pub mod seed;

use std::io::{self, Write};

use shopfront_core::{checkout, render, Cart, Customer};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::ShopConfig;
use crate::error::AppResult;

/// Runs one checkout of the sample shop.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging (stderr, RUST_LOG aware)                        │
/// │  2. Load ShopConfig                                                     │
/// │  3. Seed catalog, build customer and cart                               │
/// │  4. Add shopping list to cart (failed adds print and continue)          │
/// │  5. Checkout and print                                                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> AppResult<()> {
    init_tracing();

    info!("Starting Shopfront checkout");

    let config = ShopConfig::load(None)?;
    info!(
        shipping_rate_cents = config.shipping.rate_per_kg_cents,
        customer = %config.customer.name,
        "Configuration loaded"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_checkout(&config, &mut out)?;
    out.flush()?;

    Ok(())
}

/// Seeds the shop, fills the cart and checks out, writing console lines to `out`.
pub fn run_checkout<W: Write>(config: &ShopConfig, out: &mut W) -> AppResult<()> {
    let (mut catalog, ids) = seed::sample_catalog()?;
    let mut customer = config.customer();
    let mut cart = Cart::with_shipping_rate(config.shipping_rate());

    for (product_id, quantity) in seed::shopping_list(&ids) {
        match cart.add(&mut catalog, product_id, quantity) {
            Ok(()) => debug!(product = %product_id, quantity, "Added to cart"),
            Err(err) => {
                warn!(product = %product_id, quantity, error = %err, "Add to cart rejected");
                writeln!(out, "{}", render::error_line(&err))?;
            }
        }
    }

    print_checkout(&mut customer, &mut cart, out)?;

    for (product_id, product) in catalog.iter() {
        debug!(product = %product_id, name = product.name(), stock = product.stock(), "Stock after run");
    }

    Ok(())
}

/// Checks the cart out and writes either the notice and receipt or a single
/// `Error: ...` line.
pub fn print_checkout<W: Write>(customer: &mut Customer, cart: &mut Cart, out: &mut W) -> AppResult<()> {
    match checkout::checkout(customer, cart) {
        Ok(receipt) => {
            info!(
                receipt_id = %receipt.id,
                total_cents = receipt.amount.cents(),
                remaining_cents = receipt.remaining_balance.cents(),
                "Checkout complete"
            );
            if let Ok(json) = serde_json::to_string(&receipt) {
                debug!(receipt = %json, "Receipt");
            }
            out.write_all(render::render(&receipt).as_bytes())?;
        }
        Err(err) => {
            warn!(error = %err, "Checkout rejected");
            writeln!(out, "{}", render::error_line(&err))?;
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shopfront_cli=trace` - Trace this crate only
/// - Default: warnings, plus INFO for this crate
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,shopfront_cli=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
