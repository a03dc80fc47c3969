//! # Minimart CLI Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Seed the demo inventory (products + promotions)
//! 3. Run the menu loop until the operator quits
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Minimart CLI                                │
//! │                                                                     │
//! │  main.rs ────► Sets up logging, seeds the store                     │
//! │                                                                     │
//! │  menu.rs ────► Menu loop, input parsing, result rendering           │
//! │                                                                     │
//! │  seed.rs ────► The fixed demo catalog                               │
//! │                                                                     │
//! │  minimart-core ──► All business decisions (buy, order, pricing)     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

mod menu;
mod seed;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logging goes to stderr so it never interleaves with menu output.
    // RUST_LOG=debug surfaces per-order details.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let store = seed::demo_store()?;
    tracing::info!(products = store.len(), "store seeded");

    menu::run(store)
}
