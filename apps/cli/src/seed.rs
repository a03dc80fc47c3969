//! # Seed Data
//!
//! The fixed demo catalog the application starts with.
//!
//! ## Generated Catalog
//! ```text
//! 1: MacBook Air M2            $1450.00 × 100   second half price
//! 2: Bose QuietComfort Earbuds  $250.00 × 500   Buy 2 Get 1 Free
//! 3: Google Pixel 7             $500.00 × 250
//! 4: Windows License            $125.00         non-stocked, 30% Discount
//! 5: Shipping                    $10.00 × 250   max purchase: 1
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use minimart_core::{Money, Product, Promotion, Store};

/// Builds the demo store.
///
/// Promotions are shared `Arc`s: attaching the same promotion to several
/// products is safe because promotions are immutable.
pub fn demo_store() -> Result<Store> {
    let second_half_price = Arc::new(Promotion::second_unit_half_price("second half price"));
    let third_one_free = Arc::new(Promotion::buy_two_get_one_free("Buy 2 Get 1 Free"));
    let thirty_percent = Arc::new(
        Promotion::percentage_discount("30% Discount", 30).context("seed promotion invalid")?,
    );

    let mut macbook = Product::regular("MacBook Air M2", Money::from_cents(145_000), 100)
        .context("seed product invalid")?
        .with_id("1");
    macbook.set_promotion(second_half_price);

    let mut earbuds = Product::regular("Bose QuietComfort Earbuds", Money::from_cents(25_000), 500)
        .context("seed product invalid")?
        .with_id("2");
    earbuds.set_promotion(third_one_free);

    let pixel = Product::regular("Google Pixel 7", Money::from_cents(50_000), 250)
        .context("seed product invalid")?
        .with_id("3");

    let mut windows_license = Product::non_stocked("Windows License", Money::from_cents(12_500))
        .context("seed product invalid")?
        .with_id("4");
    windows_license.set_promotion(thirty_percent);

    let shipping = Product::limited("Shipping", Money::from_cents(1_000), 250, 1)
        .context("seed product invalid")?
        .with_id("5");

    Ok(Store::new(vec![
        macbook,
        earbuds,
        pixel,
        windows_license,
        shipping,
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_store_shape() {
        let store = demo_store().unwrap();
        assert_eq!(store.len(), 5);
        assert_eq!(store.total_quantity(), 1100);
        assert!(store.contains("MacBook Air M2"));
        assert_eq!(
            store.find("1").unwrap().promotion().unwrap().name(),
            "second half price"
        );
        assert_eq!(store.find("5").unwrap().max_per_order(), Some(1));
    }
}
