//! # Promotion Module
//!
//! Pure pricing strategies that override the default
//! `unit_price × quantity` charge for an order line.
//!
//! ## Pricing Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Promotion Rules                               │
//! │                                                                     │
//! │  PercentageDiscount(bps)   total = price × qty × (1 − bps/10000)    │
//! │                                                                     │
//! │  SecondUnitHalfPrice       full = ceil(qty/2), half = floor(qty/2)  │
//! │                            total = price × full + (price × half)/2  │
//! │                            (odd quantities: extra unit pays full)   │
//! │                                                                     │
//! │  BuyTwoGetOneFree          total = price × (qty − qty/3)            │
//! │                            (one free unit per COMPLETE group of 3)  │
//! │                                                                     │
//! │  Example at $10.00, qty 5: all three rules charge $40.00            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A promotion never owns or references a product. Products hold a shared
//! `Arc<Promotion>`; promotions are immutable once constructed, so sharing
//! one across products is always safe.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationResult;
use crate::money::Money;
use crate::validation::validate_discount_bps;

// =============================================================================
// Promotion Rule
// =============================================================================

/// The variant-specific pricing formula of a promotion.
///
/// Extending the engine means adding a variant here and a match arm in
/// [`Promotion::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromotionRule {
    /// Flat percentage off the whole line, in basis points (3000 = 30%).
    PercentageDiscount { discount_bps: u32 },
    /// Every second unit is charged at half price.
    SecondUnitHalfPrice,
    /// Every complete group of three units is charged for two.
    BuyTwoGetOneFree,
}

// =============================================================================
// Promotion
// =============================================================================

/// A named pricing rule. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotion {
    name: String,
    rule: PromotionRule,
}

impl Promotion {
    /// Creates a percentage discount promotion.
    ///
    /// `percent` is a whole percentage (30 = 30% off) and must not
    /// exceed 100.
    ///
    /// ## Example
    /// ```rust
    /// use minimart_core::money::Money;
    /// use minimart_core::promotion::Promotion;
    ///
    /// let promo = Promotion::percentage_discount("30% off!", 30).unwrap();
    /// let total = promo.apply(Money::from_cents(1000), 5);
    /// assert_eq!(total.cents(), 3500); // $35.00
    /// ```
    pub fn percentage_discount(name: impl Into<String>, percent: u32) -> ValidationResult<Self> {
        let discount_bps = percent.saturating_mul(100);
        validate_discount_bps(discount_bps)?;
        Ok(Promotion {
            name: name.into(),
            rule: PromotionRule::PercentageDiscount { discount_bps },
        })
    }

    /// Creates a second-unit-half-price promotion.
    pub fn second_unit_half_price(name: impl Into<String>) -> Self {
        Promotion {
            name: name.into(),
            rule: PromotionRule::SecondUnitHalfPrice,
        }
    }

    /// Creates a buy-two-get-one-free promotion.
    pub fn buy_two_get_one_free(name: impl Into<String>) -> Self {
        Promotion {
            name: name.into(),
            rule: PromotionRule::BuyTwoGetOneFree,
        }
    }

    /// Returns the display label of the promotion.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the pricing rule.
    #[inline]
    pub fn rule(&self) -> PromotionRule {
        self.rule
    }

    /// Computes the charged price for a line of `quantity` units at
    /// `unit_price` each.
    ///
    /// Pure function of `(unit_price, quantity, rule)`: no side effects,
    /// no failure under valid input. The quantity must be positive; the
    /// purchase path validates it before pricing, and this function
    /// trusts its caller.
    pub fn apply(&self, unit_price: Money, quantity: i64) -> Money {
        match self.rule {
            PromotionRule::PercentageDiscount { discount_bps } => unit_price
                .multiply_quantity(quantity)
                .apply_percentage_discount(discount_bps),
            PromotionRule::SecondUnitHalfPrice => {
                // Odd quantities round the extra unit into the
                // full-price bucket.
                let full = quantity - quantity / 2;
                let half = quantity / 2;
                unit_price.multiply_quantity(full) + unit_price.multiply_quantity(half).halve_up()
            }
            PromotionRule::BuyTwoGetOneFree => {
                // One unit free per complete group of three.
                unit_price.multiply_quantity(quantity - quantity / 3)
            }
        }
    }
}

/// Displays the promotion's label.
impl fmt::Display for Promotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
