//! # Validation Module
//!
//! Input validation utilities for Minimart.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: CLI (apps/cli)                                            │
//! │  ├── Basic format checks (numeric input, empty line)                │
//! │  └── Immediate operator feedback                                    │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE - entity invariant validation                 │
//! │  ├── Constructors call these before an entity exists                │
//! │  └── Administrative setters re-check on every mutation              │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Purchase path (Product::buy)                              │
//! │  └── Runtime rule checks (active, stock, per-order cap)             │
//! │                                                                     │
//! │  Defense in depth: multiple layers catch different errors           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use minimart_core::validation::{validate_product_name, validate_purchase_quantity};
//!
//! validate_product_name("MacBook Air M2").unwrap();
//! validate_purchase_quantity(5).unwrap();
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::{MAX_LINE_QUANTITY, MAX_PRODUCT_NAME_LEN};

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (or whitespace only)
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use minimart_core::validation::validate_product_name;
///
/// assert!(validate_product_name("MacBook Air M2").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (free items)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock quantity (construction or administrative set).
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (the product deactivates)
pub fn validate_stock_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a purchase quantity as entered at the order boundary.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_LINE_QUANTITY (999)
///
/// The upper cap is an input-sanity bound for the CLI, not a business
/// rule: `Product::buy` itself only rejects non-positive quantities.
pub fn validate_purchase_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates the per-order cap of a limited product.
///
/// ## Rules
/// - Must be positive (a cap of zero would make the product unsellable)
pub fn validate_max_per_order(max: i64) -> ValidationResult<()> {
    if max <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "max_per_order".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_discount_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("MacBook Air M2").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_cents(145000)).is_ok());
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_stock_quantity() {
        assert!(validate_stock_quantity(0).is_ok());
        assert!(validate_stock_quantity(500).is_ok());
        assert!(validate_stock_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_purchase_quantity() {
        assert!(validate_purchase_quantity(1).is_ok());
        assert!(validate_purchase_quantity(999).is_ok());

        assert!(validate_purchase_quantity(0).is_err());
        assert!(validate_purchase_quantity(-5).is_err());
        assert!(validate_purchase_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_max_per_order() {
        assert!(validate_max_per_order(1).is_ok());
        assert!(validate_max_per_order(0).is_err());
        assert!(validate_max_per_order(-1).is_err());
    }

    #[test]
    fn test_validate_discount_bps() {
        assert!(validate_discount_bps(0).is_ok());
        assert!(validate_discount_bps(3000).is_ok());
        assert!(validate_discount_bps(10000).is_ok());
        assert!(validate_discount_bps(10001).is_err());
    }
}
