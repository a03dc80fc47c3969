//! # Error Types
//!
//! Domain-specific error types for minimart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  minimart-core errors (this file)                                   │
//! │  ├── ValidationError  - Bad constructor arguments                   │
//! │  ├── CoreError        - Purchase / lookup rule violations           │
//! │  └── OrderError       - A CoreError tagged with the failing line    │
//! │                                                                     │
//! │  CLI errors (apps/cli)                                              │
//! │  └── anyhow::Error    - What the operator sees (formatted)          │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → OrderError → CLI message       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, amounts)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when constructor arguments don't meet entity
/// invariants. Construction aborts immediately; no partially-built
/// entity ever exists.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be zero or greater.
    #[error("{field} cannot be negative")]
    MustBeNonNegative { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent purchase-rule violations or lookup failures.
/// They abort only the operation at hand; the caller decides what to do
/// with already-committed state (see [`OrderError`]).
#[derive(Debug, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Purchase quantity was zero or negative.
    ///
    /// Checked first for every product variant, including non-stocked
    /// products that otherwise skip all purchase checks.
    #[error("Invalid quantity: {requested} (must be positive)")]
    InvalidQuantity { requested: i64 },

    /// Product is deactivated and cannot be purchased.
    ///
    /// ## When This Occurs
    /// - Stock previously reached zero (automatic deactivation)
    /// - An operator explicitly deactivated the product
    #[error("Product '{name}' is not active")]
    ProductInactive { name: String },

    /// Insufficient stock to complete the purchase.
    ///
    /// ## User Workflow
    /// ```text
    /// buy(qty: 5)
    ///      │
    ///      ▼
    /// Check stock: available=3
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Google Pixel 7", available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// CLI shows: "Insufficient stock for Google Pixel 7: available 3, requested 5"
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// A single purchase exceeded the per-order cap of a limited product.
    ///
    /// Checked before the active/stock checks of the base purchase path.
    #[error("Cannot purchase more than {max_per_order} of {name} in one order (requested {requested})")]
    PurchaseLimitExceeded {
        name: String,
        max_per_order: i64,
        requested: i64,
    },

    /// No product matched the given identifier.
    ///
    /// `Store::find` returns `None` for this case; the error variant
    /// exists for `Store::order`, where an unresolvable line is a failure.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Order Error
// =============================================================================

/// Failure of a multi-line order, identifying which line failed.
///
/// ## No Rollback
/// Lines before `line` have already committed their stock decrements and
/// are NOT rolled back. Callers that need all-or-nothing semantics must
/// restock explicitly on failure.
#[derive(Debug, PartialEq, Eq, Error)]
#[error("Order failed at line {line}: {source}")]
pub struct OrderError {
    /// Zero-based index of the failing line.
    pub line: usize,
    /// What went wrong on that line.
    #[source]
    pub source: CoreError,
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            name: "Google Pixel 7".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Google Pixel 7: available 3, requested 5"
        );

        let err = CoreError::PurchaseLimitExceeded {
            name: "Shipping".to_string(),
            max_per_order: 1,
            requested: 2,
        };
        assert_eq!(
            err.to_string(),
            "Cannot purchase more than 1 of Shipping in one order (requested 2)"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price cannot be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_order_error_identifies_line() {
        let err = OrderError {
            line: 1,
            source: CoreError::InvalidQuantity { requested: 0 },
        };
        assert_eq!(
            err.to_string(),
            "Order failed at line 1: Invalid quantity: 0 (must be positive)"
        );
    }
}
