//! # minimart-core: Pure Business Logic for Minimart
//!
//! This crate is the **heart** of Minimart. It models a retail store's
//! inventory as pure, in-memory domain logic with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Minimart Architecture                         │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                      apps/cli                                 │  │
//! │  │   Menu loop ──► input parsing ──► printing results            │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │              ★ minimart-core (THIS CRATE) ★                   │  │
//! │  │                                                               │  │
//! │  │  ┌─────────┐ ┌─────────┐ ┌───────────┐ ┌───────┐ ┌─────────┐  │  │
//! │  │  │  money  │ │ product │ │ promotion │ │ store │ │validation│ │  │
//! │  │  │  Money  │ │ Product │ │ Promotion │ │ Store │ │  rules  │  │  │
//! │  │  │         │ │  ::buy  │ │  ::apply  │ │::order│ │  checks │  │  │
//! │  │  └─────────┘ └─────────┘ └───────────┘ └───────┘ └─────────┘  │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO PERSISTENCE • IN-MEMORY STATE ONLY              │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`promotion`] - Pure pricing rules that override the default charge
//! - [`product`] - Products and their purchase state machine
//! - [`store`] - Catalog aggregation and the multi-line order operation
//! - [`error`] - Domain error types
//! - [`validation`] - Entity invariant validation
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: Every operation is synchronous and deterministic
//! 2. **No I/O**: Terminal, file system, and network access are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are cents (i64), never floats
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use minimart_core::money::Money;
//! use minimart_core::product::Product;
//! use minimart_core::promotion::Promotion;
//! use minimart_core::store::{OrderLine, Store};
//!
//! let mut laptop = Product::regular("MacBook Air M2", Money::from_cents(145000), 100)
//!     .unwrap()
//!     .with_id("1");
//! laptop.set_promotion(Arc::new(Promotion::second_unit_half_price("second half price")));
//!
//! let mut store = Store::new(vec![laptop]);
//!
//! // Two laptops, second one half price: $1450 + $725
//! let total = store.order(&[OrderLine::new("1", 2)]).unwrap();
//! assert_eq!(total, Money::from_cents(217_500));
//! assert_eq!(store.find("1").unwrap().quantity(), 98);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod product;
pub mod promotion;
pub mod store;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use minimart_core::Store` instead of
// `use minimart_core::store::Store`

pub use error::{CoreError, CoreResult, OrderError, ValidationError};
pub use money::Money;
pub use product::{Product, ProductKind};
pub use promotion::{Promotion, PromotionRule};
pub use store::{OrderLine, ProductSpec, Store};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum lines allowed in a single order.
///
/// ## Business Reason
/// Prevents runaway shopping lists at the input boundary. The core's
/// `order` accepts any length; the CLI enforces this cap while collecting
/// lines.
pub const MAX_ORDER_LINES: usize = 100;

/// Maximum quantity of a single order line.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g. typing 1000 instead of 10).
/// Enforced by [`validation::validate_purchase_quantity`] at the input
/// boundary, not inside `Product::buy`.
pub const MAX_LINE_QUANTITY: i64 = 999;

/// Maximum length of a product name, in characters.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;
