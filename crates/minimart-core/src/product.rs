//! # Product Module
//!
//! Products own their stock count, activation flag, and optional
//! promotion, and expose the single state-changing operation [`Product::buy`].
//!
//! ## Purchase Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Product::buy(quantity)                         │
//! │                                                                     │
//! │  quantity <= 0 ──────────────► Err(InvalidQuantity)                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Limited & qty > cap ────────► Err(PurchaseLimitExceeded)           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  NonStocked? ────────────────► Ok(price) — no state change          │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  inactive ───────────────────► Err(ProductInactive)                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  qty > stock ────────────────► Err(InsufficientStock)               │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  stock -= qty; stock == 0 ──► active = false (same operation)       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Ok(promotion price, else unit_price × qty)                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Activation Policy
//! `active` is derived state: it flips to false exactly when the stock
//! count reaches zero (via `buy` or an administrative `set_quantity`).
//! Restocking does NOT reactivate; the operator must call `activate()`
//! explicitly. Restock and reactivation are separate operations.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult, ValidationResult};
use crate::money::Money;
use crate::promotion::Promotion;
use crate::validation::{
    validate_max_per_order, validate_price, validate_product_name, validate_stock_quantity,
};

// =============================================================================
// Product Kind
// =============================================================================

/// The purchase-behavior variant of a product.
///
/// A sum type instead of an inheritance hierarchy: each variant overrides
/// a slice of the base purchase behavior, dispatched in [`Product::buy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    /// Standard stock-tracked product.
    Regular,
    /// Stock is unlimited/irrelevant; the quantity field stays at 0 and
    /// is never checked. Purchases mutate nothing.
    NonStocked,
    /// Stock-tracked, but a single purchase may not exceed the cap.
    LimitedQuantity { max_per_order: i64 },
}

// =============================================================================
// Product
// =============================================================================

/// A product in the store's catalog.
///
/// ## Invariants (hold at all times)
/// - `name` is non-empty
/// - `unit_price >= 0`
/// - `quantity >= 0`
///
/// Constructors validate their arguments and fail with a
/// [`ValidationError`](crate::error::ValidationError) before any entity
/// exists; mutation is limited to `buy`, the administrative setters, and
/// promotion attachment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (UUID v4 unless the caller supplies one).
    id: String,

    /// Display name shown in the catalog and on order lines.
    name: String,

    /// Unit price. Immutable after construction.
    unit_price: Money,

    /// Current stock level. Mutable only via `buy` / `set_quantity`.
    quantity: i64,

    /// Whether the product can be purchased.
    active: bool,

    /// Purchase-behavior variant.
    kind: ProductKind,

    /// At most one promotion, shared and immutable.
    promotion: Option<Arc<Promotion>>,

    /// When the product was created.
    created_at: DateTime<Utc>,

    /// When the product was last mutated.
    updated_at: DateTime<Utc>,
}

impl Product {
    fn build(
        name: String,
        unit_price: Money,
        quantity: i64,
        kind: ProductKind,
    ) -> ValidationResult<Self> {
        validate_product_name(&name)?;
        validate_price(unit_price)?;
        validate_stock_quantity(quantity)?;
        if let ProductKind::LimitedQuantity { max_per_order } = kind {
            validate_max_per_order(max_per_order)?;
        }

        let now = Utc::now();
        Ok(Product {
            id: Uuid::new_v4().to_string(),
            name,
            unit_price,
            quantity,
            // Initial state: Active iff there is stock to sell, or stock
            // is irrelevant to the variant.
            active: quantity > 0 || matches!(kind, ProductKind::NonStocked),
            kind,
            promotion: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Creates a standard stock-tracked product.
    ///
    /// ## Example
    /// ```rust
    /// use minimart_core::money::Money;
    /// use minimart_core::product::Product;
    ///
    /// let p = Product::regular("MacBook Air M2", Money::from_cents(145000), 100).unwrap();
    /// assert!(p.is_active());
    /// assert_eq!(p.quantity(), 100);
    /// ```
    pub fn regular(
        name: impl Into<String>,
        unit_price: Money,
        quantity: i64,
    ) -> ValidationResult<Self> {
        Self::build(name.into(), unit_price, quantity, ProductKind::Regular)
    }

    /// Creates a non-stocked product (e.g. a license or a service).
    ///
    /// The quantity is fixed at 0 and never checked; purchases always
    /// succeed and never mutate state.
    pub fn non_stocked(name: impl Into<String>, unit_price: Money) -> ValidationResult<Self> {
        Self::build(name.into(), unit_price, 0, ProductKind::NonStocked)
    }

    /// Creates a purchase-limited product.
    ///
    /// A single purchase may not exceed `max_per_order` units; the cap is
    /// checked before the regular active/stock checks.
    pub fn limited(
        name: impl Into<String>,
        unit_price: Money,
        quantity: i64,
        max_per_order: i64,
    ) -> ValidationResult<Self> {
        Self::build(
            name.into(),
            unit_price,
            quantity,
            ProductKind::LimitedQuantity { max_per_order },
        )
    }

    /// Replaces the generated id with a caller-supplied one.
    ///
    /// Intended for catalog seeding, where stable human-readable ids
    /// ("1", "2", ...) beat UUIDs. Must be applied before the product is
    /// handed to a store.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the product's identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the product's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price.
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Returns the current stock level.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Checks whether the product can currently be purchased.
    ///
    /// Non-stocked products ignore this flag in `buy`.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the purchase-behavior variant.
    #[inline]
    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    /// Returns the attached promotion, if any.
    #[inline]
    pub fn promotion(&self) -> Option<&Arc<Promotion>> {
        self.promotion.as_ref()
    }

    /// Returns the per-order cap for limited products.
    pub fn max_per_order(&self) -> Option<i64> {
        match self.kind {
            ProductKind::LimitedQuantity { max_per_order } => Some(max_per_order),
            _ => None,
        }
    }

    /// When the product was created.
    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When the product was last mutated.
    #[inline]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // =========================================================================
    // Administrative Mutation
    // =========================================================================

    /// Sets the stock level (administrative restock or correction).
    ///
    /// ## Behavior
    /// - Setting 0 deactivates the product (derived-state update)
    /// - Setting a positive value does NOT reactivate; call
    ///   [`Self::activate`] explicitly if that is intended
    /// - Non-stocked products keep their fixed quantity of 0
    pub fn set_quantity(&mut self, quantity: i64) -> ValidationResult<()> {
        validate_stock_quantity(quantity)?;

        if matches!(self.kind, ProductKind::NonStocked) {
            return Ok(());
        }

        self.quantity = quantity;
        if self.quantity == 0 {
            self.active = false;
        }
        self.touch();
        Ok(())
    }

    /// Explicitly marks the product as purchasable again.
    pub fn activate(&mut self) {
        self.active = true;
        self.touch();
    }

    /// Explicitly marks the product as not purchasable.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.touch();
    }

    /// Attaches a promotion, replacing any existing one.
    ///
    /// A product holds at most one promotion at a time. The promotion is
    /// shared: the same `Arc` may be attached to many products.
    pub fn set_promotion(&mut self, promotion: Arc<Promotion>) {
        self.promotion = Some(promotion);
        self.touch();
    }

    /// Detaches the current promotion, returning it if one was attached.
    pub fn clear_promotion(&mut self) -> Option<Arc<Promotion>> {
        let previous = self.promotion.take();
        if previous.is_some() {
            self.touch();
        }
        previous
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    // =========================================================================
    // Purchase
    // =========================================================================

    /// Purchases `quantity` units, returning the charged price.
    ///
    /// See the module-level diagram for the full check order. On success
    /// the stock decrement and the possible deactivation happen inside
    /// this call; the caller never has to follow up.
    ///
    /// ## Failure Conditions
    /// - `quantity <= 0` → [`CoreError::InvalidQuantity`] (all variants)
    /// - over the per-order cap → [`CoreError::PurchaseLimitExceeded`]
    /// - inactive → [`CoreError::ProductInactive`]
    /// - `quantity > stock` → [`CoreError::InsufficientStock`]
    ///
    /// On any failure the stock is left unchanged.
    pub fn buy(&mut self, quantity: i64) -> CoreResult<Money> {
        if quantity <= 0 {
            return Err(CoreError::InvalidQuantity {
                requested: quantity,
            });
        }

        if let ProductKind::LimitedQuantity { max_per_order } = self.kind {
            if quantity > max_per_order {
                return Err(CoreError::PurchaseLimitExceeded {
                    name: self.name.clone(),
                    max_per_order,
                    requested: quantity,
                });
            }
        }

        // Non-stocked products skip the active/stock checks entirely and
        // never mutate state.
        if matches!(self.kind, ProductKind::NonStocked) {
            return Ok(self.price_for(quantity));
        }

        if !self.active {
            return Err(CoreError::ProductInactive {
                name: self.name.clone(),
            });
        }

        if quantity > self.quantity {
            return Err(CoreError::InsufficientStock {
                name: self.name.clone(),
                available: self.quantity,
                requested: quantity,
            });
        }

        self.quantity -= quantity;
        if self.quantity == 0 {
            self.active = false;
        }
        self.touch();

        Ok(self.price_for(quantity))
    }

    /// Prices a line: the attached promotion wins, otherwise
    /// `unit_price × quantity`.
    fn price_for(&self, quantity: i64) -> Money {
        match &self.promotion {
            Some(promotion) => promotion.apply(self.unit_price, quantity),
            None => self.unit_price.multiply_quantity(quantity),
        }
    }

    /// Renders the catalog line for this product.
    ///
    /// Same output as the `Display` impl; named method for callers that
    /// want an owned string.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

/// Catalog line: name, price, quantity, then promotion and
/// variant-specific suffixes.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, Price: {}, Quantity: {}",
            self.name, self.unit_price, self.quantity
        )?;
        if let Some(promotion) = &self.promotion {
            write!(f, ", Promotion: {}", promotion.name())?;
        }
        match self.kind {
            ProductKind::Regular => Ok(()),
            ProductKind::NonStocked => write!(f, ", Non-stocked product"),
            ProductKind::LimitedQuantity { max_per_order } => {
                write!(f, ", Max purchase: {}", max_per_order)
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
