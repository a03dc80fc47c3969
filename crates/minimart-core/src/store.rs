//! # Store Module
//!
//! A store owns an ordered catalog of products and aggregates them into
//! queries (lookup, valuation, comparison) and the multi-line order
//! operation.
//!
//! ## Order Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Store::order(lines)                           │
//! │                                                                     │
//! │  for each (identifier, quantity) line, strictly in order:           │
//! │                                                                     │
//! │    resolve identifier ──not found──► Err(OrderError { line, .. })   │
//! │          │                                                          │
//! │          ▼                                                          │
//! │    Product::buy(quantity) ──fails──► Err(OrderError { line, .. })   │
//! │          │                                                          │
//! │          ▼                                                          │
//! │    total += line charge                                             │
//! │                                                                     │
//! │  all lines succeeded ──► Ok(total)                                  │
//! │                                                                     │
//! │  NO ROLLBACK: stock decremented by earlier lines stays decremented  │
//! │  when a later line fails. Callers needing all-or-nothing semantics  │
//! │  must restock explicitly.                                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! None provided. A store is single-owner, synchronous state; an embedding
//! host must serialize all mutating calls with one lock per store, since
//! `order` performs unguarded read/writes across multiple products.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, OrderError, ValidationResult};
use crate::money::Money;
use crate::product::{Product, ProductKind};
use crate::promotion::Promotion;

// =============================================================================
// Order Line
// =============================================================================

/// One (product identifier, quantity) pair within an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Product id, or product name as a fallback (same resolution rules
    /// as [`Store::find`]).
    pub product: String,
    /// Units to purchase. Must be positive; `Product::buy` rejects the
    /// rest.
    pub quantity: i64,
}

impl OrderLine {
    /// Creates an order line.
    pub fn new(product: impl Into<String>, quantity: i64) -> Self {
        OrderLine {
            product: product.into(),
            quantity,
        }
    }
}

// =============================================================================
// Product Spec
// =============================================================================

/// A declarative product specification, the unit of store construction.
///
/// Carries the variant tag, identity, pricing, stock, and the
/// variant-specific extras (per-order cap lives inside the `kind`;
/// the promotion is attached after the product is built).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSpec {
    /// Stable id; a UUID v4 is generated when absent.
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub price_cents: i64,
    #[serde(default)]
    pub quantity: i64,
    pub kind: ProductKind,
    /// Promotion to attach, if any.
    #[serde(default)]
    pub promotion: Option<Promotion>,
}

impl ProductSpec {
    /// Builds the product this spec describes.
    ///
    /// Fails with a `ValidationError` on the first violated invariant;
    /// no partially-built product ever exists.
    pub fn build(self) -> ValidationResult<Product> {
        let price = Money::from_cents(self.price_cents);
        let mut product = match self.kind {
            ProductKind::Regular => Product::regular(self.name, price, self.quantity)?,
            ProductKind::NonStocked => Product::non_stocked(self.name, price)?,
            ProductKind::LimitedQuantity { max_per_order } => {
                Product::limited(self.name, price, self.quantity, max_per_order)?
            }
        };
        if let Some(id) = self.id {
            product = product.with_id(id);
        }
        if let Some(promotion) = self.promotion {
            product.set_promotion(Arc::new(promotion));
        }
        Ok(product)
    }
}

// =============================================================================
// Store
// =============================================================================

/// A store: an ordered catalog of products.
///
/// Insertion order is preserved for display. Identity collisions are not
/// enforced; callers are responsible for supplying a well-formed catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Store {
    products: Vec<Product>,
}

impl Store {
    /// Creates a store from an ordered product list.
    pub fn new(products: Vec<Product>) -> Self {
        Store { products }
    }

    /// Creates a store from an ordered list of product specifications.
    ///
    /// Construction aborts on the first invalid spec; no partially-built
    /// store is returned.
    pub fn from_specs(specs: Vec<ProductSpec>) -> ValidationResult<Self> {
        let products = specs
            .into_iter()
            .map(ProductSpec::build)
            .collect::<ValidationResult<Vec<_>>>()?;
        Ok(Store { products })
    }

    /// Returns the catalog in insertion order.
    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    // =========================================================================
    // Catalog Edits
    // =========================================================================

    /// Appends a product to the catalog.
    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Removes the first product matching `identifier`, returning it.
    pub fn remove_product(&mut self, identifier: &str) -> Option<Product> {
        let index = self.position(identifier)?;
        Some(self.products.remove(index))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Index of the first product matching `identifier`: id match takes
    /// precedence over exact name match.
    fn position(&self, identifier: &str) -> Option<usize> {
        self.products
            .iter()
            .position(|p| p.id() == identifier)
            .or_else(|| self.products.iter().position(|p| p.name() == identifier))
    }

    /// Looks a product up by id, falling back to exact name match.
    ///
    /// Returns the first match in insertion order. No match is a normal
    /// empty result, not an error.
    pub fn find(&self, identifier: &str) -> Option<&Product> {
        self.position(identifier).map(|i| &self.products[i])
    }

    /// Mutable variant of [`find`](Self::find).
    pub fn find_mut(&mut self, identifier: &str) -> Option<&mut Product> {
        let index = self.position(identifier)?;
        Some(&mut self.products[index])
    }

    /// Checks whether `identifier` resolves to a product.
    pub fn contains(&self, identifier: &str) -> bool {
        self.position(identifier).is_some()
    }

    /// Total units in stock across the catalog.
    ///
    /// Inactive and zero-stock products contribute their (zero) stock.
    pub fn total_quantity(&self) -> i64 {
        self.products.iter().map(|p| p.quantity()).sum()
    }

    /// Total inventory valuation: Σ unit_price × quantity at current
    /// state.
    ///
    /// Promotions never affect valuation; they apply only at purchase
    /// time.
    pub fn total_value(&self) -> Money {
        self.products
            .iter()
            .map(|p| p.unit_price().multiply_quantity(p.quantity()))
            .fold(Money::zero(), |acc, v| acc + v)
    }

    /// Checks whether this store's total value exceeds `other`'s.
    pub fn is_greater_value(&self, other: &Store) -> bool {
        self.total_value() > other.total_value()
    }

    /// Checks whether this store's total value is below `other`'s.
    pub fn is_less_value(&self, other: &Store) -> bool {
        self.total_value() < other.total_value()
    }

    /// Combines two stores into a new one.
    ///
    /// The catalog is the concatenation of both operands' catalogs, in
    /// order; no de-duplication, no merging of matching products.
    pub fn combine(mut self, other: Store) -> Store {
        self.products.extend(other.products);
        self
    }

    // =========================================================================
    // Ordering
    // =========================================================================

    /// Processes an order, line by line, strictly in the order given.
    ///
    /// Each line resolves its product and calls [`Product::buy`]. The
    /// first failure aborts the order and reports the failing line;
    /// mutations committed by earlier lines are NOT rolled back (see the
    /// module-level diagram). On full success, returns the sum of all
    /// line charges.
    pub fn order(&mut self, lines: &[OrderLine]) -> Result<Money, OrderError> {
        let mut total = Money::zero();
        for (line, item) in lines.iter().enumerate() {
            let index = self.position(&item.product).ok_or_else(|| OrderError {
                line,
                source: CoreError::ProductNotFound(item.product.clone()),
            })?;
            let charge = self.products[index]
                .buy(item.quantity)
                .map_err(|source| OrderError { line, source })?;
            total += charge;
        }
        Ok(total)
    }
}

/// One catalog line per product: `"{id}: {product}"`.
impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for product in &self.products {
            writeln!(f, "{}: {}", product.id(), product)?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_store() -> Store {
        Store::new(vec![
            Product::regular("MacBook Air M2", Money::from_cents(145000), 100)
                .unwrap()
                .with_id("1"),
            Product::regular("Bose QuietComfort Earbuds", Money::from_cents(25000), 500)
                .unwrap()
                .with_id("2"),
            Product::non_stocked("Windows License", Money::from_cents(12500))
                .unwrap()
                .with_id("3"),
            Product::limited("Shipping", Money::from_cents(1000), 250, 1)
                .unwrap()
                .with_id("4"),
        ])
    }

    #[test]
    fn test_find_by_id_then_name() {
        let store = demo_store();
        assert_eq!(store.find("1").unwrap().name(), "MacBook Air M2");
        assert_eq!(store.find("Shipping").unwrap().id(), "4");
        assert!(store.find("nonexistent").is_none());
    }

    #[test]
    fn test_find_id_precedence_over_name() {
        // A product whose NAME collides with another product's ID: the id
        // match wins even though the name match comes first in insertion
        // order.
        let store = Store::new(vec![
            Product::regular("7", Money::from_cents(100), 1)
                .unwrap()
                .with_id("a"),
            Product::regular("Widget", Money::from_cents(200), 1)
                .unwrap()
                .with_id("7"),
        ]);
        assert_eq!(store.find("7").unwrap().name(), "Widget");
    }

    #[test]
    fn test_contains() {
        let store = demo_store();
        assert!(store.contains("2"));
        assert!(store.contains("Windows License"));
        assert!(!store.contains("Google Pixel 7"));
    }

    #[test]
    fn test_total_quantity() {
        let store = demo_store();
        // 100 + 500 + 0 (non-stocked) + 250
        assert_eq!(store.total_quantity(), 850);
    }

    #[test]
    fn test_total_value_ignores_promotions() {
        let mut store = demo_store();
        let before = store.total_value();

        store
            .find_mut("1")
            .unwrap()
            .set_promotion(Arc::new(Promotion::percentage_discount("30% off", 30).unwrap()));

        // Valuation is price × quantity, never promotion-adjusted
        assert_eq!(store.total_value(), before);
        // 100×$1450 + 500×$250 + 0 + 250×$10
        assert_eq!(before.cents(), 14_500_000 + 12_500_000 + 250_000);
    }

    #[test]
    fn test_value_comparison() {
        let rich = demo_store();
        let poor = Store::new(vec![Product::regular("dummy", Money::zero(), 0)
            .unwrap()
            .with_id("1")]);

        assert!(rich.is_greater_value(&poor));
        assert!(poor.is_less_value(&rich));
        assert!(!poor.is_greater_value(&rich));
    }

    #[test]
    fn test_combine_concatenates() {
        let a = demo_store();
        let b = Store::new(vec![Product::regular("Google Pixel 7", Money::from_cents(50000), 250)
            .unwrap()
            .with_id("5")]);

        let combined = a.combine(b);
        assert_eq!(combined.len(), 5);
        // Insertion order preserved, no de-duplication attempted
        assert_eq!(combined.products()[4].name(), "Google Pixel 7");
    }

    #[test]
    fn test_add_and_remove_product() {
        let mut store = demo_store();
        store.add_product(
            Product::regular("Google Pixel 7", Money::from_cents(50000), 250)
                .unwrap()
                .with_id("5"),
        );
        assert_eq!(store.len(), 5);

        let removed = store.remove_product("Google Pixel 7").unwrap();
        assert_eq!(removed.id(), "5");
        assert_eq!(store.len(), 4);
        assert!(store.remove_product("5").is_none());
    }

    #[test]
    fn test_order_sums_line_charges() {
        let mut store = demo_store();
        let total = store
            .order(&[OrderLine::new("1", 2), OrderLine::new("2", 3)])
            .unwrap();

        // 2×$1450 + 3×$250 = $3650
        assert_eq!(total.cents(), 365_000);
        assert_eq!(store.find("1").unwrap().quantity(), 98);
        assert_eq!(store.find("2").unwrap().quantity(), 497);
    }

    #[test]
    fn test_order_single_line_end_to_end() {
        let mut store = Store::new(vec![Product::regular(
            "MacBook Air M2",
            Money::from_cents(145000),
            100,
        )
        .unwrap()
        .with_id("1")]);

        let total = store.order(&[OrderLine::new("1", 1)]).unwrap();
        assert_eq!(total.cents(), 145000);

        let product = store.find("1").unwrap();
        assert_eq!(product.quantity(), 99);
        assert!(product.is_active());
    }

    #[test]
    fn test_order_exhausting_stock_then_reordering_fails() {
        let mut store = Store::new(vec![Product::regular(
            "MacBook Air M2",
            Money::from_cents(145000),
            100,
        )
        .unwrap()
        .with_id("1")]);

        store.order(&[OrderLine::new("1", 100)]).unwrap();
        assert_eq!(store.find("1").unwrap().quantity(), 0);
        assert!(!store.find("1").unwrap().is_active());

        let err = store.order(&[OrderLine::new("1", 1)]).unwrap_err();
        assert_eq!(err.line, 0);
        // Stock hit zero, so the product deactivated; the inactive check
        // fires before the stock check
        assert!(matches!(err.source, CoreError::ProductInactive { .. }));
    }

    #[test]
    fn test_order_failure_keeps_earlier_mutations() {
        let mut store = demo_store();
        let err = store
            .order(&[OrderLine::new("1", 2), OrderLine::new("2", 501)])
            .unwrap_err();

        assert_eq!(err.line, 1);
        assert!(matches!(err.source, CoreError::InsufficientStock { .. }));

        // Line 0 committed and stays committed
        assert_eq!(store.find("1").unwrap().quantity(), 98);
        // Line 1 left untouched
        assert_eq!(store.find("2").unwrap().quantity(), 500);
    }

    #[test]
    fn test_order_unknown_product_fails_that_line() {
        let mut store = demo_store();
        let err = store
            .order(&[OrderLine::new("1", 1), OrderLine::new("no-such-product", 1)])
            .unwrap_err();

        assert_eq!(err.line, 1);
        assert_eq!(
            err.source,
            CoreError::ProductNotFound("no-such-product".to_string())
        );
        assert_eq!(store.find("1").unwrap().quantity(), 99);
    }

    #[test]
    fn test_order_respects_purchase_limit() {
        let mut store = demo_store();
        let err = store.order(&[OrderLine::new("Shipping", 2)]).unwrap_err();
        assert!(matches!(
            err.source,
            CoreError::PurchaseLimitExceeded { max_per_order: 1, .. }
        ));
    }

    #[test]
    fn test_from_specs() {
        let store = Store::from_specs(vec![
            ProductSpec {
                id: Some("1".to_string()),
                name: "MacBook Air M2".to_string(),
                price_cents: 145000,
                quantity: 100,
                kind: ProductKind::Regular,
                promotion: Some(Promotion::second_unit_half_price("second half price")),
            },
            ProductSpec {
                id: None,
                name: "Windows License".to_string(),
                price_cents: 12500,
                quantity: 0,
                kind: ProductKind::NonStocked,
                promotion: None,
            },
        ])
        .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.find("1").unwrap().promotion().unwrap().name(), "second half price");
        // Generated UUID id, name lookup still works
        assert!(store.contains("Windows License"));
    }

    #[test]
    fn test_from_specs_aborts_on_first_invalid() {
        let result = Store::from_specs(vec![ProductSpec {
            id: None,
            name: String::new(),
            price_cents: 100,
            quantity: 1,
            kind: ProductKind::Regular,
            promotion: None,
        }]);
        assert!(result.is_err());
    }

    #[test]
    fn test_display_lists_catalog() {
        let store = demo_store();
        let rendered = store.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "1: MacBook Air M2, Price: $1450.00, Quantity: 100");
        assert_eq!(
            lines[3],
            "4: Shipping, Price: $10.00, Quantity: 250, Max purchase: 1"
        );
    }
}
