//! # Cart
//!
//! The shopping cart: an ordered list of line items.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Caller                   Cart Method              State Change         │
//! │  ──────                   ───────────              ────────────         │
//! │                                                                         │
//! │  Pick product ───────────► add() ────────────────► stock -= qty        │
//! │                                                    items.push(item)    │
//! │                                                                         │
//! │  Checkout ───────────────► subtotal()              (read only)         │
//! │                            total_shipping_weight()                     │
//! │                            shipping_cost()                              │
//! │                                                                         │
//! │  After payment ──────────► clear() ──────────────► items.clear()       │
//! │                                                    (stock NOT restored) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Product, ProductId, ShippingRate};
use crate::validation::validate_quantity;
use crate::weight::Weight;

/// An item in the shopping cart.
///
/// ## Design Notes
/// - `product_id`: reference back to the catalog entry
/// - `name`, `unit_price`, `weight_per_unit`: frozen copy of the product at
///   the time of adding, so the notice and receipt never need the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItem {
    /// Catalog entry this line came from
    pub product_id: ProductId,

    /// Product name at time of adding (frozen)
    pub name: String,

    /// Unit price at time of adding (frozen)
    pub unit_price: Money,

    /// Per-unit weight, `None` for products that don't ship
    pub weight_per_unit: Option<Weight>,

    /// Quantity in cart
    pub quantity: i64,
}

impl CartItem {
    /// Creates a cart item from a product and quantity.
    pub fn from_product(product_id: ProductId, product: &Product, quantity: i64) -> Self {
        CartItem {
            product_id,
            name: product.name().to_string(),
            unit_price: product.price(),
            weight_per_unit: product.as_shippable().map(|s| s.weight_per_unit()),
            quantity,
        }
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }

    #[inline]
    pub fn is_shippable(&self) -> bool {
        self.weight_per_unit.is_some()
    }

    /// Weight this line adds to the package; zero if the item doesn't ship.
    pub fn shipping_weight(&self) -> Weight {
        self.weight_per_unit
            .map(|w| w * self.quantity)
            .unwrap_or_default()
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Items keep insertion order; that is the display order
/// - Every item's quantity was taken from catalog stock when it was added
/// - Adding the same product twice creates two lines
/// - Subtotal, package weight and shipping cost all fit in i64, so the
///   read-only totals below never overflow
#[derive(Debug, Clone, Serialize)]
pub struct Cart {
    items: Vec<CartItem>,

    /// Flat rate applied by `shipping_cost()`
    shipping_rate: ShippingRate,

    /// When the cart was created/last cleared
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart at the standard shipping rate.
    pub fn new() -> Self {
        Cart::with_shipping_rate(ShippingRate::STANDARD)
    }

    /// Creates a new empty cart with a custom shipping rate.
    pub fn with_shipping_rate(shipping_rate: ShippingRate) -> Self {
        Cart {
            items: Vec::new(),
            shipping_rate,
            created_at: Utc::now(),
        }
    }

    /// Adds a product to the cart, taking the units from catalog stock.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: validation error
    /// - unknown product: `ProductNotFound`
    /// - `quantity` above remaining stock: `InsufficientStock`
    /// - subtotal plus shipping would leave the i64 cent range:
    ///   `OutOfRange` on `quantity`, with the largest quantity that still fits
    ///
    /// On any error neither the cart nor the catalog changes.
    pub fn add(&mut self, catalog: &mut Catalog, product_id: ProductId, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        let product = catalog.product(product_id)?;
        let item = CartItem::from_product(product_id, product, quantity);

        // Stock errors win over overflow; take_stock reports them below.
        if product.can_sell(quantity) && self.checked_amount_with(&item).is_none() {
            return Err(ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: 1,
                max: self.max_fitting_quantity(&item),
            }
            .into());
        }

        catalog.take_stock(product_id, quantity)?;
        self.items.push(item);
        Ok(())
    }

    /// Subtotal plus shipping if `extra` were added, `None` on overflow.
    fn checked_amount_with(&self, extra: &CartItem) -> Option<Money> {
        let mut subtotal = Money::zero();
        let mut weight = Weight::zero();

        for item in self.items.iter().chain(std::iter::once(extra)) {
            subtotal = subtotal.checked_add(item.unit_price.checked_multiply_quantity(item.quantity)?)?;
            if let Some(per_unit) = item.weight_per_unit {
                weight = weight.checked_add(per_unit.checked_mul(item.quantity)?)?;
            }
        }

        subtotal.checked_add(self.shipping_rate.checked_cost_for(weight)?)
    }

    /// Largest quantity of `item`'s product whose totals still fit, 0 if none.
    fn max_fitting_quantity(&self, item: &CartItem) -> i64 {
        let fits = |quantity: i64| {
            let candidate = CartItem {
                quantity,
                ..item.clone()
            };
            self.checked_amount_with(&candidate).is_some()
        };

        // Totals grow with quantity, so binary search [lo fits, hi does not).
        let (mut lo, mut hi) = (0, item.quantity);
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if fits(mid) {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        lo
    }

    /// Clears all items from the cart. Stock is not returned to the catalog.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Read-only view of the line items, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn shipping_rate(&self) -> ShippingRate {
        self.shipping_rate
    }

    /// Returns the number of line items in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Calculates the subtotal (sum of line totals).
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Total weight of the shippable items.
    pub fn total_shipping_weight(&self) -> Weight {
        self.items.iter().map(CartItem::shipping_weight).sum()
    }

    /// Shipping cost: total weight × the cart's flat rate.
    pub fn shipping_cost(&self) -> Money {
        self.shipping_rate.cost_for(self.total_shipping_weight())
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::types::ProductKind;

    struct Shelf {
        catalog: Catalog,
        cheese: ProductId,
        tv: ProductId,
        card: ProductId,
    }

    fn shelf() -> Shelf {
        let mut catalog = Catalog::new();
        let cheese = catalog.insert(
            Product::new(
                ProductKind::Cheese {
                    weight: Weight::from_grams(200),
                },
                "Cheese",
                Money::from_units(100),
                10,
            )
            .unwrap(),
        );
        let tv = catalog.insert(
            Product::new(
                ProductKind::Tv {
                    weight: Weight::from_kilograms(5),
                },
                "TV",
                Money::from_units(300),
                3,
            )
            .unwrap(),
        );
        let card = catalog.insert(
            Product::new(ProductKind::ScratchCard, "ScratchCard", Money::from_units(50), 10)
                .unwrap(),
        );
        Shelf {
            catalog,
            cheese,
            tv,
            card,
        }
    }

    #[test]
    fn test_cart_add_item() {
        let mut s = shelf();
        let mut cart = Cart::new();

        cart.add(&mut s.catalog, s.cheese, 2).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.subtotal(), Money::from_units(200));
        assert_eq!(s.catalog.stock_of(s.cheese).unwrap(), 8);
    }

    #[test]
    fn test_cart_add_same_product_twice_keeps_two_lines() {
        let mut s = shelf();
        let mut cart = Cart::new();

        cart.add(&mut s.catalog, s.cheese, 2).unwrap();
        cart.add(&mut s.catalog, s.cheese, 3).unwrap();

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total_quantity(), 5);
        assert_eq!(s.catalog.stock_of(s.cheese).unwrap(), 5);
    }

    #[test]
    fn test_add_rejects_excess_quantity() {
        let mut s = shelf();
        let mut cart = Cart::new();

        let err = cart.add(&mut s.catalog, s.tv, 4).unwrap_err();

        assert!(matches!(err, CoreError::InsufficientStock { ref name, .. } if name == "TV"));
        assert!(cart.is_empty());
        assert_eq!(s.catalog.stock_of(s.tv).unwrap(), 3);
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let mut s = shelf();
        let mut cart = Cart::new();

        let err = cart.add(&mut s.catalog, s.card, 0).unwrap_err();

        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustBePositive { .. })
        ));
        assert!(cart.is_empty());
        assert_eq!(s.catalog.stock_of(s.card).unwrap(), 10);
    }

    #[test]
    fn test_remaining_stock_limits_later_adds() {
        let mut s = shelf();
        let mut cart = Cart::new();

        cart.add(&mut s.catalog, s.tv, 2).unwrap();
        assert!(cart.add(&mut s.catalog, s.tv, 2).is_err());
        cart.add(&mut s.catalog, s.tv, 1).unwrap();

        assert_eq!(s.catalog.stock_of(s.tv).unwrap(), 0);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_shipping_only_counts_shippable_items() {
        let mut s = shelf();
        let mut cart = Cart::new();

        cart.add(&mut s.catalog, s.cheese, 2).unwrap();
        cart.add(&mut s.catalog, s.card, 3).unwrap();

        assert_eq!(cart.total_shipping_weight().grams(), 400);
        assert_eq!(cart.shipping_cost(), Money::from_units(4));
        assert_eq!(cart.items()[1].shipping_weight(), Weight::zero());
    }

    #[test]
    fn test_custom_shipping_rate() {
        let mut s = shelf();
        let mut cart = Cart::with_shipping_rate(ShippingRate::from_cents_per_kg(250));

        cart.add(&mut s.catalog, s.tv, 1).unwrap();

        // 5kg at 2.50/kg
        assert_eq!(cart.shipping_cost().cents(), 1250);
    }

    #[test]
    fn test_items_keep_insertion_order() {
        let mut s = shelf();
        let mut cart = Cart::new();

        cart.add(&mut s.catalog, s.card, 1).unwrap();
        cart.add(&mut s.catalog, s.cheese, 1).unwrap();

        let names: Vec<&str> = cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["ScratchCard", "Cheese"]);
    }

    #[test]
    fn test_cart_clear_is_idempotent() {
        let mut s = shelf();
        let mut cart = Cart::new();

        cart.add(&mut s.catalog, s.cheese, 2).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Money::zero());

        // clearing does not give stock back
        assert_eq!(s.catalog.stock_of(s.cheese).unwrap(), 8);
    }

    fn bottomless_tv() -> (Catalog, ProductId) {
        let mut catalog = Catalog::new();
        let tv = catalog.insert(
            Product::new(
                ProductKind::Tv {
                    weight: Weight::from_kilograms(5),
                },
                "TV",
                Money::from_units(300),
                i64::MAX,
            )
            .unwrap(),
        );
        (catalog, tv)
    }

    #[test]
    fn test_add_rejects_quantity_whose_totals_overflow() {
        let (mut catalog, tv) = bottomless_tv();
        let mut cart = Cart::new();

        let err = cart
            .add(&mut catalog, tv, 1_000_000_000_000_000)
            .unwrap_err();

        // 300.00 + 50.00 shipping per TV
        let max = i64::MAX / 35_000;
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfRange { ref field, min: 1, max: m })
                if field == "quantity" && m == max
        ));
        assert!(cart.is_empty());
        assert_eq!(catalog.stock_of(tv).unwrap(), i64::MAX);

        cart.add(&mut catalog, tv, max).unwrap();
        assert_eq!(cart.subtotal().cents(), max * 30_000);
        assert_eq!(cart.shipping_cost().cents(), max * 5_000);
        assert!(cart.add(&mut catalog, tv, 1).is_err());
    }

    #[test]
    fn test_stock_error_wins_over_overflow() {
        let mut s = shelf();
        let mut cart = Cart::new();

        let err = cart.add(&mut s.catalog, s.tv, i64::MAX).unwrap_err();

        assert!(matches!(err, CoreError::InsufficientStock { .. }));
    }
}
