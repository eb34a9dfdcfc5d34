//! # Domain Types
//!
//! Core domain types used throughout Shopfront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  ProductKind    │   │  Capabilities   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  Cheese         │   │  expirable      │       │
//! │  │  price (Money)  │──►│  Biscuits       │──►│  shipping       │       │
//! │  │  stock          │   │  Tv             │   │   (Option<W>)   │       │
//! │  │  capabilities   │   │  Mobile         │   └─────────────────┘       │
//! │  └─────────────────┘   │  ScratchCard    │                              │
//! │                        └─────────────────┘                              │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │  ShippingRate   │   │   ProductId     │                              │
//! │  │  cents per kg   │   │  catalog index  │                              │
//! │  │  1000 = 10/kg   │   └─────────────────┘                              │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Capability Resolution
//! Whether a product is shippable or expirable is decided once, when the
//! product is built from its [`ProductKind`]. Nothing downstream inspects the
//! kind again; the cart and checkout only ask [`Product::as_shippable`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreResult;
use crate::money::Money;
use crate::validation::{
    validate_price, validate_product_name, validate_stock, validate_weight,
};
use crate::weight::{Weight, GRAMS_PER_KG};

// =============================================================================
// Shipping Rate
// =============================================================================

/// Flat shipping rate in cents per kilogram.
///
/// ## Why cents per kg?
/// The rate multiplies an integer gram count, so storing it in the
/// smallest money unit keeps the whole calculation in integers.
/// `1000` = 10.00 per kg, the shop's standard rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingRate(i64);

impl ShippingRate {
    /// The standard flat rate: 10 currency units per kilogram.
    pub const STANDARD: ShippingRate = ShippingRate(1000);

    /// Creates a rate from cents per kilogram.
    #[inline]
    pub const fn from_cents_per_kg(cents: i64) -> Self {
        ShippingRate(cents)
    }

    /// Returns the rate in cents per kilogram.
    #[inline]
    pub const fn cents_per_kg(&self) -> i64 {
        self.0
    }

    /// Calculates the shipping cost for a weight.
    ///
    /// ## Implementation
    /// `(grams * cents_per_kg + 500) / 1000`, so fractions of a cent
    /// round half up. The product is taken in i128; a cost above
    /// `i64::MAX` cents saturates. Carts never get there since
    /// [`Cart::add`](crate::cart::Cart::add) rejects lines whose totals
    /// would not fit.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::types::ShippingRate;
    /// use shopfront_core::weight::Weight;
    ///
    /// let cost = ShippingRate::STANDARD.cost_for(Weight::from_grams(1100));
    /// assert_eq!(cost.cents(), 1100); // 11.00
    /// ```
    pub fn cost_for(&self, weight: Weight) -> Money {
        self.checked_cost_for(weight)
            .unwrap_or(Money::from_cents(i64::MAX))
    }

    /// Like [`cost_for`](Self::cost_for), `None` when the cost does not fit in i64 cents.
    pub fn checked_cost_for(&self, weight: Weight) -> Option<Money> {
        let grams_per_kg = GRAMS_PER_KG as i128;
        let cents = (weight.grams() as i128 * self.0 as i128 + grams_per_kg / 2) / grams_per_kg;
        i64::try_from(cents).ok().map(Money::from_cents)
    }
}

impl Default for ShippingRate {
    fn default() -> Self {
        ShippingRate::STANDARD
    }
}

// =============================================================================
// Product Identity
// =============================================================================

/// Stable identifier of a product inside a [`Catalog`](crate::catalog::Catalog).
///
/// Issued by the catalog on insert; it is the catalog position and never
/// changes for the lifetime of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(usize);

impl ProductId {
    #[inline]
    pub(crate) const fn new(index: usize) -> Self {
        ProductId(index)
    }

    #[inline]
    pub(crate) const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// Product Kind & Capabilities
// =============================================================================

/// The concrete product variants the shop sells.
///
/// Shippable kinds carry their per-unit weight.
///
/// | Kind        | Expirable | Shippable |
/// |-------------|-----------|-----------|
/// | Cheese      | yes       | yes       |
/// | Biscuits    | yes       | yes       |
/// | Tv          | no        | yes       |
/// | Mobile      | no        | no        |
/// | ScratchCard | no        | no        |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ProductKind {
    Cheese { weight: Weight },
    Biscuits { weight: Weight },
    Tv { weight: Weight },
    Mobile,
    ScratchCard,
}

/// Capability flags resolved from a [`ProductKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Capabilities {
    /// Product has a shelf life. Classification only.
    pub expirable: bool,

    /// Per-unit weight when the product ships.
    pub shipping: Option<Weight>,
}

impl Capabilities {
    /// Resolves the capability flags of a product kind.
    pub const fn of(kind: &ProductKind) -> Self {
        match *kind {
            ProductKind::Cheese { weight } | ProductKind::Biscuits { weight } => Capabilities {
                expirable: true,
                shipping: Some(weight),
            },
            ProductKind::Tv { weight } => Capabilities {
                expirable: false,
                shipping: Some(weight),
            },
            ProductKind::Mobile | ProductKind::ScratchCard => Capabilities {
                expirable: false,
                shipping: None,
            },
        }
    }
}

/// View of a product's shipping capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shippable {
    weight_per_unit: Weight,
}

impl Shippable {
    /// Weight of a single unit.
    #[inline]
    pub const fn weight_per_unit(&self) -> Weight {
        self.weight_per_unit
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Stock is only changed by the owning catalog when a cart takes units.
/// Serialize only: every product is built through [`Product::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    name: String,
    price: Money,
    stock: i64,
    kind: ProductKind,
    capabilities: Capabilities,
}

impl Product {
    /// Builds a product, validating name, price, stock and weight.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::money::Money;
    /// use shopfront_core::types::{Product, ProductKind};
    /// use shopfront_core::weight::Weight;
    ///
    /// let cheese = Product::new(
    ///     ProductKind::Cheese { weight: Weight::from_grams(200) },
    ///     "Cheese",
    ///     Money::from_units(100),
    ///     10,
    /// )
    /// .unwrap();
    /// assert!(cheese.is_shippable());
    /// assert!(cheese.is_expirable());
    /// ```
    pub fn new(
        kind: ProductKind,
        name: impl Into<String>,
        price: Money,
        stock: i64,
    ) -> CoreResult<Self> {
        let name = name.into();
        validate_product_name(&name)?;
        validate_price(price)?;
        validate_stock(stock)?;

        let capabilities = Capabilities::of(&kind);
        if let Some(weight) = capabilities.shipping {
            validate_weight(weight)?;
        }

        Ok(Product {
            name,
            price,
            stock,
            kind,
            capabilities,
        })
    }

    /// Display name shown on the notice and receipt.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Remaining purchasable quantity.
    #[inline]
    pub fn stock(&self) -> i64 {
        self.stock
    }

    #[inline]
    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    #[inline]
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    #[inline]
    pub fn is_expirable(&self) -> bool {
        self.capabilities.expirable
    }

    #[inline]
    pub fn is_shippable(&self) -> bool {
        self.capabilities.shipping.is_some()
    }

    /// Returns the shipping view when the product ships.
    pub fn as_shippable(&self) -> Option<Shippable> {
        self.capabilities
            .shipping
            .map(|weight_per_unit| Shippable { weight_per_unit })
    }

    /// Checks if the requested quantity is in stock.
    #[inline]
    pub fn can_sell(&self, quantity: i64) -> bool {
        quantity <= self.stock
    }

    /// Removes units from stock. Callers check [`Product::can_sell`] first.
    pub(crate) fn take_stock(&mut self, quantity: i64) {
        self.stock -= quantity;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
