//! # Checkout
//!
//! Turns a cart and a customer into a settled [`Receipt`].
//!
//! ## Checkout Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        checkout(customer, cart)                         │
//! │                                                                         │
//! │  prepare() ─── pure, nothing mutated ────────────────────────────────►  │
//! │    1. cart empty?            ──► Err(EmptyCart)                         │
//! │    2. subtotal + shipping    ──► total                                  │
//! │    3. balance >= total?      ──► Err(InsufficientBalance)               │
//! │    4. shipment lines (shippable items only)                             │
//! │    5. receipt lines (every item)                                        │
//! │                                                                         │
//! │  settle() ─── the only mutation ─────────────────────────────────────►  │
//! │    6. customer.deduct(total)                                            │
//! │    7. cart.clear()                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed checkout leaves cart, balance and stock exactly as they were.
//! Stock taken when items were added stays taken.
//!
//! Printing is not done here; see [`crate::render`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cart::{Cart, CartItem};
use crate::customer::Customer;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::weight::Weight;

// =============================================================================
// Receipt
// =============================================================================

/// One line of the shipment notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentLine {
    pub name: String,
    pub quantity: i64,
    /// Per-unit weight × quantity
    pub weight: Weight,
}

/// One line of the checkout receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub name: String,
    pub quantity: i64,
    pub line_total: Money,
}

impl From<&CartItem> for ReceiptLine {
    fn from(item: &CartItem) -> Self {
        ReceiptLine {
            name: item.name.clone(),
            quantity: item.quantity,
            line_total: item.line_total(),
        }
    }
}

/// Everything a completed checkout reports.
///
/// Amounts are exact; truncation for display happens in the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: Uuid,
    pub customer: String,
    pub issued_at: DateTime<Utc>,

    /// Shippable items in cart order
    pub shipments: Vec<ShipmentLine>,
    pub package_weight: Weight,

    /// Every item in cart order
    pub lines: Vec<ReceiptLine>,
    pub subtotal: Money,
    pub shipping: Money,
    /// subtotal + shipping
    pub amount: Money,

    /// Customer balance once `amount` is deducted
    pub remaining_balance: Money,
}

impl Receipt {
    /// `true` when at least one item goes into the package.
    pub fn has_shipments(&self) -> bool {
        !self.shipments.is_empty()
    }
}

// =============================================================================
// Checkout Operations
// =============================================================================

/// Validates the checkout and builds the receipt without touching anything.
///
/// ## Errors
/// - `EmptyCart` when there is nothing to buy
/// - `InsufficientBalance` when `subtotal + shipping` exceeds the balance
pub fn prepare(customer: &Customer, cart: &Cart) -> CoreResult<Receipt> {
    if cart.is_empty() {
        return Err(CoreError::EmptyCart);
    }

    let subtotal = cart.subtotal();
    let shipping = cart.shipping_cost();
    let amount = subtotal + shipping;

    if !customer.can_afford(amount) {
        return Err(CoreError::InsufficientBalance {
            required: amount,
            available: customer.balance(),
        });
    }

    let shipments = cart
        .items()
        .iter()
        .filter(|item| item.is_shippable())
        .map(|item| ShipmentLine {
            name: item.name.clone(),
            quantity: item.quantity,
            weight: item.shipping_weight(),
        })
        .collect();

    Ok(Receipt {
        id: Uuid::new_v4(),
        customer: customer.name.clone(),
        issued_at: Utc::now(),
        shipments,
        package_weight: cart.total_shipping_weight(),
        lines: cart.items().iter().map(ReceiptLine::from).collect(),
        subtotal,
        shipping,
        amount,
        remaining_balance: customer.balance() - amount,
    })
}

/// Charges the customer and empties the cart for a prepared receipt.
pub fn settle(customer: &mut Customer, cart: &mut Cart, receipt: &Receipt) {
    customer.deduct(receipt.amount);
    cart.clear();
}

/// Runs a full checkout: [`prepare`], then [`settle`] on success.
///
/// ## Example
/// ```rust
/// use shopfront_core::{checkout, Cart, Catalog, Customer, Money, Product, ProductKind};
///
/// let mut catalog = Catalog::new();
/// let card = catalog
///     .insert(Product::new(ProductKind::ScratchCard, "ScratchCard", Money::from_units(50), 10).unwrap());
///
/// let mut cart = Cart::new();
/// cart.add(&mut catalog, card, 1).unwrap();
///
/// let mut customer = Customer::new("Malak", Money::from_units(1000));
/// let receipt = checkout::checkout(&mut customer, &mut cart).unwrap();
///
/// assert_eq!(receipt.amount, Money::from_units(50));
/// assert_eq!(customer.balance(), Money::from_units(950));
/// assert!(cart.is_empty());
/// ```
pub fn checkout(customer: &mut Customer, cart: &mut Cart) -> CoreResult<Receipt> {
    let receipt = prepare(customer, cart)?;
    settle(customer, cart, &receipt);
    Ok(receipt)
}
