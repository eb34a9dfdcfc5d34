//! # shopfront-core: Pure Checkout Logic for Shopfront
//!
//! This crate contains all business logic of the shop as plain functions
//! and types with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopfront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  shopfront-cli (entry point)                    │   │
//! │  │   config ──► sample catalog ──► cart.add ──► checkout ──► print │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ shopfront-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │  types   │ │ catalog  │ │   cart   │ │    checkout      │  │   │
//! │  │   │ Product  │ │  stock   │ │ CartItem │ │ prepare / settle │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │  money   │ │  weight  │ │ customer │ │     render       │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CONSOLE • NO FILES                                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, capabilities, shipping rate
//! - [`money`] - Money type with integer arithmetic
//! - [`weight`] - Weight type in grams
//! - [`catalog`] - Product ownership and stock
//! - [`cart`] - Cart and line items
//! - [`customer`] - Customer balance
//! - [`checkout`] - Checkout validation and settlement
//! - [`render`] - Receipt text formatting
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use shopfront_core::{checkout, render, Cart, Catalog, Customer, Money, Product, ProductKind, Weight};
//!
//! let mut catalog = Catalog::new();
//! let cheese = catalog.insert(
//!     Product::new(
//!         ProductKind::Cheese { weight: Weight::from_grams(200) },
//!         "Cheese",
//!         Money::from_units(100),
//!         10,
//!     )
//!     .unwrap(),
//! );
//!
//! let mut cart = Cart::new();
//! cart.add(&mut catalog, cheese, 2).unwrap();
//!
//! let mut customer = Customer::new("Malak", Money::from_units(1000));
//! let receipt = checkout::checkout(&mut customer, &mut cart).unwrap();
//!
//! let lines = render::render_lines(&receipt);
//! assert_eq!(lines[1], "2x Cheese 400g");
//! assert_eq!(lines.last().unwrap(), "END.");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod customer;
pub mod error;
pub mod money;
pub mod render;
pub mod types;
pub mod validation;
pub mod weight;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem};
pub use catalog::Catalog;
pub use checkout::{Receipt, ReceiptLine, ShipmentLine};
pub use customer::Customer;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
pub use weight::Weight;
