//! # Error Types
//!
//! Domain-specific error types for shopfront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopfront-core errors (this file)                                     │
//! │  ├── CoreError        - Business rule failures (stock, balance, cart)  │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  shopfront-cli errors (app crate)                                      │
//! │  ├── ConfigError      - Config file / environment problems             │
//! │  └── AppError         - What `run()` returns                           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → console "Error: <message>"        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Message Format
//! The `Display` text of the three checkout failures is exactly what the
//! console prints after the `Error: ` prefix, so these strings are part of
//! the observable output.

use thiserror::Error;

use crate::money::Money;
use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// None of these are fatal. Each aborts only the operation that raised it
/// and leaves cart, stock and balance untouched.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Requested quantity exceeds the product's remaining stock.
    ///
    /// ## User Workflow
    /// ```text
    /// cart.add(Cheese, 12)
    ///      │
    ///      ▼
    /// Check stock: available=10
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Cheese", available: 10, requested: 12 }
    ///      │
    ///      ▼
    /// Console: "Error: Not enough stock for Cheese"
    /// ```
    #[error("Not enough stock for {name}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Checkout was attempted with no line items.
    #[error("Cart is empty.")]
    EmptyCart,

    /// The customer cannot cover subtotal plus shipping.
    #[error("Insufficient balance.")]
    InsufficientBalance { required: Money, available: Money },

    /// No product with this id exists in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any business rule runs, e.g. when a product is built or a
/// quantity is handed to the cart.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
