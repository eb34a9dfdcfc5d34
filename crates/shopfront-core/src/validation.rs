//! # Validation Module
//!
//! Input validation utilities for Shopfront.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Configuration (shopfront-cli)                                │
//! │  └── Shipping rate and customer balance from TOML / environment        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Construction (THIS MODULE)                                   │
//! │  ├── Product name, price, stock, weight                                │
//! │  └── Cart quantities                                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Business rules (cart / checkout)                             │
//! │  ├── Stock available?                                                  │
//! │  └── Balance covers total?                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopfront_core::validation::{validate_product_name, validate_quantity};
//!
//! validate_product_name("Cheese").unwrap();
//! validate_quantity(2).unwrap();
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::ShippingRate;
use crate::weight::Weight;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted product name.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use shopfront_core::validation::validate_product_name;
///
/// assert!(validate_product_name("ScratchCard").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
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

/// Validates a quantity handed to the cart.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// Whether the quantity is in stock is a business rule checked by the
/// cart, not here.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates an initial stock level. Zero is allowed (sold out).
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use shopfront_core::money::Money;
/// use shopfront_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_units(50)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-1)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a per-unit shipping weight. Must be non-negative.
pub fn validate_weight(weight: Weight) -> ValidationResult<()> {
    if weight.grams() < 0 {
        return Err(ValidationError::OutOfRange {
            field: "weight".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a shipping rate. Must be non-negative; zero means free shipping.
pub fn validate_shipping_rate(rate: ShippingRate) -> ValidationResult<()> {
    if rate.cents_per_kg() < 0 {
        return Err(ValidationError::OutOfRange {
            field: "shipping rate".to_string(),
            min: 0,
            max: i64::MAX,
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
        assert!(validate_product_name("Biscuits").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(1000).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_stock() {
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(10).is_ok());
        assert!(validate_stock(-1).is_err());
    }

    #[test]
    fn test_validate_weight_and_rate() {
        assert!(validate_weight(Weight::zero()).is_ok());
        assert!(validate_weight(Weight::from_grams(-1)).is_err());

        assert!(validate_shipping_rate(ShippingRate::STANDARD).is_ok());
        assert!(validate_shipping_rate(ShippingRate::from_cents_per_kg(0)).is_ok());
        assert!(validate_shipping_rate(ShippingRate::from_cents_per_kg(-1)).is_err());
    }
}
