//! # Customer
//!
//! A named customer with a spending balance.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// The paying customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    balance: Money,
}

impl Customer {
    pub fn new(name: impl Into<String>, balance: Money) -> Self {
        Customer {
            name: name.into(),
            balance,
        }
    }

    #[inline]
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// `true` when the balance covers `amount` exactly or with money left.
    #[inline]
    pub fn can_afford(&self, amount: Money) -> bool {
        self.balance >= amount
    }

    /// Subtracts `amount` without re-checking; call [`Customer::can_afford`] first.
    #[inline]
    pub fn deduct(&mut self, amount: Money) {
        self.balance -= amount;
    }
}
