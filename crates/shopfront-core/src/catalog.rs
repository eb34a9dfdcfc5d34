//! # Catalog
//!
//! Owns every product and is the single authority on stock.
//!
//! Carts never hold a product; they hold a [`ProductId`] plus a frozen
//! snapshot of the fields they print. Taking stock goes through
//! [`Catalog::take_stock`], which needs `&mut Catalog`, so two carts can
//! never decrement the same product through aliased references.

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::types::{Product, ProductId};

/// Product catalog in insertion order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog {
            products: Vec::new(),
        }
    }

    /// Adds a product and returns its id.
    pub fn insert(&mut self, product: Product) -> ProductId {
        let id = ProductId::new(self.products.len());
        self.products.push(product);
        id
    }

    /// Looks up a product.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(id.index())
    }

    /// Looks up a product, failing with `ProductNotFound`.
    pub fn product(&self, id: ProductId) -> CoreResult<&Product> {
        self.get(id).ok_or(CoreError::ProductNotFound(id))
    }

    /// Remaining stock of a product.
    pub fn stock_of(&self, id: ProductId) -> CoreResult<i64> {
        self.product(id).map(Product::stock)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterates products with their ids, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ProductId, &Product)> {
        self.products
            .iter()
            .enumerate()
            .map(|(index, product)| (ProductId::new(index), product))
    }

    /// Removes `quantity` units from a product's stock.
    ///
    /// ## Behavior
    /// - Unknown id: `ProductNotFound`
    /// - `quantity` above remaining stock: `InsufficientStock`, nothing changes
    /// - Otherwise stock drops by `quantity` and the product is returned
    ///
    /// `quantity` is assumed already validated as positive.
    pub fn take_stock(&mut self, id: ProductId, quantity: i64) -> CoreResult<&Product> {
        let product = self
            .products
            .get_mut(id.index())
            .ok_or(CoreError::ProductNotFound(id))?;

        if !product.can_sell(quantity) {
            return Err(CoreError::InsufficientStock {
                name: product.name().to_string(),
                available: product.stock(),
                requested: quantity,
            });
        }

        product.take_stock(quantity);
        Ok(product)
    }
}
