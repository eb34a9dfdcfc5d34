//! # Sample Data
//!
//! The fixed shelf and shopping list used by a run.
//!
//! ## Shelf
//! | Product     | Price | Stock | Weight | Kind                  |
//! |-------------|-------|-------|--------|-----------------------|
//! | Cheese      | 100   | 10    | 0.2kg  | expirable, shippable  |
//! | Biscuits    | 150   | 5     | 0.7kg  | expirable, shippable  |
//! | TV          | 300   | 3     | 5kg    | shippable             |
//! | Mobile      | 500   | 4     | -      | -                     |
//! | ScratchCard | 50    | 10    | -      | -                     |
//!
//! ## Shopping List
//! 2x Cheese, 1x Biscuits, 1x ScratchCard

use shopfront_core::{Catalog, CoreResult, Money, Product, ProductId, ProductKind, Weight};

/// Ids of the sample products inside the seeded catalog.
#[derive(Debug, Clone, Copy)]
pub struct SampleIds {
    pub cheese: ProductId,
    pub biscuits: ProductId,
    pub tv: ProductId,
    pub mobile: ProductId,
    pub scratch_card: ProductId,
}

/// Product definitions: (kind, name, price in units, stock)
const SHELF: &[(ProductKind, &str, i64, i64)] = &[
    (
        ProductKind::Cheese {
            weight: Weight::from_grams(200),
        },
        "Cheese",
        100,
        10,
    ),
    (
        ProductKind::Biscuits {
            weight: Weight::from_grams(700),
        },
        "Biscuits",
        150,
        5,
    ),
    (
        ProductKind::Tv {
            weight: Weight::from_kilograms(5),
        },
        "TV",
        300,
        3,
    ),
    (ProductKind::Mobile, "Mobile", 500, 4),
    (ProductKind::ScratchCard, "ScratchCard", 50, 10),
];

/// Builds the sample catalog.
pub fn sample_catalog() -> CoreResult<(Catalog, SampleIds)> {
    let mut catalog = Catalog::new();
    let mut ids = Vec::with_capacity(SHELF.len());

    for &(kind, name, price, stock) in SHELF {
        let product = Product::new(kind, name, Money::from_units(price), stock)?;
        ids.push(catalog.insert(product));
    }

    let ids = SampleIds {
        cheese: ids[0],
        biscuits: ids[1],
        tv: ids[2],
        mobile: ids[3],
        scratch_card: ids[4],
    };
    Ok((catalog, ids))
}

/// What the sample customer puts in the cart, in order.
pub fn shopping_list(ids: &SampleIds) -> Vec<(ProductId, i64)> {
    vec![(ids.cheese, 2), (ids.biscuits, 1), (ids.scratch_card, 1)]
}
