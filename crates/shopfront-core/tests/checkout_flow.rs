//! End-to-end checkout against the standard sample shelf.

use proptest::prelude::*;
use shopfront_core::{
    checkout, render, Cart, Catalog, CoreError, Customer, Money, Product, ProductId, ProductKind,
    Weight,
};

struct Shelf {
    catalog: Catalog,
    cheese: ProductId,
    biscuits: ProductId,
    scratch_card: ProductId,
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
    let biscuits = catalog.insert(
        Product::new(
            ProductKind::Biscuits {
                weight: Weight::from_grams(700),
            },
            "Biscuits",
            Money::from_units(150),
            5,
        )
        .unwrap(),
    );
    let scratch_card = catalog.insert(
        Product::new(ProductKind::ScratchCard, "ScratchCard", Money::from_units(50), 10).unwrap(),
    );
    Shelf {
        catalog,
        cheese,
        biscuits,
        scratch_card,
    }
}

#[test]
fn test_successful_checkout_end_to_end() {
    let mut shelf = shelf();
    let mut cart = Cart::new();
    cart.add(&mut shelf.catalog, shelf.cheese, 2).unwrap();
    cart.add(&mut shelf.catalog, shelf.biscuits, 1).unwrap();
    cart.add(&mut shelf.catalog, shelf.scratch_card, 1).unwrap();

    assert_eq!(cart.subtotal(), Money::from_units(400));
    assert_eq!(cart.total_shipping_weight(), Weight::from_grams(1100));
    assert_eq!(cart.shipping_cost(), Money::from_units(11));

    let mut customer = Customer::new("Malak", Money::from_units(1000));
    let receipt = checkout::checkout(&mut customer, &mut cart).unwrap();

    assert_eq!(receipt.amount, Money::from_units(411));
    assert_eq!(customer.balance(), Money::from_units(589));
    assert!(cart.is_empty());

    assert_eq!(shelf.catalog.stock_of(shelf.cheese).unwrap(), 8);
    assert_eq!(shelf.catalog.stock_of(shelf.biscuits).unwrap(), 4);
    assert_eq!(shelf.catalog.stock_of(shelf.scratch_card).unwrap(), 9);

    assert_eq!(
        render::render(&receipt),
        "** Shipment notice **\n\
         2x Cheese 400g\n\
         1x Biscuits 700g\n\
         Total package weight 1.1kg\n\
         ** Checkout receipt **\n\
         2x Cheese 200\n\
         1x Biscuits 150\n\
         1x ScratchCard 50\n\
         ----------------------\n\
         Subtotal 400\n\
         Shipping 11\n\
         Amount 411\n\
         Remaining Balance: 589\n\
         END.\n"
    );
}

#[test]
fn test_failed_checkout_keeps_add_time_stock_deduction() {
    let mut shelf = shelf();
    let mut cart = Cart::new();
    cart.add(&mut shelf.catalog, shelf.biscuits, 5).unwrap();

    let mut customer = Customer::new("Malak", Money::from_units(100));
    let err = checkout::checkout(&mut customer, &mut cart).unwrap_err();

    assert!(matches!(err, CoreError::InsufficientBalance { .. }));
    assert_eq!(render::error_line(&err), "Error: Insufficient balance.");
    assert_eq!(customer.balance(), Money::from_units(100));
    assert_eq!(cart.item_count(), 1);
    assert_eq!(shelf.catalog.stock_of(shelf.biscuits).unwrap(), 0);
}

#[test]
fn test_rejected_add_reports_product_name() {
    let mut shelf = shelf();
    let mut cart = Cart::new();

    let err = cart.add(&mut shelf.catalog, shelf.biscuits, 6).unwrap_err();

    assert_eq!(
        render::error_line(&err),
        "Error: Not enough stock for Biscuits"
    );
    assert!(cart.is_empty());
    assert_eq!(shelf.catalog.stock_of(shelf.biscuits).unwrap(), 5);
}

#[test]
fn test_huge_quantity_is_rejected_before_checkout() {
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
    let mut cart = Cart::new();

    let err = cart
        .add(&mut catalog, tv, 1_000_000_000_000_000)
        .unwrap_err();
    assert!(render::error_line(&err).starts_with("Error: quantity must be between 1 and "));

    let mut customer = Customer::new("Malak", Money::from_cents(i64::MAX));
    let err = checkout::checkout(&mut customer, &mut cart).unwrap_err();
    assert!(matches!(err, CoreError::EmptyCart));
    assert_eq!(customer.balance(), Money::from_cents(i64::MAX));
}

#[test]
fn test_receipt_serializes() {
    let mut shelf = shelf();
    let mut cart = Cart::new();
    cart.add(&mut shelf.catalog, shelf.cheese, 1).unwrap();

    let customer = Customer::new("Malak", Money::from_units(1000));
    let receipt = checkout::prepare(&customer, &cart).unwrap();

    let json = serde_json::to_value(&receipt).unwrap();
    assert_eq!(json["customer"], "Malak");
    assert_eq!(json["amount"], 10_200);
    assert_eq!(json["shipments"][0]["weight"], 200);
}

proptest! {
    /// Stock only ever drops by what was successfully added.
    #[test]
    fn prop_stock_invariant(adds in prop::collection::vec((0usize..3, -2i64..8), 0..20)) {
        let mut shelf = shelf();
        let ids = [shelf.cheese, shelf.biscuits, shelf.scratch_card];
        let initial: Vec<i64> = ids.iter().map(|id| shelf.catalog.stock_of(*id).unwrap()).collect();
        let mut added = [0i64; 3];
        let mut cart = Cart::new();

        for (slot, qty) in adds {
            let before_items = cart.item_count();
            let before_stock = shelf.catalog.stock_of(ids[slot]).unwrap();
            match cart.add(&mut shelf.catalog, ids[slot], qty) {
                Ok(()) => added[slot] += qty,
                Err(_) => {
                    prop_assert_eq!(cart.item_count(), before_items);
                    prop_assert_eq!(shelf.catalog.stock_of(ids[slot]).unwrap(), before_stock);
                }
            }
        }

        for (i, id) in ids.iter().enumerate() {
            let stock = shelf.catalog.stock_of(*id).unwrap();
            prop_assert!(stock >= 0);
            prop_assert_eq!(stock, initial[i] - added[i]);
        }
        prop_assert_eq!(cart.total_quantity(), added.iter().sum::<i64>());
    }

    /// Subtotal and weight do not depend on the order items were added.
    #[test]
    fn prop_totals_are_order_independent(picks in prop::collection::vec((0usize..3, 1i64..3), 1..6)) {
        let forward = {
            let mut shelf = shelf();
            let ids = [shelf.cheese, shelf.biscuits, shelf.scratch_card];
            let mut cart = Cart::new();
            for (slot, qty) in picks.iter() {
                let _ = cart.add(&mut shelf.catalog, ids[*slot], *qty);
            }
            cart
        };
        let backward = {
            let mut shelf = shelf();
            let ids = [shelf.cheese, shelf.biscuits, shelf.scratch_card];
            let mut cart = Cart::new();
            // keep only the lines the forward pass accepted
            for item in forward.items().iter().rev() {
                let slot = ids.iter().position(|id| *id == item.product_id).unwrap();
                cart.add(&mut shelf.catalog, ids[slot], item.quantity).unwrap();
            }
            cart
        };

        let expected: Money = forward.items().iter().map(|i| i.unit_price * i.quantity).sum();
        prop_assert_eq!(forward.subtotal(), expected);
        prop_assert_eq!(forward.subtotal(), backward.subtotal());
        prop_assert_eq!(forward.total_shipping_weight(), backward.total_shipping_weight());
        // 10 per kg is one cent per gram
        prop_assert_eq!(
            forward.shipping_cost().cents(),
            forward.total_shipping_weight().grams()
        );
    }
}
