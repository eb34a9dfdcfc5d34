//! # Receipt Rendering
//!
//! Formats a [`Receipt`] into the console text. No printing happens here;
//! the caller decides where the lines go.
//!
//! ## Output Layout
//! ```text
//! ** Shipment notice **
//! 2x Cheese 400g
//! 1x Biscuits 700g
//! Total package weight 1.1kg
//! ** Checkout receipt **
//! 2x Cheese 200
//! 1x Biscuits 150
//! 1x ScratchCard 50
//! ----------------------
//! Subtotal 400
//! Shipping 11
//! Amount 411
//! Remaining Balance: 589
//! END.
//! ```
//!
//! Every money value is printed as whole units truncated toward zero
//! ([`Money::truncated_units`](crate::money::Money::truncated_units)).

use crate::checkout::Receipt;
use crate::error::CoreError;
use crate::weight::Weight;

pub const SHIPMENT_HEADER: &str = "** Shipment notice **";
pub const RECEIPT_HEADER: &str = "** Checkout receipt **";
pub const SEPARATOR: &str = "----------------------";
pub const END_MARKER: &str = "END.";

/// Shipment notice: header, one line per shippable item, package total.
pub fn shipment_notice(receipt: &Receipt) -> Vec<String> {
    let mut lines = Vec::with_capacity(receipt.shipments.len() + 2);
    lines.push(SHIPMENT_HEADER.to_string());
    lines.extend(
        receipt
            .shipments
            .iter()
            .map(|s| format!("{}x {} {}", s.quantity, s.name, s.weight)),
    );
    lines.push(format!(
        "Total package weight {}kg",
        kilograms_one_decimal(receipt.package_weight)
    ));
    lines
}

/// Checkout receipt: header, every item, separator and totals.
pub fn checkout_receipt(receipt: &Receipt) -> Vec<String> {
    let mut lines = Vec::with_capacity(receipt.lines.len() + 5);
    lines.push(RECEIPT_HEADER.to_string());
    lines.extend(receipt.lines.iter().map(|l| {
        format!(
            "{}x {} {}",
            l.quantity,
            l.name,
            l.line_total.truncated_units()
        )
    }));
    lines.push(SEPARATOR.to_string());
    lines.push(format!("Subtotal {}", receipt.subtotal.truncated_units()));
    lines.push(format!("Shipping {}", receipt.shipping.truncated_units()));
    lines.push(format!("Amount {}", receipt.amount.truncated_units()));
    lines
}

/// Settlement footer: remaining balance and end marker.
pub fn settlement(receipt: &Receipt) -> Vec<String> {
    vec![
        format!(
            "Remaining Balance: {}",
            receipt.remaining_balance.truncated_units()
        ),
        END_MARKER.to_string(),
    ]
}

/// All output lines of a successful checkout, in print order.
pub fn render_lines(receipt: &Receipt) -> Vec<String> {
    let mut lines = shipment_notice(receipt);
    lines.extend(checkout_receipt(receipt));
    lines.extend(settlement(receipt));
    lines
}

/// The full checkout output joined with newlines (trailing newline included).
pub fn render(receipt: &Receipt) -> String {
    render_lines(receipt)
        .into_iter()
        .map(|line| line + "\n")
        .collect()
}

/// The single console line reported for a failed operation.
pub fn error_line(err: &CoreError) -> String {
    format!("Error: {}", err)
}

fn kilograms_one_decimal(weight: Weight) -> String {
    let tenths = weight.tenths_of_kg();
    format!("{}.{}", tenths / 10, tenths % 10)
}
