//! Order message composition for WhatsApp ordering.

use std::fmt::Write as _;

use crate::types::{ContactDetails, OrderItem, Rupees};

const GREETING: &str = "Hello! I would like to place a laundry order:";
const CUSTOMER_HEADER: &str = "📋 Customer Details:";
const ITEMS_HEADER: &str = "🧺 Order Items:";
const TOTAL_LABEL: &str = "💰 Grand Total:";

/// Compose the plain-text order message.
///
/// Returns an empty string when `items` is empty; callers must not build a
/// deep link in that case. The customer section is included only when at
/// least one contact field is present, and lists only the present fields.
/// `total` is printed as given and is not recomputed from `items`.
///
/// ```
/// use staym_laundry_core::{ContactDetails, Garment, OrderItem, Rupees, compose_order_message};
///
/// let items = [OrderItem::new(Garment::Shirt, 2).unwrap()];
/// let message = compose_order_message(&items, Rupees::new(20), &ContactDetails::default());
/// assert!(message.contains("Shirt × 2 = ₹20"));
/// assert!(message.ends_with("Grand Total: ₹20"));
/// ```
#[must_use]
pub fn compose_order_message(
    items: &[OrderItem],
    total: Rupees,
    contact: &ContactDetails<'_>,
) -> String {
    if items.is_empty() {
        return String::new();
    }

    let mut message = String::new();
    let _ = writeln!(message, "{GREETING}\n");

    if contact.has_any() {
        let _ = writeln!(message, "{CUSTOMER_HEADER}");
        if let Some(name) = contact.name() {
            let _ = writeln!(message, "Name: {name}");
        }
        if let Some(number) = contact.contact_number() {
            let _ = writeln!(message, "Contact: {number}");
        }
        if let Some(address) = contact.address() {
            let _ = writeln!(message, "Address: {address}");
        }
        message.push('\n');
    }

    let _ = writeln!(message, "{ITEMS_HEADER}");
    for item in items {
        let _ = writeln!(
            message,
            "{} × {} = {}",
            item.name(),
            item.quantity(),
            item.line_total()
        );
    }

    let _ = write!(message, "\n{TOTAL_LABEL} {total}");
    message
}
