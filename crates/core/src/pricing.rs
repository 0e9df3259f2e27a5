//! Pricing engine: quantities to totals and order items.
//!
//! Both functions are pure over the quantities passed in. The calculator's
//! displayed total is a snapshot taken by calling [`compute_total`]; it is not
//! kept in sync with later quantity edits.

use crate::types::{Garment, OrderItem, OrderSummary, Quantities, Rupees};

/// Sum of `quantity × unit price` over the catalog.
///
/// ```
/// use staym_laundry_core::{Garment, Quantities, Rupees, compute_total};
///
/// let quantities = Quantities::new()
///     .with(Garment::Shirt, 2)
///     .with(Garment::DrillingSaree, 1);
/// assert_eq!(compute_total(&quantities), Rupees::new(170));
/// assert_eq!(compute_total(&Quantities::new()), Rupees::ZERO);
/// ```
#[must_use]
pub fn compute_total(quantities: &Quantities) -> Rupees {
    quantities
        .iter()
        .map(|(garment, quantity)| garment.unit_price() * quantity)
        .sum()
}

/// Order items for every garment with a positive quantity, in catalog order.
#[must_use]
pub fn derive_order_items(quantities: &Quantities) -> Vec<OrderItem> {
    Garment::ALL
        .into_iter()
        .filter_map(|garment| OrderItem::new(garment, quantities.get(garment)))
        .collect()
}

/// Items and total from the same snapshot.
#[must_use]
pub fn summarize(quantities: &Quantities) -> OrderSummary {
    OrderSummary {
        items: derive_order_items(quantities),
        total: compute_total(quantities),
    }
}
