//! Order items and the order summary.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use super::garment::Garment;
use super::price::Rupees;

/// A catalog garment with a positive quantity.
///
/// The unit price is always the catalog price of the garment; it is derived,
/// never stored, so the two cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderItem {
    garment: Garment,
    quantity: NonZeroU32,
}

impl OrderItem {
    /// Create an order item. Returns `None` for a zero quantity.
    #[must_use]
    pub fn new(garment: Garment, quantity: u32) -> Option<Self> {
        NonZeroU32::new(quantity).map(|quantity| Self { garment, quantity })
    }

    /// The garment ordered.
    #[must_use]
    pub const fn garment(&self) -> Garment {
        self.garment
    }

    /// Display name of the garment.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.garment.name()
    }

    /// Number of pieces, always at least 1.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// Catalog price for one piece.
    #[must_use]
    pub const fn unit_price(&self) -> Rupees {
        self.garment.unit_price()
    }

    /// `unit_price × quantity`.
    #[must_use]
    pub fn line_total(&self) -> Rupees {
        self.unit_price() * self.quantity()
    }
}

/// Items and total computed from a single quantities snapshot.
///
/// This is what the order-summary panel shows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderSummary {
    pub items: Vec<OrderItem>,
    pub total: Rupees,
}

impl OrderSummary {
    /// Returns true when nothing has been ordered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of pieces across all items.
    #[must_use]
    pub fn piece_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity())).sum()
    }
}
