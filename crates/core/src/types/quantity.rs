//! Per-garment quantities entered on the calculator.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::garment::Garment;

/// Normalize raw quantity input to a count.
///
/// Takes the leading integer prefix after optional whitespace and sign, the
/// way a browser number field is usually read. Anything non-numeric, empty,
/// or negative becomes 0. Values past `u32::MAX` saturate.
///
/// ```
/// use staym_laundry_core::parse_quantity_input;
///
/// assert_eq!(parse_quantity_input("3"), 3);
/// assert_eq!(parse_quantity_input(" 12abc"), 12);
/// assert_eq!(parse_quantity_input("-4"), 0);
/// assert_eq!(parse_quantity_input(""), 0);
/// ```
#[must_use]
pub fn parse_quantity_input(input: &str) -> u32 {
    let trimmed = input.trim_start();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = unsigned.get(..end).unwrap_or_default();

    if negative || digits.is_empty() {
        return 0;
    }

    digits.bytes().fold(0_u32, |acc, b| {
        acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
    })
}

/// Quantity per garment. Garments without an entry count as 0.
///
/// Zero counts are never stored, so two `Quantities` compare equal whenever
/// every garment has the same count.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Garment, u32>", into = "BTreeMap<Garment, u32>")]
pub struct Quantities(BTreeMap<Garment, u32>);

impl Quantities {
    /// Empty quantities (every garment at 0).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, garment: Garment, quantity: u32) -> Self {
        self.set(garment, quantity);
        self
    }

    /// Quantity for a garment.
    #[must_use]
    pub fn get(&self, garment: Garment) -> u32 {
        self.0.get(&garment).copied().unwrap_or(0)
    }

    /// Set the quantity for a garment.
    pub fn set(&mut self, garment: Garment, quantity: u32) {
        if quantity == 0 {
            self.0.remove(&garment);
        } else {
            self.0.insert(garment, quantity);
        }
    }

    /// Set the quantity for a garment from raw user input.
    ///
    /// See [`parse_quantity_input`] for the normalization rules.
    pub fn set_from_input(&mut self, garment: Garment, input: &str) {
        self.set(garment, parse_quantity_input(input));
    }

    /// Every garment with its quantity, in display order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (Garment, u32)> + '_ {
        Garment::ALL.into_iter().map(|g| (g, self.get(g)))
    }

    /// Returns true when every garment is at 0.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Garment, u32)> for Quantities {
    fn from_iter<I: IntoIterator<Item = (Garment, u32)>>(iter: I) -> Self {
        let mut quantities = Self::new();
        for (garment, quantity) in iter {
            quantities.set(garment, quantity);
        }
        quantities
    }
}

impl From<BTreeMap<Garment, u32>> for Quantities {
    fn from(map: BTreeMap<Garment, u32>) -> Self {
        map.into_iter().collect()
    }
}

impl From<Quantities> for BTreeMap<Garment, u32> {
    fn from(quantities: Quantities) -> Self {
        quantities.0
    }
}
