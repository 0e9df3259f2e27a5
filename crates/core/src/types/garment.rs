//! The fixed garment catalog.
//!
//! Prices are known at build time. [`Garment::ALL`] is the display order used
//! everywhere items are listed (calculator rows, order summary, messages).

use core::fmt;

use serde::{Deserialize, Serialize};

use super::price::Rupees;

/// A garment category with a fixed unit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Garment {
    #[serde(rename = "Shirt")]
    Shirt,
    #[serde(rename = "Pant")]
    Pant,
    #[serde(rename = "Saree")]
    Saree,
    #[serde(rename = "Paithani Saree")]
    PaithaniSaree,
    #[serde(rename = "Drilling Saree")]
    DrillingSaree,
}

impl Garment {
    /// Number of catalog entries.
    pub const COUNT: usize = 5;

    /// Every garment, in display order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Shirt,
        Self::Pant,
        Self::Saree,
        Self::PaithaniSaree,
        Self::DrillingSaree,
    ];

    /// Display name, as shown to customers and in order messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shirt => "Shirt",
            Self::Pant => "Pant",
            Self::Saree => "Saree",
            Self::PaithaniSaree => "Paithani Saree",
            Self::DrillingSaree => "Drilling Saree",
        }
    }

    /// Short input id used by the calculator form.
    #[must_use]
    pub const fn input_id(self) -> &'static str {
        match self {
            Self::Shirt => "shirt",
            Self::Pant => "pant",
            Self::Saree => "saree",
            Self::PaithaniSaree => "paithani",
            Self::DrillingSaree => "drilling",
        }
    }

    /// Catalog price for one piece.
    #[must_use]
    pub const fn unit_price(self) -> Rupees {
        match self {
            Self::Shirt | Self::Pant => Rupees::new(10),
            Self::Saree => Rupees::new(50),
            Self::PaithaniSaree => Rupees::new(100),
            Self::DrillingSaree => Rupees::new(150),
        }
    }
}

impl fmt::Display for Garment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Garment {
    type Err = String;

    /// Accepts either the display name or the input id, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|g| {
                g.name().eq_ignore_ascii_case(needle) || g.input_id().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| format!("unknown garment: {s}"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_prices() {
        assert_eq!(Garment::Shirt.unit_price(), Rupees::new(10));
        assert_eq!(Garment::Pant.unit_price(), Rupees::new(10));
        assert_eq!(Garment::Saree.unit_price(), Rupees::new(50));
        assert_eq!(Garment::PaithaniSaree.unit_price(), Rupees::new(100));
        assert_eq!(Garment::DrillingSaree.unit_price(), Rupees::new(150));
    }

    #[test]
    fn test_from_str_accepts_name_and_input_id() {
        assert_eq!("Paithani Saree".parse::<Garment>().unwrap(), Garment::PaithaniSaree);
        assert_eq!("drilling".parse::<Garment>().unwrap(), Garment::DrillingSaree);
        assert_eq!("SHIRT".parse::<Garment>().unwrap(), Garment::Shirt);
        assert!("towel".parse::<Garment>().is_err());
    }

    #[test]
    fn test_serde_uses_display_name() {
        let json = serde_json::to_string(&Garment::DrillingSaree).unwrap();
        assert_eq!(json, "\"Drilling Saree\"");
    }
}
