//! Subcommand implementations.
//!
//! Command output goes to stdout; diagnostics go through `tracing`.

pub mod domain;
pub mod order;
pub mod quote;

use clap::Args;

use staym_laundry_core::{Garment, Quantities};

/// Per-garment quantity flags shared by `quote` and `order`.
///
/// Values are taken as typed and normalized the same way the calculator
/// form does, so `--shirt abc` or `--shirt -2` count as 0.
#[derive(Debug, Clone, Default, Args)]
pub struct QuantityArgs {
    /// Number of shirts
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub shirt: String,

    /// Number of pants
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub pant: String,

    /// Number of sarees
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub saree: String,

    /// Number of Paithani sarees
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub paithani: String,

    /// Number of drilling sarees
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub drilling: String,

    /// Quantity by garment name or id, e.g. `--item "paithani saree=2"`.
    /// Repeatable; applied after the per-garment flags.
    #[arg(long = "item", value_name = "GARMENT=N", value_parser = parse_item)]
    pub items: Vec<(Garment, String)>,
}

/// Parse `GARMENT=N`. The garment is matched by display name or input id.
fn parse_item(raw: &str) -> Result<(Garment, String), String> {
    let (garment, quantity) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected GARMENT=N, got {raw:?}"))?;
    Ok((garment.parse()?, quantity.to_owned()))
}

impl QuantityArgs {
    /// Raw input per garment: the flags in catalog order, then each
    /// `--item` in the order given. Later entries overwrite earlier ones.
    pub fn inputs(&self) -> Vec<(Garment, &str)> {
        let flags = [
            (Garment::Shirt, self.shirt.as_str()),
            (Garment::Pant, self.pant.as_str()),
            (Garment::Saree, self.saree.as_str()),
            (Garment::PaithaniSaree, self.paithani.as_str()),
            (Garment::DrillingSaree, self.drilling.as_str()),
        ];
        let items = self
            .items
            .iter()
            .map(|(garment, input)| (*garment, input.as_str()));
        flags.into_iter().chain(items).collect()
    }

    /// Normalized quantities.
    pub fn quantities(&self) -> Quantities {
        let mut quantities = Quantities::new();
        for (garment, input) in self.inputs() {
            quantities.set_from_input(garment, input);
        }
        quantities
    }
}
