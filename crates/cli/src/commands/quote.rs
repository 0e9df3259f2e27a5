//! Price list and order quotes.
//!
//! # Usage
//!
//! ```bash
//! staym catalog
//! staym quote --shirt 4 --paithani 1
//! staym quote --saree 2 --json
//! staym quote --item "paithani saree=2" --item shirt=3
//! ```

use std::fmt::Write as _;

use staym_laundry_core::{Garment, OrderSummary, summarize};

use super::QuantityArgs;

/// Print every garment with its unit price.
#[allow(clippy::print_stdout)]
pub fn catalog() {
    print!("{}", render_catalog());
}

/// Print the order summary for the given quantities.
///
/// # Errors
///
/// Returns an error if the summary cannot be serialized to JSON.
#[allow(clippy::print_stdout)]
pub fn quote(args: &QuantityArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let summary = summarize(&args.quantities());
    tracing::debug!(
        items = summary.items.len(),
        pieces = summary.piece_count(),
        total = %summary.total,
        "Computed order summary"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", render_summary(&summary));
    }
    Ok(())
}

fn render_catalog() -> String {
    let mut out = String::new();
    for garment in Garment::ALL {
        let _ = writeln!(
            out,
            "{:<16} {:>6}   (--{})",
            garment.name(),
            garment.unit_price().to_string(),
            garment.input_id()
        );
    }
    out
}

fn render_summary(summary: &OrderSummary) -> String {
    if summary.is_empty() {
        return format!("No items selected.\nTotal: {}\n", summary.total);
    }

    let mut out = String::new();
    for item in &summary.items {
        let _ = writeln!(
            out,
            "{} × {} = {}",
            item.name(),
            item.quantity(),
            item.line_total()
        );
    }
    let _ = writeln!(out, "Pieces: {}", summary.piece_count());
    let _ = writeln!(out, "Total: {}", summary.total);
    out
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use staym_laundry_core::Quantities;

    use super::*;

    #[test]
    fn test_catalog_lists_all_garments_in_order() {
        let catalog = render_catalog();
        let lines: Vec<&str> = catalog.lines().collect();
        assert_eq!(lines.len(), Garment::COUNT);
        assert!(lines[0].starts_with("Shirt"));
        assert!(lines[0].contains("₹10"));
        assert!(lines[4].starts_with("Drilling Saree"));
        assert!(lines[4].contains("₹150"));
        assert!(lines[4].contains("--drilling"));
    }

    #[test]
    fn test_summary_lines() {
        let quantities = Quantities::new()
            .with(Garment::Shirt, 2)
            .with(Garment::PaithaniSaree, 1);
        let rendered = render_summary(&summarize(&quantities));
        assert_eq!(
            rendered,
            "Shirt × 2 = ₹20\nPaithani Saree × 1 = ₹100\nPieces: 3\nTotal: ₹120\n"
        );
    }

    #[test]
    fn test_empty_summary() {
        let rendered = render_summary(&summarize(&Quantities::new()));
        assert_eq!(rendered, "No items selected.\nTotal: ₹0\n");
    }
}
