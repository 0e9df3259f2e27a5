//! STAYM Laundry CLI - price calculator, order links, and domain checks.
//!
//! # Usage
//!
//! ```bash
//! # Show the price list
//! staym catalog
//!
//! # Price an order
//! staym quote --shirt 4 --saree 1
//!
//! # Build a WhatsApp order link
//! staym order --shirt 2 --name "Asha Patil" --phone "+91 98220 12345" --address "Pune"
//!
//! # Check a custom domain (local rules, then the backend)
//! staym domain staym-laundry
//! ```
//!
//! # Commands
//!
//! - `catalog` - List garments and prices
//! - `quote` - Print the order summary and total
//! - `order` - Validate customer details and print the order message and link
//! - `domain` - Validate a custom domain

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

use commands::QuantityArgs;

#[derive(Parser)]
#[command(name = "staym")]
#[command(author, version, about = "STAYM Laundry price calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List garments and unit prices
    Catalog,
    /// Price an order
    Quote {
        #[command(flatten)]
        quantities: QuantityArgs,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build a WhatsApp order message and link
    Order {
        #[command(flatten)]
        quantities: QuantityArgs,

        /// Customer name
        #[arg(short, long, default_value = "")]
        name: String,

        /// Customer phone number
        #[arg(short, long, default_value = "")]
        phone: String,

        /// Pickup/delivery address
        #[arg(short, long, default_value = "")]
        address: String,

        /// Business WhatsApp number (defaults to `STAYM_WHATSAPP_NUMBER`)
        #[arg(long)]
        to: Option<String>,
    },
    /// Validate a custom domain name
    Domain {
        /// Domain to check (e.g., staym-laundry)
        name: String,

        /// Only run the local rules, never contact the backend
        #[arg(long)]
        local_only: bool,
    },
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout carries only command output
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "staym=info,staym_laundry_client=info".into());

    let json = std::env::var("STAYM_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Catalog => commands::quote::catalog(),
        Commands::Quote { quantities, json } => commands::quote::quote(&quantities, json)?,
        Commands::Order {
            quantities,
            name,
            phone,
            address,
            to,
        } => {
            let customer = commands::order::CustomerArgs {
                name,
                phone,
                address,
            };
            commands::order::order(&quantities, customer, to.as_deref())?;
        }
        Commands::Domain { name, local_only } => {
            commands::domain::check(&name, local_only).await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use staym_laundry_core::Garment;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_order_args() {
        let cli = Cli::parse_from([
            "staym", "order", "--shirt", "2", "--name", "Asha", "--phone", "9822012345",
            "--address", "Pune", "--to", "+911234567890",
        ]);
        let Commands::Order {
            quantities, to, ..
        } = cli.command
        else {
            panic!("expected order command");
        };
        assert_eq!(quantities.shirt, "2");
        assert_eq!(to.as_deref(), Some("+911234567890"));
    }

    #[test]
    fn test_parse_repeated_items() {
        let cli = Cli::parse_from(["staym", "quote", "--item", "saree=2", "--item", "drilling=1"]);
        let Commands::Quote { quantities, .. } = cli.command else {
            panic!("expected quote command");
        };
        assert_eq!(quantities.quantities().get(Garment::Saree), 2);
        assert_eq!(quantities.quantities().get(Garment::DrillingSaree), 1);
        assert!(Cli::try_parse_from(["staym", "quote", "--item", "towel=1"]).is_err());
    }
}
