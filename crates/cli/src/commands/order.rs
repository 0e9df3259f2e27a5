//! Order placement: validate the customer and print the WhatsApp link.
//!
//! # Usage
//!
//! ```bash
//! staym order --shirt 2 --saree 1 \
//!     --name "Asha Patil" --phone "+91 98220 12345" --address "Kothrud, Pune"
//! ```
//!
//! # Environment Variables
//!
//! - `STAYM_WHATSAPP_NUMBER` - Business number (overridden by `--to`)
//! - `STAYM_DEEP_LINK_BASE` - Click-to-chat base URL

use thiserror::Error;

use staym_laundry_core::{
    CheckoutError, FormEvent, LaundryForm, OrderDraft, build_deep_link_with_base,
};
use staym_laundry_client::{ClientConfig, ConfigError};

use super::QuantityArgs;

/// Errors that can occur while placing an order.
#[derive(Debug, Error)]
pub enum OrderError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The order is empty or the customer details are invalid.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}

/// Customer details as typed on the command line.
#[derive(Debug, Clone, Default)]
pub struct CustomerArgs {
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// Validate the order and print its message and deep link.
///
/// # Errors
///
/// Returns [`OrderError::Checkout`] for an empty order or invalid customer
/// details (each field error is logged first).
#[allow(clippy::print_stdout)]
pub fn order(
    quantities: &QuantityArgs,
    customer: CustomerArgs,
    to: Option<&str>,
) -> Result<(), OrderError> {
    let config = ClientConfig::from_env()?;
    let form = fill_form(quantities, customer);

    let draft = form.checkout().inspect_err(|e| {
        if let CheckoutError::InvalidCustomer(errors) = e {
            for (field, error) in errors.iter() {
                tracing::error!(field = field.label(), "{error}");
            }
        }
    })?;

    let business_phone = to.unwrap_or(&config.whatsapp_number);
    let link = order_link(&draft, &config.deep_link_base, business_phone);
    tracing::info!(
        items = draft.items.len(),
        total = %draft.total,
        "Order ready"
    );

    println!("{}", draft.message());
    println!();
    println!("{link}");
    Ok(())
}

/// Drive the calculator form the same way the page does: quantities, then
/// the calculate button, then customer fields and submit.
fn fill_form(quantities: &QuantityArgs, customer: CustomerArgs) -> LaundryForm {
    let quantity_events = quantities
        .inputs()
        .into_iter()
        .map(|(garment, input)| FormEvent::QuantityChanged {
            garment,
            input: input.to_string(),
        });

    LaundryForm::new()
        .apply_all(quantity_events)
        .apply_all([
            FormEvent::CalculateTotal,
            FormEvent::NameChanged {
                value: customer.name,
            },
            FormEvent::PhoneChanged {
                value: customer.phone,
            },
            FormEvent::AddressChanged {
                value: customer.address,
            },
            FormEvent::SubmitCustomer,
        ])
}

fn order_link(draft: &OrderDraft, base: &str, business_phone: &str) -> String {
    build_deep_link_with_base(base, business_phone, &draft.message())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use staym_laundry_core::{Garment, Rupees, WHATSAPP_BASE_URL};

    use super::*;

    fn customer() -> CustomerArgs {
        CustomerArgs {
            name: "Asha Patil".to_string(),
            phone: "+91 98220 12345".to_string(),
            address: "Kothrud, Pune".to_string(),
        }
    }

    fn two_shirts() -> QuantityArgs {
        QuantityArgs {
            shirt: "2".to_string(),
            ..QuantityArgs::default()
        }
    }

    #[test]
    fn test_fill_form_computes_total() {
        let form = fill_form(&two_shirts(), customer());
        assert_eq!(form.quantities.get(Garment::Shirt), 2);
        assert_eq!(form.total, Rupees::new(20));
        assert!(form.customer_status.all_valid());
    }

    #[test]
    fn test_invalid_customer_is_reported() {
        let form = fill_form(
            &two_shirts(),
            CustomerArgs {
                phone: "12345".to_string(),
                ..customer()
            },
        );
        assert!(!form.customer_status.phone.is_valid);
        let err = form.checkout().unwrap_err();
        assert!(matches!(err, CheckoutError::InvalidCustomer(_)));
    }

    #[test]
    fn test_order_link_uses_business_number() {
        let draft = fill_form(&two_shirts(), customer()).checkout().unwrap();
        let link = order_link(&draft, WHATSAPP_BASE_URL, "+91 724-890-3366");
        assert!(link.starts_with("https://wa.me/+917248903366?text="));
        assert!(link.contains("Asha%20Patil"));
        assert!(!link.contains(' '));
    }
}
