//! Integration tests for the calculator form through to the order link.

#![allow(clippy::unwrap_used)]

use staym_laundry_core::{
    CheckoutError, FormEvent, Garment, LaundryForm, Rupees, WHATSAPP_BASE_URL,
    build_deep_link_with_base, prepare_order_link,
};

fn quantity(garment: Garment, input: &str) -> FormEvent {
    FormEvent::QuantityChanged {
        garment,
        input: input.to_string(),
    }
}

fn customer_events() -> Vec<FormEvent> {
    vec![
        FormEvent::NameChanged {
            value: "  Asha Patil ".to_string(),
        },
        FormEvent::PhoneChanged {
            value: "+91 98220-12345".to_string(),
        },
        FormEvent::AddressChanged {
            value: "Kothrud, Pune".to_string(),
        },
        FormEvent::SubmitCustomer,
    ]
}

#[test]
fn test_full_order_message_and_link() {
    let form = LaundryForm::new()
        .apply_all([
            quantity(Garment::Shirt, "3"),
            quantity(Garment::DrillingSaree, "1"),
            FormEvent::CalculateTotal,
        ])
        .apply_all(customer_events());

    assert_eq!(form.total, Rupees::new(180));
    assert!(form.customer_status.all_valid());

    let draft = form.checkout().unwrap();
    assert_eq!(
        draft.message(),
        "Hello! I would like to place a laundry order:\n\n\
         📋 Customer Details:\n\
         Name: Asha Patil\n\
         Contact: +91 98220-12345\n\
         Address: Kothrud, Pune\n\n\
         🧺 Order Items:\n\
         Shirt × 3 = ₹30\n\
         Drilling Saree × 1 = ₹150\n\n\
         💰 Grand Total: ₹180"
    );

    let link = draft.deep_link("+91 724-890-3366");
    assert!(link.starts_with("https://wa.me/+917248903366?text=Hello%21%20I%20would"));

    let prepared =
        prepare_order_link(&draft.items, draft.total, "+917248903366", &draft.customer.contact())
            .unwrap();
    assert_eq!(prepared, link);
}

#[test]
fn test_invalid_customer_blocks_checkout_and_edit_clears_error() {
    let form = LaundryForm::new()
        .apply(quantity(Garment::Pant, "2"))
        .apply_all([
            FormEvent::NameChanged {
                value: "Asha".to_string(),
            },
            FormEvent::PhoneChanged {
                value: "98-22".to_string(),
            },
            FormEvent::SubmitCustomer,
        ]);

    assert!(!form.customer_status.phone.is_valid);
    assert!(!form.customer_status.address.is_valid);
    assert!(form.customer_status.name.is_valid);
    assert!(matches!(
        form.checkout(),
        Err(CheckoutError::InvalidCustomer(_))
    ));

    let form = form.apply(FormEvent::PhoneChanged {
        value: "9822012345".to_string(),
    });
    assert!(form.customer_status.phone.is_valid);
    assert!(!form.customer_status.address.is_valid);
}

#[test]
fn test_empty_order_has_no_link() {
    let form = LaundryForm::new().apply_all(customer_events());
    assert_eq!(form.checkout(), Err(CheckoutError::EmptyOrder));
    assert_eq!(
        prepare_order_link(&[], Rupees::ZERO, "+917248903366", &form.contact()),
        None
    );
}

#[test]
fn test_custom_link_base() {
    let link = build_deep_link_with_base("https://api.whatsapp.com/send/", "7248903366", "hi");
    assert_eq!(link, "https://api.whatsapp.com/send/7248903366?text=hi");
    assert!(WHATSAPP_BASE_URL.starts_with("https://"));
}
