//! Calculator form state and its reducer.
//!
//! The state is plain data (serializable, no framework types). Every user
//! interaction is a [`FormEvent`] applied with [`LaundryForm::apply`], which
//! returns the next state. Validation runs only on explicit submit events,
//! and editing a field clears only that field's error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::deep_link::build_deep_link;
use crate::message::compose_order_message;
use crate::pricing::{compute_total, derive_order_items};
use crate::types::{
    ContactDetails, CustomerDetails, CustomerErrors, Field, FieldStatus, Garment, OrderItem,
    Quantities, Rupees,
};

/// A user interaction with the calculator form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormEvent {
    /// A quantity input changed. The raw text is normalized.
    QuantityChanged { garment: Garment, input: String },
    /// The "calculate total" button was pressed.
    CalculateTotal,
    NameChanged { value: String },
    PhoneChanged { value: String },
    AddressChanged { value: String },
    /// The customer pressed "place order": validate name, phone, and address.
    SubmitCustomer,
    DomainChanged { value: String },
    /// A domain check finished. `Err` carries the message to display.
    DomainChecked { outcome: Result<(), String> },
}

/// Custom domain input and the outcome of the last check.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DomainField {
    pub value: String,
    pub error: Option<String>,
    pub success: bool,
}

/// Everything the calculator page shows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LaundryForm {
    pub quantities: Quantities,
    /// Snapshot from the last [`FormEvent::CalculateTotal`].
    pub total: Rupees,
    pub customer: CustomerDetails,
    pub customer_status: CustomerStatus,
    pub domain: DomainField,
}

/// Serializable validity of each customer field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerStatus {
    pub name: FieldStatus,
    pub phone: FieldStatus,
    pub address: FieldStatus,
}

impl Default for CustomerStatus {
    fn default() -> Self {
        Self {
            name: FieldStatus::valid(),
            phone: FieldStatus::valid(),
            address: FieldStatus::valid(),
        }
    }
}

impl From<&CustomerErrors> for CustomerStatus {
    fn from(errors: &CustomerErrors) -> Self {
        Self {
            name: errors.status(Field::CustomerName),
            phone: errors.status(Field::Phone),
            address: errors.status(Field::Address),
        }
    }
}

impl CustomerStatus {
    /// Returns true when every field is valid.
    #[must_use]
    pub const fn all_valid(&self) -> bool {
        self.name.is_valid && self.phone.is_valid && self.address.is_valid
    }
}

/// Why an order could not be placed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// Every quantity is 0.
    #[error("Add at least one item before placing an order.")]
    EmptyOrder,
    /// At least one customer field failed validation.
    #[error("Please fix the highlighted customer details.")]
    InvalidCustomer(CustomerErrors),
}

/// A validated order, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub items: Vec<OrderItem>,
    pub total: Rupees,
    pub customer: CustomerDetails,
}

impl OrderDraft {
    /// The plain-text order message.
    #[must_use]
    pub fn message(&self) -> String {
        compose_order_message(&self.items, self.total, &self.customer.contact())
    }

    /// Deep link that opens a chat with `business_phone` prefilled with
    /// [`OrderDraft::message`].
    #[must_use]
    pub fn deep_link(&self, business_phone: &str) -> String {
        build_deep_link(business_phone, &self.message())
    }
}

impl LaundryForm {
    /// Fresh form: all quantities 0, total ₹0, no errors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event and return the next state.
    #[must_use]
    pub fn apply(mut self, event: FormEvent) -> Self {
        match event {
            FormEvent::QuantityChanged { garment, input } => {
                self.quantities.set_from_input(garment, &input);
            }
            FormEvent::CalculateTotal => {
                self.total = compute_total(&self.quantities);
            }
            FormEvent::NameChanged { value } => {
                self.customer.name = value;
                self.customer_status.name = FieldStatus::valid();
            }
            FormEvent::PhoneChanged { value } => {
                self.customer.phone = value;
                self.customer_status.phone = FieldStatus::valid();
            }
            FormEvent::AddressChanged { value } => {
                self.customer.address = value;
                self.customer_status.address = FieldStatus::valid();
            }
            FormEvent::SubmitCustomer => {
                self.customer_status = CustomerStatus::from(&self.customer.validate());
            }
            FormEvent::DomainChanged { value } => {
                self.domain = DomainField {
                    value,
                    error: None,
                    success: false,
                };
            }
            FormEvent::DomainChecked { outcome } => {
                self.domain.success = outcome.is_ok();
                self.domain.error = outcome.err();
            }
        }
        self
    }

    /// Apply a sequence of events in order.
    #[must_use]
    pub fn apply_all(self, events: impl IntoIterator<Item = FormEvent>) -> Self {
        events.into_iter().fold(self, Self::apply)
    }

    /// Current order items for the summary panel.
    #[must_use]
    pub fn order_items(&self) -> Vec<OrderItem> {
        derive_order_items(&self.quantities)
    }

    /// Validate and snapshot the order.
    ///
    /// The draft's total is computed from the same quantities as its items,
    /// so it is correct even if [`FormEvent::CalculateTotal`] was not sent
    /// after the last quantity change.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::EmptyOrder`] when nothing is ordered
    /// - [`CheckoutError::InvalidCustomer`] when a customer field is invalid
    pub fn checkout(&self) -> Result<OrderDraft, CheckoutError> {
        let items = derive_order_items(&self.quantities);
        if items.is_empty() {
            return Err(CheckoutError::EmptyOrder);
        }

        let errors = self.customer.validate();
        if !errors.is_empty() {
            return Err(CheckoutError::InvalidCustomer(errors));
        }

        Ok(OrderDraft {
            items,
            total: compute_total(&self.quantities),
            customer: self.customer.clone(),
        })
    }

    /// Contact fields as they would appear in the message right now.
    #[must_use]
    pub fn contact(&self) -> ContactDetails<'_> {
        self.customer.contact()
    }
}
