//! Customer details captured with an order.

use serde::{Deserialize, Serialize};

use super::phone::PhoneNumber;
use super::validation::{Field, FieldStatus, ValidationError};

/// Validate the customer's name.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyField`] when the trimmed name is empty.
pub fn validate_customer_name(name: &str) -> Result<(), ValidationError> {
    require_non_blank(name, Field::CustomerName)
}

/// Validate the pickup/delivery address.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyField`] when the trimmed address is empty.
pub fn validate_address(address: &str) -> Result<(), ValidationError> {
    require_non_blank(address, Field::Address)
}

fn require_non_blank(value: &str, field: Field) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::EmptyField { field })
    } else {
        Ok(())
    }
}

/// Name, phone, and address as typed by the customer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl CustomerDetails {
    /// Run all three validators.
    #[must_use]
    pub fn validate(&self) -> CustomerErrors {
        CustomerErrors {
            name: validate_customer_name(&self.name).err(),
            phone: self.phone_number().err(),
            address: validate_address(&self.address).err(),
        }
    }

    /// The phone field as a validated [`PhoneNumber`].
    ///
    /// # Errors
    ///
    /// Returns the first phone rule violated.
    pub fn phone_number(&self) -> Result<PhoneNumber, ValidationError> {
        PhoneNumber::parse(&self.phone)
    }

    /// Borrow the details as message contact fields, trimmed.
    #[must_use]
    pub fn contact(&self) -> ContactDetails<'_> {
        ContactDetails {
            name: Some(self.name.trim()),
            contact_number: Some(self.phone.trim()),
            address: Some(self.address.trim()),
        }
    }
}

/// Per-field validation errors. `None` means the field has no error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomerErrors {
    pub name: Option<ValidationError>,
    pub phone: Option<ValidationError>,
    pub address: Option<ValidationError>,
}

impl CustomerErrors {
    /// Returns true when no field has an error.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.address.is_none()
    }

    /// Iterate over the fields that have errors.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        [
            (Field::CustomerName, self.name.as_ref()),
            (Field::Phone, self.phone.as_ref()),
            (Field::Address, self.address.as_ref()),
        ]
        .into_iter()
        .filter_map(|(field, err)| err.map(|e| (field, e)))
    }

    /// Validity view of one field.
    #[must_use]
    pub fn status(&self, field: Field) -> FieldStatus {
        let error = match field {
            Field::CustomerName => self.name.as_ref(),
            Field::Phone => self.phone.as_ref(),
            Field::Address => self.address.as_ref(),
            Field::Domain => None,
        };
        error.map_or_else(FieldStatus::valid, |e| FieldStatus {
            is_valid: false,
            error: Some(e.to_string()),
        })
    }
}

/// Optional contact fields included in an order message.
///
/// A field that is `None` or empty is left out of the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContactDetails<'a> {
    pub name: Option<&'a str>,
    pub contact_number: Option<&'a str>,
    pub address: Option<&'a str>,
}

impl<'a> ContactDetails<'a> {
    /// The name, if present and non-empty.
    #[must_use]
    pub fn name(&self) -> Option<&'a str> {
        self.name.filter(|s| !s.is_empty())
    }

    /// The contact number, if present and non-empty.
    #[must_use]
    pub fn contact_number(&self) -> Option<&'a str> {
        self.contact_number.filter(|s| !s.is_empty())
    }

    /// The address, if present and non-empty.
    #[must_use]
    pub fn address(&self) -> Option<&'a str> {
        self.address.filter(|s| !s.is_empty())
    }

    /// Returns true when at least one field would be shown.
    #[must_use]
    pub fn has_any(&self) -> bool {
        self.name().is_some() || self.contact_number().is_some() || self.address().is_some()
    }
}
