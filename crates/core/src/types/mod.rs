//! Core types for STAYM Laundry.
//!
//! This module provides type-safe wrappers for the catalog, money amounts,
//! order items, and validated customer input.

pub mod customer;
pub mod domain;
pub mod garment;
pub mod order;
pub mod phone;
pub mod price;
pub mod quantity;
pub mod status;
pub mod validation;

pub use customer::{
    ContactDetails, CustomerDetails, CustomerErrors, validate_address, validate_customer_name,
};
pub use domain::{DomainName, validate_domain_local};
pub use garment::Garment;
pub use order::{OrderItem, OrderSummary};
pub use phone::{MIN_PHONE_DIGITS, PhoneNumber, validate_phone};
pub use price::{RUPEE_SYMBOL, Rupees};
pub use quantity::{Quantities, parse_quantity_input};
pub use status::CheckStatus;
pub use validation::{Field, FieldStatus, ValidationError};
