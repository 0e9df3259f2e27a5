//! STAYM Laundry Core - pricing and validation rules.
//!
//! This crate holds the business rules shared by every STAYM Laundry front end:
//! - `client` - remote domain validation and configuration
//! - `cli` - command-line calculator and order link builder
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no async. Remote validation lives in `staym-laundry-client` and
//! only accepts a [`DomainName`] that already passed local validation.
//!
//! # Modules
//!
//! - [`types`] - Catalog, money, quantities, order items, validated input
//! - [`pricing`] - Totals and order items from quantities
//! - [`message`] - Order message composition
//! - [`deep_link`] - WhatsApp click-to-chat links
//! - [`form`] - Serializable calculator state and its reducer

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod deep_link;
pub mod form;
pub mod message;
pub mod pricing;
pub mod types;

pub use deep_link::{
    WHATSAPP_BASE_URL, build_deep_link, build_deep_link_with_base, normalize_phone,
    prepare_order_link,
};
pub use form::{CheckoutError, FormEvent, LaundryForm, OrderDraft};
pub use message::compose_order_message;
pub use pricing::{compute_total, derive_order_items, summarize};
pub use types::*;
