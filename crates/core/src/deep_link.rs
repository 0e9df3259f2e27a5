//! WhatsApp click-to-chat deep links.

use crate::message::compose_order_message;
use crate::types::{ContactDetails, OrderItem, Rupees};

/// Base URL for WhatsApp click-to-chat links.
pub const WHATSAPP_BASE_URL: &str = "https://wa.me/";

/// Strip a phone number down to ASCII digits and an optional leading `+`.
///
/// A `+` is kept only if it comes before every digit, and at most once.
///
/// ```
/// use staym_laundry_core::normalize_phone;
///
/// assert_eq!(normalize_phone("+91 (724) 890-3366"), "+917248903366");
/// assert_eq!(normalize_phone("0724+890"), "0724890");
/// ```
#[must_use]
pub fn normalize_phone(phone: &str) -> String {
    let mut normalized = String::with_capacity(phone.len());
    for c in phone.chars() {
        if c.is_ascii_digit() {
            normalized.push(c);
        } else if c == '+' && normalized.is_empty() {
            normalized.push(c);
        }
    }
    normalized
}

/// Build a `wa.me` link that opens a chat with `phone` and prefills `message`.
///
/// The message is percent-encoded exactly once. Malformed phone numbers are
/// not rejected; the link is built from whatever digits remain.
///
/// ```
/// use staym_laundry_core::build_deep_link;
///
/// assert_eq!(
///     build_deep_link("+91 724-890-3366", "hi there"),
///     "https://wa.me/+917248903366?text=hi%20there"
/// );
/// ```
#[must_use]
pub fn build_deep_link(phone: &str, message: &str) -> String {
    build_deep_link_with_base(WHATSAPP_BASE_URL, phone, message)
}

/// Same as [`build_deep_link`] with a custom base URL.
#[must_use]
pub fn build_deep_link_with_base(base: &str, phone: &str, message: &str) -> String {
    format!(
        "{base}{}?text={}",
        normalize_phone(phone),
        urlencoding::encode(message)
    )
}

/// Compose the order message and link it in one step.
///
/// Returns `None` for an empty order, so no link is ever built for an empty
/// message.
#[must_use]
pub fn prepare_order_link(
    items: &[OrderItem],
    total: Rupees,
    business_phone: &str,
    contact: &ContactDetails<'_>,
) -> Option<String> {
    let message = compose_order_message(items, total, contact);
    if message.is_empty() {
        return None;
    }
    Some(build_deep_link(business_phone, &message))
}
