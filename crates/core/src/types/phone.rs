//! Customer phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::validation::{Field, ValidationError};

/// Minimum number of digits in a customer phone number.
pub const MIN_PHONE_DIGITS: usize = 10;

/// Validate a customer phone number.
///
/// Checks run in order and only the first failure is reported:
/// empty, then character set, then digit count.
///
/// # Errors
///
/// - [`ValidationError::EmptyField`] when the trimmed value is empty
/// - [`ValidationError::InvalidCharacters`] for anything other than ASCII
///   digits, spaces, `+`, `-`, `(`, `)`
/// - [`ValidationError::TooFewDigits`] when fewer than 10 digits are present
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.trim().is_empty() {
        return Err(ValidationError::EmptyField {
            field: Field::Phone,
        });
    }

    if !phone.chars().all(is_phone_char) {
        return Err(ValidationError::InvalidCharacters {
            field: Field::Phone,
        });
    }

    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if digits < MIN_PHONE_DIGITS {
        return Err(ValidationError::TooFewDigits {
            field: Field::Phone,
            min: MIN_PHONE_DIGITS,
            actual: digits,
        });
    }

    Ok(())
}

const fn is_phone_char(c: char) -> bool {
    matches!(c, '0'..='9' | ' ' | '+' | '-' | '(' | ')')
}

/// A phone number that passed [`validate_phone`].
///
/// The original formatting is preserved; it is only stripped when building a
/// deep link.
///
/// ```
/// use staym_laundry_core::PhoneNumber;
///
/// assert!(PhoneNumber::parse("+91 (724) 890-3366").is_ok());
/// assert!(PhoneNumber::parse("123").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parse a `PhoneNumber`, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns the first rule violated, see [`validate_phone`].
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        validate_phone(s)?;
        Ok(Self(s.trim().to_owned()))
    }

    /// Returns the phone number as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
