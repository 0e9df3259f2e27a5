//! Custom domain name type.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::validation::{Field, ValidationError};

/// Validate a custom domain name without contacting any service.
///
/// Rules are checked in a fixed order and only the first one violated is
/// reported:
///
/// 1. trimmed value is empty
/// 2. shorter than [`DomainName::MIN_LENGTH`] characters
/// 3. longer than [`DomainName::MAX_LENGTH`] characters
/// 4. contains a space
/// 5. ends with a hyphen
/// 6. contains anything other than ASCII letters, digits, and hyphens
///
/// Length is counted in characters of the value as entered (not trimmed).
///
/// # Errors
///
/// Returns the [`ValidationError`] for the first rule violated.
pub fn validate_domain_local(domain: &str) -> Result<(), ValidationError> {
    if domain.trim().is_empty() {
        return Err(ValidationError::EmptyField {
            field: Field::Domain,
        });
    }

    let length = domain.chars().count();
    if length < DomainName::MIN_LENGTH {
        return Err(ValidationError::TooShort {
            min: DomainName::MIN_LENGTH,
            actual: length,
        });
    }
    if length > DomainName::MAX_LENGTH {
        return Err(ValidationError::TooLong {
            max: DomainName::MAX_LENGTH,
            actual: length,
        });
    }

    if domain.contains(' ') {
        return Err(ValidationError::ContainsSpace);
    }

    if domain.ends_with('-') {
        return Err(ValidationError::TrailingHyphen);
    }

    if !domain.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(ValidationError::InvalidCharacters {
            field: Field::Domain,
        });
    }

    Ok(())
}

/// A domain name that passed [`validate_domain_local`].
///
/// Remote validation only accepts this type, so a domain can never reach the
/// remote authority without passing the local rules first.
///
/// ## Constraints
///
/// - Length: 5-50 characters
/// - Letters, digits, and hyphens only
/// - Must not end with a hyphen
///
/// ## Examples
///
/// ```
/// use staym_laundry_core::DomainName;
///
/// assert!(DomainName::parse("staym-laundry").is_ok());
///
/// assert!(DomainName::parse("ab").is_err());        // too short
/// assert!(DomainName::parse("staym-").is_err());    // trailing hyphen
/// assert!(DomainName::parse("my shop").is_err());   // space
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct DomainName(String);

impl DomainName {
    /// Minimum length in characters.
    pub const MIN_LENGTH: usize = 5;
    /// Maximum length in characters.
    pub const MAX_LENGTH: usize = 50;

    /// Parse a `DomainName` from a string.
    ///
    /// # Errors
    ///
    /// Returns the first rule violated, see [`validate_domain_local`].
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        validate_domain_local(s)?;
        Ok(Self(s.to_owned()))
    }

    /// Returns the domain name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for DomainName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DomainName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_domain_local(&value)?;
        Ok(Self(value))
    }
}

impl From<DomainName> for String {
    fn from(domain: DomainName) -> Self {
        domain.0
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
