//! Field validation errors shared by all validators.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A form field that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    CustomerName,
    Phone,
    Address,
    Domain,
}

impl Field {
    /// Label used at the start of error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CustomerName => "Name",
            Self::Phone => "Phone number",
            Self::Address => "Address",
            Self::Domain => "Domain name",
        }
    }

    const fn invalid_characters_message(self) -> &'static str {
        match self {
            Self::Phone => {
                "Phone number can only contain digits, spaces, and the characters + - ( )."
            }
            Self::Domain => {
                "Domain can only contain letters, numbers, and hyphens. Please remove spaces and special characters."
            }
            Self::CustomerName | Self::Address => "Please remove unsupported characters.",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a field failed validation.
///
/// Every variant is recoverable: the message is shown next to the field and
/// the user edits and resubmits.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The trimmed value is empty.
    #[error("{field} cannot be empty.")]
    EmptyField {
        /// The offending field.
        field: Field,
    },
    /// The value is shorter than allowed.
    #[error(
        "Domain must be at least {min} characters. Your current domain has {actual} {}.",
        characters(.actual)
    )]
    TooShort {
        /// Minimum allowed length.
        min: usize,
        /// Length of the submitted value.
        actual: usize,
    },
    /// The value is longer than allowed.
    #[error(
        "Domain must be at most {max} characters. Your current domain has {actual} {}.",
        characters(.actual)
    )]
    TooLong {
        /// Maximum allowed length.
        max: usize,
        /// Length of the submitted value.
        actual: usize,
    },
    /// The value contains a literal space.
    #[error("{}", Field::Domain.invalid_characters_message())]
    ContainsSpace,
    /// The value ends with `-`.
    #[error("Domain cannot end with a hyphen.")]
    TrailingHyphen,
    /// The value contains characters outside the field's allowed set.
    #[error("{}", .field.invalid_characters_message())]
    InvalidCharacters {
        /// The offending field.
        field: Field,
    },
    /// The value has too few digits.
    #[error("{field} must contain at least {min} digits (found {actual}).")]
    TooFewDigits {
        /// The offending field.
        field: Field,
        /// Minimum digit count.
        min: usize,
        /// Digits found.
        actual: usize,
    },
}

fn characters(count: &usize) -> &'static str {
    if *count == 1 { "character" } else { "characters" }
}

/// Serializable validity view of a single field, for UI state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldStatus {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FieldStatus {
    /// A passing field.
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }
}

impl From<&Result<(), ValidationError>> for FieldStatus {
    fn from(result: &Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(e) => Self {
                is_valid: false,
                error: Some(e.to_string()),
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_too_short_message_singular() {
        let err = ValidationError::TooShort { min: 5, actual: 1 };
        assert_eq!(
            err.to_string(),
            "Domain must be at least 5 characters. Your current domain has 1 character."
        );
    }

    #[test]
    fn test_too_short_message_plural() {
        let err = ValidationError::TooShort { min: 5, actual: 3 };
        assert!(err.to_string().ends_with("has 3 characters."));
    }

    #[test]
    fn test_too_long_message_states_length() {
        let err = ValidationError::TooLong {
            max: 50,
            actual: 61,
        };
        assert_eq!(
            err.to_string(),
            "Domain must be at most 50 characters. Your current domain has 61 characters."
        );
    }

    #[test]
    fn test_empty_field_uses_label() {
        let err = ValidationError::EmptyField {
            field: Field::Domain,
        };
        assert_eq!(err.to_string(), "Domain name cannot be empty.");
    }

    #[test]
    fn test_field_status_from_result() {
        let ok: Result<(), ValidationError> = Ok(());
        assert_eq!(FieldStatus::from(&ok), FieldStatus::valid());

        let err: Result<(), ValidationError> = Err(ValidationError::TrailingHyphen);
        let status = FieldStatus::from(&err);
        assert!(!status.is_valid);
        assert_eq!(status.error.as_deref(), Some("Domain cannot end with a hyphen."));
    }

    #[test]
    fn test_field_status_serializes_camel_case() {
        let json = serde_json::to_string(&FieldStatus::valid()).unwrap();
        assert_eq!(json, r#"{"isValid":true}"#);
    }
}
