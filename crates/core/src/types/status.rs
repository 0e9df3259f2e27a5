//! Status of an asynchronous check (remote domain validation).

use serde::{Deserialize, Serialize};

/// Lifecycle of a remote check.
///
/// `Pending` means a call is in flight and a second one must not be issued.
/// Both success and failure end in `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    #[default]
    Idle,
    Pending,
    Done,
}

impl CheckStatus {
    /// Returns true while a call is in flight.
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Compact encoding for atomic storage.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Idle => 0,
            Self::Pending => 1,
            Self::Done => 2,
        }
    }

    /// Inverse of [`CheckStatus::as_u8`]. Unknown values read as `Done`.
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Idle,
            1 => Self::Pending,
            _ => Self::Done,
        }
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Pending => write!(f, "pending"),
            Self::Done => write!(f, "done"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8_encoding_roundtrips() {
        for status in [CheckStatus::Idle, CheckStatus::Pending, CheckStatus::Done] {
            assert_eq!(CheckStatus::from_u8(status.as_u8()), status);
        }
    }

    #[test]
    fn test_default_is_idle() {
        assert_eq!(CheckStatus::default(), CheckStatus::Idle);
        assert!(!CheckStatus::Idle.is_pending());
        assert!(CheckStatus::Pending.is_pending());
    }

    #[test]
    fn test_display_is_lowercase() {
        assert_eq!(CheckStatus::Pending.to_string(), "pending");
        assert_eq!(CheckStatus::Done.to_string(), "done");
    }
}
