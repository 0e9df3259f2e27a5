//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STAYM_BACKEND_URL` - Base URL of the domain validation service. When
//!   unset, remote validation reports "Backend connection not available."
//! - `STAYM_BACKEND_TOKEN` - Bearer token sent to the validation service
//! - `STAYM_REQUEST_TIMEOUT_SECS` - Request timeout in seconds (default: 10)
//! - `STAYM_WHATSAPP_NUMBER` - Business number orders are sent to
//!   (default: +917248903366)
//! - `STAYM_DEEP_LINK_BASE` - Click-to-chat base URL (default: <https://wa.me/>)

use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

use staym_laundry_core::WHATSAPP_BASE_URL;

/// Default business WhatsApp number.
pub const DEFAULT_WHATSAPP_NUMBER: &str = "+917248903366";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Laundry client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Domain validation service, if one is configured
    pub backend: Option<BackendConfig>,
    /// Business number orders are sent to
    pub whatsapp_number: String,
    /// Click-to-chat base URL
    pub deep_link_base: String,
}

/// Domain validation service configuration.
///
/// Implements `Debug` manually to redact the token.
#[derive(Clone)]
pub struct BackendConfig {
    /// Base URL (e.g., <https://api.staym-laundry.in/>)
    pub base_url: Url,
    /// Optional bearer token
    pub token: Option<SecretString>,
    /// Per-request timeout
    pub timeout: Duration,
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("base_url", &self.base_url.as_str())
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl BackendConfig {
    /// Backend config with no token and the default timeout.
    #[must_use]
    pub const fn new(base_url: Url) -> Self {
        Self {
            base_url,
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend: None,
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            deep_link_base: WHATSAPP_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend = match non_empty(lookup("STAYM_BACKEND_URL")) {
            Some(raw) => Some(BackendConfig::from_lookup(&raw, &lookup)?),
            None => None,
        };

        let whatsapp_number = non_empty(lookup("STAYM_WHATSAPP_NUMBER"))
            .unwrap_or_else(|| DEFAULT_WHATSAPP_NUMBER.to_string());
        if !whatsapp_number.chars().any(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidEnvVar(
                "STAYM_WHATSAPP_NUMBER".to_string(),
                "must contain at least one digit".to_string(),
            ));
        }

        let deep_link_base = match non_empty(lookup("STAYM_DEEP_LINK_BASE")) {
            Some(raw) => parse_url("STAYM_DEEP_LINK_BASE", &raw)?.to_string(),
            None => WHATSAPP_BASE_URL.to_string(),
        };

        Ok(Self {
            backend,
            whatsapp_number,
            deep_link_base,
        })
    }
}

impl BackendConfig {
    fn from_lookup(
        raw_url: &str,
        lookup: &impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let base_url = parse_url("STAYM_BACKEND_URL", raw_url)?;
        let token = non_empty(lookup("STAYM_BACKEND_TOKEN")).map(SecretString::from);
        let timeout_secs = match non_empty(lookup("STAYM_REQUEST_TIMEOUT_SECS")) {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("STAYM_REQUEST_TIMEOUT_SECS".to_string(), e.to_string())
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "STAYM_REQUEST_TIMEOUT_SECS".to_string(),
                "must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            base_url,
            token,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Treat empty and whitespace-only values as unset.
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse an http(s) URL.
fn parse_url(key: &str, raw: &str) -> Result<Url, ConfigError> {
    let url =
        Url::parse(raw).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    Ok(url)
}
