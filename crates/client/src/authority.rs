//! External authority for custom domain validation.
//!
//! The authority is the source of truth for whether a domain can be
//! published. [`HttpDomainAuthority`] talks to the STAYM backend over HTTP;
//! tests substitute their own [`DomainAuthority`] implementations.
//!
//! # Wire format
//!
//! ```text
//! POST {base}/api/domains/validate
//! Authorization: Bearer <token>        (optional)
//! {"domain": "staym-laundry"}
//! ```
//!
//! - `2xx` accepts the domain when the body is empty or a JSON object,
//!   unless it is `{"valid": false, ...}`; any other body is a transport
//!   failure
//! - `4xx` rejects it; the reason is the body's `error` or `message` field,
//!   or the raw body text
//! - anything else is a transport failure

use std::future::Future;

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

use staym_laundry_core::DomainName;

use crate::config::BackendConfig;

/// Path of the validation endpoint, relative to the backend base URL.
pub const VALIDATE_PATH: &str = "api/domains/validate";

/// Fallback reason when a rejection carries no message.
pub const DEFAULT_REJECTION: &str = "Domain validation failed.";

/// Errors reported by a domain authority.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthorityError {
    /// The authority answered and rejected the domain.
    #[error("{0}")]
    Rejected(String),

    /// The call did not complete (network, timeout, server error).
    #[error("{0}")]
    Transport(String),
}

impl From<reqwest::Error> for AuthorityError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Something that can authoritatively validate a custom domain.
pub trait DomainAuthority: Send + Sync {
    /// Ask the authority whether `domain` may be used.
    ///
    /// # Errors
    ///
    /// [`AuthorityError::Rejected`] with the authority's reason, or
    /// [`AuthorityError::Transport`] if the call could not be completed.
    fn validate_custom_domain(
        &self,
        domain: &DomainName,
    ) -> impl Future<Output = Result<(), AuthorityError>> + Send;
}

/// Request body.
#[derive(Debug, Serialize)]
struct ValidateRequest<'a> {
    domain: &'a str,
}

/// Response body. Every field is optional so any JSON object decodes.
#[derive(Debug, Default, Deserialize)]
struct ValidateResponse {
    valid: Option<bool>,
    error: Option<String>,
    message: Option<String>,
}

impl ValidateResponse {
    fn reason(self) -> Option<String> {
        self.error
            .or(self.message)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}

/// HTTP client for the STAYM backend's domain validation endpoint.
#[derive(Clone)]
pub struct HttpDomainAuthority {
    client: reqwest::Client,
    endpoint: Url,
    token: Option<SecretString>,
}

impl std::fmt::Debug for HttpDomainAuthority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpDomainAuthority")
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

impl HttpDomainAuthority {
    /// Create a client for the configured backend.
    ///
    /// A base URL with a path should end in `/` for the path to be kept.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorityError::Transport`] if the HTTP client fails to build.
    pub fn new(config: &BackendConfig) -> Result<Self, AuthorityError> {
        let endpoint = config
            .base_url
            .join(VALIDATE_PATH)
            .map_err(|e| AuthorityError::Transport(format!("Invalid backend URL: {e}")))?;

        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            endpoint,
            token: config.token.clone(),
        })
    }

    /// Full URL of the validation endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl DomainAuthority for HttpDomainAuthority {
    #[instrument(skip(self), fields(domain = %domain, endpoint = %self.endpoint))]
    async fn validate_custom_domain(&self, domain: &DomainName) -> Result<(), AuthorityError> {
        let mut request = self.client.post(self.endpoint.clone()).json(&ValidateRequest {
            domain: domain.as_str(),
        });
        if let Some(token) = &self.token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), "Domain authority responded");

        interpret_response(status, &body)
    }
}

/// Map a validation response to its outcome.
///
/// A success status accepts the domain when the body is empty or a JSON
/// object without `"valid": false`. A success body that does not decode is a
/// transport failure, never an acceptance.
fn interpret_response(status: StatusCode, body: &str) -> Result<(), AuthorityError> {
    if status.is_success() {
        if body.trim().is_empty() {
            return Ok(());
        }
        let parsed: ValidateResponse = serde_json::from_str(body).map_err(|e| {
            AuthorityError::Transport(format!(
                "Undecodable response from domain validation service: {e}"
            ))
        })?;
        if parsed.valid == Some(false) {
            let reason = parsed
                .reason()
                .unwrap_or_else(|| DEFAULT_REJECTION.to_string());
            return Err(AuthorityError::Rejected(reason));
        }
        return Ok(());
    }

    let parsed = || serde_json::from_str::<ValidateResponse>(body).unwrap_or_default();

    if status.is_client_error() {
        let reason = parsed()
            .reason()
            .or_else(|| non_json_text(body))
            .unwrap_or_else(|| DEFAULT_REJECTION.to_string());
        return Err(AuthorityError::Rejected(reason));
    }

    let detail = non_json_text(body)
        .or_else(|| parsed().reason())
        .map(|d| format!(": {d}"))
        .unwrap_or_default();
    Err(AuthorityError::Transport(format!(
        "Domain validation service returned {status}{detail}"
    )))
}

/// The body as plain text, unless it is empty or a JSON document.
fn non_json_text(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() || serde_json::from_str::<serde_json::Value>(trimmed).is_ok() {
        return None;
    }
    Some(trimmed.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base() {
        let config = BackendConfig::new(Url::parse("http://localhost:8080").unwrap());
        let authority = HttpDomainAuthority::new(&config).unwrap();
        assert_eq!(
            authority.endpoint().as_str(),
            "http://localhost:8080/api/domains/validate"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path_with_trailing_slash() {
        let config = BackendConfig::new(Url::parse("https://api.staym-laundry.in/v1/").unwrap());
        let authority = HttpDomainAuthority::new(&config).unwrap();
        assert_eq!(
            authority.endpoint().as_str(),
            "https://api.staym-laundry.in/v1/api/domains/validate"
        );
    }

    #[test]
    fn test_response_reason_prefers_error() {
        let response: ValidateResponse =
            serde_json::from_str(r#"{"error":"Domain already taken.","message":"ignored"}"#)
                .unwrap();
        assert_eq!(response.reason().as_deref(), Some("Domain already taken."));
    }

    #[test]
    fn test_response_blank_reason_is_none() {
        let response: ValidateResponse = serde_json::from_str(r#"{"message":"  "}"#).unwrap();
        assert_eq!(response.reason(), None);
    }

    #[test]
    fn test_non_json_text() {
        assert_eq!(non_json_text("  reserved name "), Some("reserved name".to_string()));
        assert_eq!(non_json_text(r#"{"error":"x"}"#), None);
        assert_eq!(non_json_text(""), None);
    }

    #[test]
    fn test_success_with_html_body_is_transport_failure() {
        let err = interpret_response(StatusCode::OK, "<html>proxy login</html>").unwrap_err();
        assert!(matches!(err, AuthorityError::Transport(_)));
        assert!(err.to_string().starts_with("Undecodable response"));
    }

    #[test]
    fn test_success_with_empty_or_object_body_is_accepted() {
        assert_eq!(interpret_response(StatusCode::NO_CONTENT, ""), Ok(()));
        assert_eq!(interpret_response(StatusCode::OK, "  "), Ok(()));
        assert_eq!(interpret_response(StatusCode::OK, r#"{"valid":true}"#), Ok(()));
        assert_eq!(interpret_response(StatusCode::OK, "{}"), Ok(()));
    }

    #[test]
    fn test_success_with_invalid_flag_is_rejected() {
        assert_eq!(
            interpret_response(StatusCode::OK, r#"{"valid":false}"#),
            Err(AuthorityError::Rejected(DEFAULT_REJECTION.to_string()))
        );
    }

    #[test]
    fn test_client_error_reason_order() {
        assert_eq!(
            interpret_response(StatusCode::CONFLICT, r#"{"error":"Taken."}"#),
            Err(AuthorityError::Rejected("Taken.".to_string()))
        );
        assert_eq!(
            interpret_response(StatusCode::BAD_REQUEST, "blocked"),
            Err(AuthorityError::Rejected("blocked".to_string()))
        );
    }

    #[test]
    fn test_server_error_is_transport_failure() {
        let err = interpret_response(StatusCode::BAD_GATEWAY, "").unwrap_err();
        assert!(matches!(err, AuthorityError::Transport(_)));
        assert!(err.to_string().contains("502"));
    }

    #[test]
    fn test_debug_hides_token() {
        let mut config = BackendConfig::new(Url::parse("http://localhost:8080").unwrap());
        config.token = Some(SecretString::from("tok_9f8a7b6c5d4e"));
        let authority = HttpDomainAuthority::new(&config).unwrap();
        assert!(!format!("{authority:?}").contains("tok_9f8a7b6c5d4e"));
    }
}
