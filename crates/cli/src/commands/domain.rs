//! Custom domain check.
//!
//! # Usage
//!
//! ```bash
//! # Local rules only
//! staym domain staym-laundry --local-only
//!
//! # Local rules, then the backend
//! STAYM_BACKEND_URL=https://api.staym-laundry.in/ staym domain staym-laundry
//! ```

use thiserror::Error;

use staym_laundry_client::{
    ClientConfig, ConfigError, DomainCheckError, GatewayError, HttpGateway, check_domain,
};
use staym_laundry_core::{DomainName, ValidationError};

/// Message printed when a domain passes every check.
pub const DOMAIN_READY: &str = "Domain is valid and ready to publish!";

/// Errors that can occur while checking a domain.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Check(#[from] DomainCheckError),

    /// The gateway could not be built.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Validate `name` and print the outcome.
///
/// # Errors
///
/// Returns the first failing rule, or the remote failure reason.
#[allow(clippy::print_stdout)]
pub async fn check(name: &str, local_only: bool) -> Result<(), DomainError> {
    let domain = if local_only {
        DomainName::parse(name)?
    } else {
        let config = ClientConfig::from_env()?;
        let gateway = HttpGateway::from_config(&config)?;
        if !gateway.is_connected() {
            tracing::warn!("STAYM_BACKEND_URL not set, remote validation unavailable");
        }
        tracing::info!("Validating domain...");
        let outcome = check_domain(&gateway, name).await;
        tracing::debug!(status = %gateway.status(), "Remote domain check finished");
        outcome?
    };

    tracing::debug!(domain = %domain, "Domain check passed");
    println!("{DOMAIN_READY}");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_only_accepts_valid_domain() {
        assert!(check("staym-laundry", true).await.is_ok());
    }

    #[tokio::test]
    async fn test_local_only_reports_rule() {
        let err = check("my shop", true).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Domain can only contain letters, numbers, and hyphens. Please remove spaces and special characters."
        );
    }
}
