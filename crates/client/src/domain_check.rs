//! Custom domain check: local rules first, then the remote authority.

use thiserror::Error;
use tracing::{debug, instrument};

use staym_laundry_core::{DomainName, FormEvent, LaundryForm, ValidationError};

use crate::authority::DomainAuthority;
use crate::gateway::{GatewayError, RemoteValidationGateway};

/// Why a custom domain check failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainCheckError {
    /// The domain failed local validation; the authority was not contacted.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The domain passed local validation but the remote check failed.
    #[error(transparent)]
    Remote(#[from] GatewayError),
}

/// Validate `raw` locally, then with the remote authority.
///
/// # Errors
///
/// [`DomainCheckError::Invalid`] if a local rule fails (the gateway is never
/// called), otherwise [`DomainCheckError::Remote`] if the gateway fails.
#[instrument(skip(gateway))]
pub async fn check_domain<A: DomainAuthority>(
    gateway: &RemoteValidationGateway<A>,
    raw: &str,
) -> Result<DomainName, DomainCheckError> {
    let domain = DomainName::parse(raw)?;
    debug!("Local domain validation passed");
    gateway.validate(&domain).await?;
    Ok(domain)
}

/// Check the form's current domain and record the outcome on the form.
pub async fn check_form_domain<A: DomainAuthority>(
    form: LaundryForm,
    gateway: &RemoteValidationGateway<A>,
) -> LaundryForm {
    let outcome = check_domain(gateway, &form.domain.value)
        .await
        .map(|_| ())
        .map_err(|e| e.to_string());
    form.apply(FormEvent::DomainChecked { outcome })
}
