//! Remote validation gateway.
//!
//! Forwards an already locally-validated [`DomainName`] to a
//! [`DomainAuthority`] and tracks the call with a three-state
//! [`CheckStatus`]. At most one call is in flight per gateway; a second call
//! made while one is pending fails fast with [`GatewayError::InFlight`]
//! instead of reaching the authority.

use std::sync::atomic::{AtomicU8, Ordering};

use thiserror::Error;
use tracing::{info, instrument, warn};

use staym_laundry_core::{CheckStatus, DomainName};

use crate::authority::{AuthorityError, DomainAuthority, HttpDomainAuthority};
use crate::config::ClientConfig;

/// Message shown when no authority is configured.
pub const CONNECTION_UNAVAILABLE: &str = "Backend connection not available.";

/// Errors surfaced by [`RemoteValidationGateway::validate`].
///
/// All of them are recoverable: the user may edit the domain and retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// No channel to the authority exists.
    #[error("Backend connection not available.")]
    ConnectionUnavailable,

    /// The authority rejected the domain. The reason is shown verbatim.
    #[error("{0}")]
    RemoteRejected(String),

    /// The call failed for any other reason.
    #[error("{0}")]
    Transport(String),

    /// Another validation on this gateway is still pending.
    #[error("Domain validation is already in progress.")]
    InFlight,
}

impl From<AuthorityError> for GatewayError {
    fn from(err: AuthorityError) -> Self {
        match err {
            AuthorityError::Rejected(reason) => Self::RemoteRejected(reason),
            AuthorityError::Transport(message) => Self::Transport(message),
        }
    }
}

/// Gateway backed by the HTTP authority.
pub type HttpGateway = RemoteValidationGateway<HttpDomainAuthority>;

/// Single-flight gateway to a domain authority.
#[derive(Debug)]
pub struct RemoteValidationGateway<A> {
    authority: Option<A>,
    status: AtomicU8,
}

impl<A> RemoteValidationGateway<A> {
    /// Gateway connected to `authority`.
    #[must_use]
    pub const fn new(authority: A) -> Self {
        Self {
            authority: Some(authority),
            status: AtomicU8::new(CheckStatus::Idle.as_u8()),
        }
    }

    /// Gateway with no authority; every call reports
    /// [`GatewayError::ConnectionUnavailable`].
    #[must_use]
    pub const fn disconnected() -> Self {
        Self {
            authority: None,
            status: AtomicU8::new(CheckStatus::Idle.as_u8()),
        }
    }

    /// Returns true if an authority is configured.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.authority.is_some()
    }

    /// Current call status.
    #[must_use]
    pub fn status(&self) -> CheckStatus {
        CheckStatus::from_u8(self.status.load(Ordering::Acquire))
    }

    /// Returns true while a call is in flight (the "validating..." state).
    #[must_use]
    pub fn is_validating(&self) -> bool {
        self.status().is_pending()
    }
}

impl HttpGateway {
    /// Build a gateway from configuration. Without a configured backend the
    /// gateway is disconnected.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Transport`] if the HTTP client fails to build.
    pub fn from_config(config: &ClientConfig) -> Result<Self, GatewayError> {
        match &config.backend {
            Some(backend) => Ok(Self::new(HttpDomainAuthority::new(backend)?)),
            None => Ok(Self::disconnected()),
        }
    }
}

impl<A: DomainAuthority> RemoteValidationGateway<A> {
    /// Ask the authority to validate `domain`.
    ///
    /// The status is `Pending` for the duration of the call and `Done`
    /// afterwards, whether the call succeeded, failed, or the future was
    /// dropped before completing.
    ///
    /// # Errors
    ///
    /// See [`GatewayError`].
    #[instrument(skip(self), fields(domain = %domain))]
    pub async fn validate(&self, domain: &DomainName) -> Result<(), GatewayError> {
        let Some(authority) = self.authority.as_ref() else {
            warn!("No domain authority configured");
            return Err(GatewayError::ConnectionUnavailable);
        };

        let Some(_guard) = InFlightGuard::acquire(&self.status) else {
            warn!("Domain validation already in flight");
            return Err(GatewayError::InFlight);
        };

        match authority.validate_custom_domain(domain).await {
            Ok(()) => {
                info!("Domain accepted");
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "Domain validation failed");
                Err(err.into())
            }
        }
    }
}

/// Holds the gateway in `Pending`; moves it to `Done` when dropped.
struct InFlightGuard<'a> {
    status: &'a AtomicU8,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(status: &'a AtomicU8) -> Option<Self> {
        let pending = CheckStatus::Pending.as_u8();
        let mut current = status.load(Ordering::Acquire);
        loop {
            if current == pending {
                return None;
            }
            match status.compare_exchange_weak(
                current,
                pending,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return Some(Self { status }),
                Err(actual) => current = actual,
            }
        }
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.status.store(CheckStatus::Done.as_u8(), Ordering::Release);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    use tokio::sync::Notify;

    use super::*;

    /// Authority returning a fixed outcome.
    struct FixedAuthority {
        outcome: Result<(), AuthorityError>,
        calls: AtomicUsize,
    }

    impl FixedAuthority {
        fn new(outcome: Result<(), AuthorityError>) -> Self {
            Self {
                outcome,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl DomainAuthority for FixedAuthority {
        async fn validate_custom_domain(&self, _domain: &DomainName) -> Result<(), AuthorityError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    /// Authority that blocks until released.
    struct GatedAuthority {
        gate: Notify,
        calls: AtomicUsize,
    }

    impl DomainAuthority for GatedAuthority {
        async fn validate_custom_domain(&self, _domain: &DomainName) -> Result<(), AuthorityError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.gate.notified().await;
            Ok(())
        }
    }

    fn domain() -> DomainName {
        DomainName::parse("staym-laundry").unwrap()
    }

    #[tokio::test]
    async fn test_disconnected_gateway() {
        let gateway = RemoteValidationGateway::<FixedAuthority>::disconnected();
        assert!(!gateway.is_connected());
        assert_eq!(
            gateway.validate(&domain()).await,
            Err(GatewayError::ConnectionUnavailable)
        );
        assert_eq!(gateway.status(), CheckStatus::Idle);
        assert_eq!(
            GatewayError::ConnectionUnavailable.to_string(),
            CONNECTION_UNAVAILABLE
        );
    }

    #[tokio::test]
    async fn test_accepted_domain() {
        let gateway = RemoteValidationGateway::new(FixedAuthority::new(Ok(())));
        assert_eq!(gateway.status(), CheckStatus::Idle);
        assert_eq!(gateway.validate(&domain()).await, Ok(()));
        assert_eq!(gateway.status(), CheckStatus::Done);
    }

    #[tokio::test]
    async fn test_rejection_reason_is_verbatim() {
        let gateway = RemoteValidationGateway::new(FixedAuthority::new(Err(
            AuthorityError::Rejected("Domain is already in use.".to_string()),
        )));
        let err = gateway.validate(&domain()).await.unwrap_err();
        assert_eq!(
            err,
            GatewayError::RemoteRejected("Domain is already in use.".to_string())
        );
        assert_eq!(err.to_string(), "Domain is already in use.");
        assert_eq!(gateway.status(), CheckStatus::Done);
    }

    #[tokio::test]
    async fn test_transport_failure_releases_status() {
        let gateway = RemoteValidationGateway::new(FixedAuthority::new(Err(
            AuthorityError::Transport("connection refused".to_string()),
        )));
        assert_eq!(
            gateway.validate(&domain()).await,
            Err(GatewayError::Transport("connection refused".to_string()))
        );
        assert!(!gateway.is_validating());

        // No automatic retry, but a manual retry goes through.
        let _ = gateway.validate(&domain()).await;
        let calls = &gateway.authority.as_ref().unwrap().calls;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_second_call_while_pending_is_refused() {
        let gateway = RemoteValidationGateway::new(GatedAuthority {
            gate: Notify::new(),
            calls: AtomicUsize::new(0),
        });
        let domain = domain();

        let (first, second) = tokio::join!(gateway.validate(&domain), async {
            while !gateway.is_validating() {
                tokio::task::yield_now().await;
            }
            let second = gateway.validate(&domain).await;
            gateway.authority.as_ref().unwrap().gate.notify_one();
            second
        });

        assert_eq!(first, Ok(()));
        assert_eq!(second, Err(GatewayError::InFlight));
        let calls = &gateway.authority.as_ref().unwrap().calls;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(gateway.status(), CheckStatus::Done);
    }

    #[tokio::test]
    async fn test_dropped_call_releases_status() {
        let gateway = RemoteValidationGateway::new(GatedAuthority {
            gate: Notify::new(),
            calls: AtomicUsize::new(0),
        });
        let result =
            tokio::time::timeout(Duration::from_millis(20), gateway.validate(&domain())).await;
        assert!(result.is_err());
        assert_eq!(gateway.status(), CheckStatus::Done);
    }

    #[test]
    fn test_guard_refuses_when_pending() {
        let status = AtomicU8::new(CheckStatus::Done.as_u8());
        let guard = InFlightGuard::acquire(&status).unwrap();
        assert!(InFlightGuard::acquire(&status).is_none());
        drop(guard);
        assert_eq!(
            CheckStatus::from_u8(status.load(Ordering::Acquire)),
            CheckStatus::Done
        );
    }

    #[test]
    fn test_from_config_without_backend_is_disconnected() {
        let gateway = HttpGateway::from_config(&ClientConfig::default()).unwrap();
        assert!(!gateway.is_connected());
    }
}
