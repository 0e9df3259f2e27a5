//! Integration tests for STAYM Laundry.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p staym-integration-tests
//! ```
//!
//! No external services are needed: each test starts a stub validation
//! backend on a random local port with [`spawn_backend`].
//!
//! # Test Categories
//!
//! - `domain_validation` - HTTP authority and gateway against a stub backend
//! - `order_flow` - Calculator form through to the WhatsApp link

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use secrecy::SecretString;
use tokio::net::TcpListener;
use url::Url;

use staym_laundry_client::{BackendConfig, HttpGateway};

/// A stub backend running on a local port.
#[derive(Debug)]
pub struct StubBackend {
    pub addr: SocketAddr,
    pub base_url: Url,
}

impl StubBackend {
    /// Backend configuration pointing at this stub.
    #[must_use]
    pub fn config(&self) -> BackendConfig {
        let mut config = BackendConfig::new(self.base_url.clone());
        config.timeout = Duration::from_secs(5);
        config
    }

    /// Same as [`StubBackend::config`] with a bearer token.
    #[must_use]
    pub fn config_with_token(&self, token: &str) -> BackendConfig {
        let mut config = self.config();
        config.token = Some(SecretString::from(token.to_owned()));
        config
    }

    /// Gateway connected to this stub.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn gateway(&self) -> HttpGateway {
        let authority = staym_laundry_client::HttpDomainAuthority::new(&self.config())
            .expect("HTTP client should build");
        HttpGateway::new(authority)
    }
}

/// Serve `router` on `127.0.0.1` with an OS-assigned port.
///
/// # Panics
///
/// Panics if the listener cannot bind.
#[allow(clippy::expect_used)]
pub async fn spawn_backend(router: Router) -> StubBackend {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub backend");
    let addr = listener.local_addr().expect("stub backend address");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    let base_url = Url::parse(&format!("http://{addr}/")).expect("stub backend URL");
    StubBackend { addr, base_url }
}

/// Base URL of a local port with nothing listening on it.
///
/// # Panics
///
/// Panics if a probe listener cannot bind.
#[allow(clippy::expect_used)]
pub async fn unreachable_backend() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    Url::parse(&format!("http://{addr}/")).expect("probe URL")
}
