//! STAYM Laundry Client - remote domain validation and configuration.
//!
//! # Architecture
//!
//! - [`config`] - Environment configuration (`dotenvy`, `secrecy`)
//! - [`authority`] - The external domain authority and its HTTP client
//! - [`gateway`] - Single-flight gateway with a three-state status
//! - [`domain_check`] - Local-then-remote domain check used by front ends
//!
//! Everything that does not need the network lives in `staym-laundry-core`.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod authority;
pub mod config;
pub mod domain_check;
pub mod gateway;

pub use authority::{AuthorityError, DomainAuthority, HttpDomainAuthority};
pub use config::{BackendConfig, ClientConfig, ConfigError};
pub use domain_check::{DomainCheckError, check_domain, check_form_domain};
pub use gateway::{GatewayError, HttpGateway, RemoteValidationGateway};
