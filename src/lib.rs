//! Async Rust client for the AirWatch / Workspace ONE MDM REST API.
//!
//! A thin wrapper: each method maps to one REST endpoint, shapes its
//! parameters into a path, query string or JSON body, sends a single request
//! and hands the response back. Pagination, validation and business rules
//! stay with the AirWatch service.
//!
//! # Modules
//!
//! - [`apps`]: App search, install, registration and smart-group assignment.
//! - [`auth`]: `Credentials` and HTTP Basic encoding.
//! - [`blobs`]: Streaming upload of app packages.
//! - [`client`]: `AirWatchClient` and the low-level HTTP verbs.
//! - [`config`]: `ClientConfig` and its builder.
//! - [`devices`]: Device lookups and `DeviceSelector`.
//! - [`error`]: Typed error hierarchy (`AirWatchError`).
//! - [`profiles`]: Profile install and removal.
//! - [`query`]: `{?query*}`-style query parameters.
//! - [`response`]: `ApiResponse`, the pass-through response type.
//! - [`smart_groups`]: Smart group lookups and membership updates.
//!
//! # Quick Start
//!
//! ```no_run
//! use airwatch_api::client::AirWatchClient;
//! use airwatch_api::config::ClientConfig;
//!
//! # async fn run() -> airwatch_api::error::Result<()> {
//! let config = ClientConfig::builder("as123.awmdm.com", "tenant-api-key")
//!     .email("admin@example.com")
//!     .password("secret")
//!     .build()?;
//! let client = AirWatchClient::new(config)?;
//!
//! let resp = client.device_details(42).await?;
//! if resp.is_success() {
//!     println!("{}", resp.text());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod apps;
pub mod auth;
pub mod blobs;
pub mod client;
pub mod config;
pub mod devices;
pub mod error;
pub mod profiles;
pub mod query;
pub mod response;
pub mod smart_groups;

pub use client::AirWatchClient;
pub use config::ClientConfig;
pub use error::{AirWatchError, Result};
pub use response::ApiResponse;
