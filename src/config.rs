//! Client configuration and its builder.
//!
//! ```
//! use airwatch_api::config::ClientConfig;
//!
//! let config = ClientConfig::builder("as123.awmdm.com", "tenant-key")
//!     .email("admin@example.com")
//!     .password("secret")
//!     .build()?;
//! assert!(config.authorization().starts_with("Basic "));
//! # Ok::<(), airwatch_api::error::AirWatchError>(())
//! ```

use std::time::Duration;

use crate::auth::Credentials;
use crate::error::{AirWatchError, Result};

/// Validated connection settings for an [`AirWatchClient`](crate::client::AirWatchClient).
///
/// `host` must be the tenant's API host (Settings > System > Advanced >
/// Site URLs in the console), not the console UI host.
#[derive(Clone)]
pub struct ClientConfig {
    host: String,
    tenant_api_key: String,
    authorization: String,
    timeout: Option<Duration>,
}

impl ClientConfig {
    /// Starts a builder for the given API host and tenant API key
    /// (`aw-tenant-code`). Credentials are supplied on the builder.
    pub fn builder(
        host: impl Into<String>,
        tenant_api_key: impl Into<String>,
    ) -> ClientConfigBuilder {
        ClientConfigBuilder {
            host: host.into(),
            tenant_api_key: tenant_api_key.into(),
            email: None,
            password: None,
            authorization: None,
            timeout: None,
        }
    }

    /// Shorthand for a config built from explicit [`Credentials`].
    pub fn new(
        host: impl Into<String>,
        tenant_api_key: impl Into<String>,
        credentials: Credentials,
    ) -> Result<Self> {
        let builder = Self::builder(host, tenant_api_key);
        let builder = match credentials {
            Credentials::Basic { email, password } => builder.email(email).password(password),
            Credentials::Authorization(value) => builder.authorization(value),
        };
        builder.build()
    }

    /// The API host, without scheme or path.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The tenant API key sent as `aw-tenant-code`.
    pub fn tenant_api_key(&self) -> &str {
        &self.tenant_api_key
    }

    /// The `Authorization` header value sent with every request.
    pub fn authorization(&self) -> &str {
        &self.authorization
    }

    /// Request timeout, if the caller configured one. `None` means requests
    /// may block indefinitely.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("host", &self.host)
            .field("tenant_api_key", &"<redacted>")
            .field("authorization", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Builder for [`ClientConfig`].
///
/// Credential resolution mirrors the AirWatch console's two options: if both
/// `email` and `password` are set they win and are encoded as HTTP Basic;
/// otherwise `authorization` is used verbatim; with neither, `build` fails.
pub struct ClientConfigBuilder {
    host: String,
    tenant_api_key: String,
    email: Option<String>,
    password: Option<String>,
    authorization: Option<String>,
    timeout: Option<Duration>,
}

impl ClientConfigBuilder {
    /// Set the admin account email. Used only together with `password`.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the admin account password. Used only together with `email`.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set a pre-formed `Authorization` header value.
    pub fn authorization(mut self, authorization: impl Into<String>) -> Self {
        self.authorization = Some(authorization.into());
        self
    }

    /// Apply a timeout to every request. Not set by default.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    fn credentials(&mut self) -> Option<Credentials> {
        match (self.email.take(), self.password.take()) {
            (Some(email), Some(password)) => Some(Credentials::Basic { email, password }),
            _ => self.authorization.take().map(Credentials::Authorization),
        }
    }

    /// Validates the settings and resolves the credentials.
    ///
    /// # Errors
    ///
    /// `AirWatchError::Configuration` if `host` is empty or no usable
    /// credentials were given.
    pub fn build(mut self) -> Result<ClientConfig> {
        if self.host.trim().is_empty() {
            return Err(AirWatchError::Configuration("host must not be empty".to_string()));
        }

        let credentials = self.credentials().ok_or_else(|| {
            AirWatchError::Configuration(
                "must provide (email & password) or authorization".to_string(),
            )
        })?;

        Ok(ClientConfig {
            host: self.host,
            tenant_api_key: self.tenant_api_key,
            authorization: credentials.authorization_header(),
            timeout: self.timeout,
        })
    }
}
