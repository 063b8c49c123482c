//! Configuration types for the ActionKit API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ActionKitConfig`]: Connection settings and credentials
//! - [`ActionKitConfigBuilder`]: A builder for constructing [`ActionKitConfig`] instances
//! - [`Domain`]: A validated instance hostname
//! - [`Username`] / [`Password`]: Validated HTTP Basic credentials
//! - [`HostUrl`]: A validated origin override for proxies and local servers
//!
//! # Example
//!
//! ```rust
//! use actionkit_api::{ActionKitConfig, Domain, Username, Password};
//!
//! let config = ActionKitConfig::builder()
//!     .domain(Domain::new("act.example.org").unwrap())
//!     .username(Username::new("api-user").unwrap())
//!     .password(Password::new("secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_uri(), "https://act.example.org");
//! ```

mod newtypes;

use std::time::Duration;

pub use newtypes::{Domain, HostUrl, Password, Username};

use crate::error::ConfigError;

/// Configuration for an ActionKit API connection.
///
/// Credentials and connection settings are immutable once built.
///
/// # Thread Safety
///
/// `ActionKitConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ActionKitConfig {
    domain: Domain,
    username: Username,
    password: Password,
    api_host: Option<HostUrl>,
    timeout: Option<Duration>,
}

impl ActionKitConfig {
    /// Creates a new builder for constructing an `ActionKitConfig`.
    #[must_use]
    pub fn builder() -> ActionKitConfigBuilder {
        ActionKitConfigBuilder::new()
    }

    /// Returns the instance domain.
    #[must_use]
    pub const fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Returns the API username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the API password.
    #[must_use]
    pub const fn password(&self) -> &Password {
        &self.password
    }

    /// Returns the API host override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the origin all requests are sent to.
    ///
    /// This is the `api_host` origin when set, otherwise `https://{domain}`.
    #[must_use]
    pub fn base_uri(&self) -> String {
        self.api_host.as_ref().map_or_else(
            || format!("https://{}", self.domain),
            |host| host.origin().to_string(),
        )
    }
}

// Verify ActionKitConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ActionKitConfig>();
};

/// Builder for constructing [`ActionKitConfig`] instances.
///
/// Required fields are `domain`, `username` and `password`.
///
/// # Defaults
///
/// - `api_host`: `None` (requests go to `https://{domain}`)
/// - `timeout`: `None` (no client-side timeout)
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use actionkit_api::{ActionKitConfig, Domain, HostUrl, Username, Password};
///
/// let config = ActionKitConfig::builder()
///     .domain(Domain::new("act.example.org").unwrap())
///     .username(Username::new("api-user").unwrap())
///     .password(Password::new("secret").unwrap())
///     .api_host(HostUrl::new("http://127.0.0.1:8080").unwrap())
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_uri(), "http://127.0.0.1:8080");
/// ```
#[derive(Debug, Default)]
pub struct ActionKitConfigBuilder {
    domain: Option<Domain>,
    username: Option<Username>,
    password: Option<Password>,
    api_host: Option<HostUrl>,
    timeout: Option<Duration>,
}

impl ActionKitConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the instance domain (required).
    #[must_use]
    pub fn domain(mut self, domain: Domain) -> Self {
        self.domain = Some(domain);
        self
    }

    /// Sets the API username (required).
    #[must_use]
    pub fn username(mut self, username: Username) -> Self {
        self.username = Some(username);
        self
    }

    /// Sets the API password (required).
    #[must_use]
    pub fn password(mut self, password: Password) -> Self {
        self.password = Some(password);
        self
    }

    /// Overrides the origin requests are sent to.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets a timeout applied to every request by the transport.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`ActionKitConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `domain`, `username`
    /// or `password` is not set.
    pub fn build(self) -> Result<ActionKitConfig, ConfigError> {
        let domain = self
            .domain
            .ok_or(ConfigError::MissingRequiredField { field: "domain" })?;
        let username = self
            .username
            .ok_or(ConfigError::MissingRequiredField { field: "username" })?;
        let password = self
            .password
            .ok_or(ConfigError::MissingRequiredField { field: "password" })?;

        Ok(ActionKitConfig {
            domain,
            username,
            password,
            api_host: self.api_host,
            timeout: self.timeout,
        })
    }
}
