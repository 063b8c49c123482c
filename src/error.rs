//! Error types for the ActionKit API client.
//!
//! This module contains the configuration error type. Transport errors live
//! in [`crate::clients`] and resource operation errors in [`crate::rest`].
//!
//! # Example
//!
//! ```rust
//! use actionkit_api::{Username, ConfigError};
//!
//! let result = Username::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyUsername)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a client configuration.
///
/// Each variant carries a clear, actionable message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Domain cannot be empty.
    #[error("Domain cannot be empty. Please provide the ActionKit instance hostname, e.g. 'act.example.org'.")]
    EmptyDomain,

    /// Domain is not a bare hostname.
    #[error("Invalid domain '{domain}'. Expected a bare hostname such as 'act.example.org' (no scheme, path or whitespace).")]
    InvalidDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// Username cannot be empty.
    #[error("Username cannot be empty. Please provide an ActionKit user with API access.")]
    EmptyUsername,

    /// Password cannot be empty.
    #[error("Password cannot be empty. Please provide the password for the API user.")]
    EmptyPassword,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// API host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'http://127.0.0.1:8080').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
