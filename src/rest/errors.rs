//! Error types for REST resource operations.
//!
//! The client maps every failure to a single [`ResourceError`]:
//!
//! - **Unexpected status code**: [`ResourceError::Status`], displayed as `"{code}: {status_text}"`
//! - **Transport failure**: [`ResourceError::Http`], passed through unchanged
//! - **Bad input or body**: [`ResourceError::InvalidPath`], [`ResourceError::InvalidLocator`],
//!   [`ResourceError::UnexpectedBody`], [`ResourceError::Serialization`]
//!
//! Errors raised while populating fields are whichever of these the
//! sub-fetch produced; there is no separate population variant.
//!
//! # Example
//!
//! ```rust,ignore
//! use actionkit_api::rest::{Creatable, ResourceError};
//!
//! match api.users().create(&json!({"email": "a@b.com"})).await {
//!     Ok(()) => println!("created"),
//!     Err(ResourceError::Status { code: 400, .. }) => println!("rejected"),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use serde_json::Value;
use thiserror::Error;

use crate::clients::HttpError;

/// Error type for REST resource operations.
///
/// # Example
///
/// ```rust
/// use actionkit_api::rest::ResourceError;
///
/// let error = ResourceError::Status {
///     code: 400,
///     status_text: "Bad Request".to_string(),
/// };
/// assert_eq!(error.to_string(), "400: Bad Request");
/// assert_eq!(error.status_code(), Some(400));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The response status code did not match the operation's success code.
    #[error("{code}: {status_text}")]
    Status {
        /// The HTTP status code received.
        code: u16,
        /// The reason phrase for the status code.
        status_text: String,
    },

    /// The request path is empty or not rooted at `/`.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// A field requested for population does not hold a path string.
    #[error("Cannot populate field '{field}': expected a resource path, found {value}")]
    InvalidLocator {
        /// The field being populated.
        field: String,
        /// The value found in that field.
        value: Value,
    },

    /// The response body has a shape the client cannot use.
    #[error("Unexpected response body: {reason}")]
    UnexpectedBody {
        /// What was wrong with the body.
        reason: String,
    },

    /// The request data could not be serialized to JSON.
    #[error("Failed to serialize request body: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A transport-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Returns the HTTP status code for [`ResourceError::Status`] errors.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub(crate) fn unexpected_body(reason: impl Into<String>) -> Self {
        Self::UnexpectedBody {
            reason: reason.into(),
        }
    }
}
