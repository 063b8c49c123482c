//! Path building for ActionKit REST endpoints.
//!
//! Every endpoint lives under [`API_PREFIX`]:
//!
//! - collection: `/rest/v1/{entity}/`
//! - record: `/rest/v1/{entity}/{id}/`
//!
//! Record identifiers are percent-encoded so that string ids cannot escape
//! their path segment.

use std::fmt::Display;

use crate::rest::ResourceError;

/// Root of the ActionKit REST API.
pub const API_PREFIX: &str = "/rest/v1/";

/// Returns the collection path for an entity name.
///
/// # Example
///
/// ```rust
/// use actionkit_api::rest::collection_path;
///
/// assert_eq!(collection_path("Page"), "/rest/v1/page/");
/// ```
#[must_use]
pub fn collection_path(entity: &str) -> String {
    format!("{API_PREFIX}{}/", entity.to_lowercase())
}

/// Returns the path of a single record.
///
/// # Example
///
/// ```rust
/// use actionkit_api::rest::record_path;
///
/// assert_eq!(record_path("user", &42), "/rest/v1/user/42/");
/// assert_eq!(record_path("tag", "a/b"), "/rest/v1/tag/a%2Fb/");
/// ```
#[must_use]
pub fn record_path<I: Display + ?Sized>(entity: &str, id: &I) -> String {
    let id = id.to_string();
    format!("{}{}/", collection_path(entity), urlencoding::encode(&id))
}

/// Checks that a path can be appended to the instance origin.
pub(crate) fn validate_path(path: &str) -> Result<(), ResourceError> {
    if path.is_empty() || !path.starts_with('/') {
        return Err(ResourceError::InvalidPath {
            path: path.to_string(),
        });
    }
    Ok(())
}
