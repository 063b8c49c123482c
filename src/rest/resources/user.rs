//! ActionKit users.
//!
//! A user is one member of the list: contact details, location and
//! subscription state. Users are found by email or by state in addition to
//! the generic filters.
//!
//! # Example
//!
//! ```rust,ignore
//! use actionkit_api::rest::{Creatable, QueryOptions};
//!
//! let users = api.users();
//! users.create(&json!({"email": "ada@example.com", "zip": "02139"})).await?;
//!
//! let matches = users.find_by_email("ada@example.com", QueryOptions::new()).await?;
//! let new_yorkers = users.find_by_state("NY", QueryOptions::new().populate("phones")).await?;
//! ```

use crate::clients::Transport;
use crate::rest::{find_by, Entity, EntityClient, FixedFilter, QueryOptions, Resource, ResourceError};

/// The `user` resource type.
#[derive(Clone, Copy, Debug)]
pub struct User;

impl Entity for User {
    const NAME: &'static str = "user";
}

impl<T: Transport> EntityClient<'_, User, T> {
    /// Fetches every user with the given email address.
    ///
    /// # Errors
    ///
    /// Same as [`Fetchable::get_all`](crate::rest::Fetchable::get_all).
    pub async fn find_by_email(
        &self,
        email: &str,
        options: QueryOptions,
    ) -> Result<Vec<Resource>, ResourceError> {
        find_by(self, FixedFilter::new("email", email), options).await
    }

    /// Fetches every user in the given state or province.
    ///
    /// # Errors
    ///
    /// Same as [`Fetchable::get_all`](crate::rest::Fetchable::get_all).
    pub async fn find_by_state(
        &self,
        state: &str,
        options: QueryOptions,
    ) -> Result<Vec<Resource>, ResourceError> {
        find_by(self, FixedFilter::new("state", state), options).await
    }
}
