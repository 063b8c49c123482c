//! ActionKit actions: one user's response to one page.

use std::fmt::Display;

use crate::clients::Transport;
use crate::rest::{find_by, Entity, EntityClient, FixedFilter, QueryOptions, Resource, ResourceError};

/// The `action` resource type.
#[derive(Clone, Copy, Debug)]
pub struct Action;

impl Entity for Action {
    const NAME: &'static str = "action";
}

impl<T: Transport> EntityClient<'_, Action, T> {
    /// Fetches every action taken by the user with id `user`.
    ///
    /// # Errors
    ///
    /// Same as [`Fetchable::get_all`](crate::rest::Fetchable::get_all).
    pub async fn find_by_user<I: Display>(
        &self,
        user: I,
        options: QueryOptions,
    ) -> Result<Vec<Resource>, ResourceError> {
        find_by(self, FixedFilter::new("user", user), options).await
    }

    /// Fetches every action of the given type.
    ///
    /// # Errors
    ///
    /// Same as [`Fetchable::get_all`](crate::rest::Fetchable::get_all).
    pub async fn find_by_type(
        &self,
        action_type: &str,
        options: QueryOptions,
    ) -> Result<Vec<Resource>, ResourceError> {
        find_by(self, FixedFilter::new("type", action_type), options).await
    }
}
