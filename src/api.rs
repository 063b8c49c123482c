//! The [`ActionKit`] entry point.

use std::ops::Deref;

use crate::clients::{HttpClient, HttpError, Transport};
use crate::config::ActionKitConfig;
use crate::rest::resources::{Action, Page, Tag, User};
use crate::rest::{EntityClient, RestClient};

/// Client for one ActionKit instance.
///
/// Owns a [`RestClient`] and hands out one facade per resource type. It
/// also dereferences to the [`RestClient`] for path-level calls.
///
/// # Example
///
/// ```rust,ignore
/// use actionkit_api::{ActionKit, ActionKitConfig, Domain, Password, Username};
/// use actionkit_api::rest::{Countable, Fetchable, QueryOptions};
///
/// let config = ActionKitConfig::builder()
///     .domain(Domain::new("act.example.org")?)
///     .username(Username::new("api-user")?)
///     .password(Password::new("secret")?)
///     .build()?;
///
/// let api = ActionKit::new(&config)?;
///
/// let page = api.pages().get(42, QueryOptions::new().populate("tags")).await?;
/// let petitions = api.pages().find_by_type("petition", QueryOptions::new()).await?;
/// let users = api.users().count(QueryOptions::new()).await?;
/// let root = api.fetch_root().await?;
/// ```
#[derive(Debug)]
pub struct ActionKit<T = HttpClient> {
    rest: RestClient<T>,
}

// Verify ActionKit is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ActionKit>();
};

impl ActionKit {
    /// Creates a client for the configured instance.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the HTTP client cannot be created.
    pub fn new(config: &ActionKitConfig) -> Result<Self, HttpError> {
        Ok(Self {
            rest: RestClient::new(config)?,
        })
    }
}

impl<T: Transport> ActionKit<T> {
    /// Creates a client over an arbitrary transport.
    pub fn with_transport(transport: T) -> Self {
        Self {
            rest: RestClient::with_transport(transport),
        }
    }

    /// Returns the underlying REST client.
    pub const fn rest(&self) -> &RestClient<T> {
        &self.rest
    }

    /// Facade for `/rest/v1/user/`.
    pub const fn users(&self) -> EntityClient<'_, User, T> {
        EntityClient::new(&self.rest)
    }

    /// Facade for `/rest/v1/page/`.
    pub const fn pages(&self) -> EntityClient<'_, Page, T> {
        EntityClient::new(&self.rest)
    }

    /// Facade for `/rest/v1/action/`.
    pub const fn actions(&self) -> EntityClient<'_, Action, T> {
        EntityClient::new(&self.rest)
    }

    /// Facade for `/rest/v1/tag/`.
    pub const fn tags(&self) -> EntityClient<'_, Tag, T> {
        EntityClient::new(&self.rest)
    }
}

impl<T> Deref for ActionKit<T> {
    type Target = RestClient<T>;

    fn deref(&self) -> &Self::Target {
        &self.rest
    }
}
