//! Entity facades over the REST client.
//!
//! An [`Entity`] names one ActionKit resource type (`user`, `page`, ...).
//! [`EntityClient`] binds an entity to a [`RestClient`] and implements the
//! capability traits once for every entity:
//!
//! | Trait          | Methods            | Request                      |
//! |----------------|--------------------|------------------------------|
//! | [`Fetchable`]  | `get`, `get_all`   | GET record / paginated GET   |
//! | [`Creatable`]  | `create`           | POST collection              |
//! | [`Updatable`]  | `update`           | PUT record                   |
//! | [`Deletable`]  | `delete`           | DELETE record                |
//! | [`Countable`]  | `count`            | GET collection, `total_count`|
//!
//! Entity-specific filter helpers (`find_by_email`, `find_by_tag`, ...) live
//! next to each entity in [`resources`](crate::rest::resources) and go
//! through [`find_by`].
//!
//! # Example
//!
//! ```rust,ignore
//! use actionkit_api::rest::{Fetchable, Countable, QueryOptions};
//!
//! let users = api.users();
//! let user = users.get(1234, QueryOptions::new()).await?;
//! let active = users.get_all(QueryOptions::new().filter("subscription_status", "subscribed")).await?;
//! let total = users.count(QueryOptions::new()).await?;
//! ```

use std::fmt::{self, Display};
use std::marker::PhantomData;

use serde::Serialize;

use crate::clients::{HttpClient, Transport};
use crate::rest::path;
use crate::rest::{FixedFilter, QueryOptions, Resource, ResourceError, RestClient};

/// An ActionKit resource type.
pub trait Entity {
    /// Path segment of the resource type (e.g. `"user"`).
    const NAME: &'static str;

    /// Returns `/rest/v1/{name}/`.
    #[must_use]
    fn collection_path() -> String {
        path::collection_path(Self::NAME)
    }

    /// Returns `/rest/v1/{name}/{id}/`.
    #[must_use]
    fn record_path<I: Display + ?Sized>(id: &I) -> String {
        path::record_path(Self::NAME, id)
    }
}

/// Reading single records and whole collections.
#[allow(async_fn_in_trait)]
pub trait Fetchable {
    /// Fetches one record by id, populating any requested fields.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Status`] unless the server answers 200, and
    /// [`ResourceError::UnexpectedBody`] if the body is not a single record.
    async fn get<I: Display>(&self, id: I, options: QueryOptions)
        -> Result<Resource, ResourceError>;

    /// Fetches every record matching `options`, following pagination.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any page or populate step.
    async fn get_all(&self, options: QueryOptions) -> Result<Vec<Resource>, ResourceError>;
}

/// Creating records.
#[allow(async_fn_in_trait)]
pub trait Creatable {
    /// POSTs `data` to the collection.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Status`] unless the server answers 201.
    async fn create<D: Serialize + ?Sized>(&self, data: &D) -> Result<(), ResourceError>;
}

/// Updating records.
#[allow(async_fn_in_trait)]
pub trait Updatable {
    /// PUTs `data` to the record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Status`] unless the server answers 204.
    async fn update<I: Display, D: Serialize + ?Sized>(
        &self,
        id: I,
        data: &D,
    ) -> Result<(), ResourceError>;
}

/// Deleting records.
#[allow(async_fn_in_trait)]
pub trait Deletable {
    /// DELETEs the record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Status`] unless the server answers 204.
    async fn delete<I: Display>(&self, id: I) -> Result<(), ResourceError>;
}

/// Counting records.
#[allow(async_fn_in_trait)]
pub trait Countable {
    /// Returns the number of records matching `options`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Status`] unless the server answers 200.
    async fn count(&self, options: QueryOptions) -> Result<u64, ResourceError>;
}

/// A [`RestClient`] bound to one entity type.
pub struct EntityClient<'a, E, T = HttpClient> {
    rest: &'a RestClient<T>,
    entity: PhantomData<E>,
}

impl<'a, E: Entity, T: Transport> EntityClient<'a, E, T> {
    /// Binds `E` to `rest`.
    #[must_use]
    pub const fn new(rest: &'a RestClient<T>) -> Self {
        Self {
            rest,
            entity: PhantomData,
        }
    }

    /// Returns the underlying REST client.
    #[must_use]
    pub const fn rest(&self) -> &'a RestClient<T> {
        self.rest
    }
}

impl<E, T> Clone for EntityClient<'_, E, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, T> Copy for EntityClient<'_, E, T> {}

impl<E: Entity, T> fmt::Debug for EntityClient<'_, E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityClient")
            .field("entity", &E::NAME)
            .finish_non_exhaustive()
    }
}

impl<E: Entity, T: Transport> Fetchable for EntityClient<'_, E, T> {
    async fn get<I: Display>(
        &self,
        id: I,
        options: QueryOptions,
    ) -> Result<Resource, ResourceError> {
        self.rest
            .fetch_one(&E::record_path(&id), options)
            .await?
            .into_single()
    }

    async fn get_all(&self, options: QueryOptions) -> Result<Vec<Resource>, ResourceError> {
        self.rest.fetch_all(&E::collection_path(), options).await
    }
}

impl<E: Entity, T: Transport> Creatable for EntityClient<'_, E, T> {
    async fn create<D: Serialize + ?Sized>(&self, data: &D) -> Result<(), ResourceError> {
        self.rest.create_one(&E::collection_path(), data).await
    }
}

impl<E: Entity, T: Transport> Updatable for EntityClient<'_, E, T> {
    async fn update<I: Display, D: Serialize + ?Sized>(
        &self,
        id: I,
        data: &D,
    ) -> Result<(), ResourceError> {
        self.rest.update_one(&E::record_path(&id), data).await
    }
}

impl<E: Entity, T: Transport> Deletable for EntityClient<'_, E, T> {
    async fn delete<I: Display>(&self, id: I) -> Result<(), ResourceError> {
        self.rest.delete_one(&E::record_path(&id)).await
    }
}

impl<E: Entity, T: Transport> Countable for EntityClient<'_, E, T> {
    async fn count(&self, options: QueryOptions) -> Result<u64, ResourceError> {
        self.rest.count(&E::collection_path(), options).await
    }
}

/// Fetches every record matching `filter` merged over `options`.
///
/// The filter value replaces any caller value for the same key.
///
/// # Errors
///
/// Same as [`Fetchable::get_all`].
pub async fn find_by<F: Fetchable>(
    fetchable: &F,
    filter: FixedFilter,
    options: QueryOptions,
) -> Result<Vec<Resource>, ResourceError> {
    tracing::debug!(key = filter.key(), value = filter.value(), "Applying fixed filter");
    fetchable.get_all(filter.apply(options)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpMethod;
    use crate::rest::testing::ScriptedTransport;
    use serde_json::json;

    #[derive(Debug)]
    struct Widget;

    impl Entity for Widget {
        const NAME: &'static str = "widget";
    }

    #[test]
    fn test_entity_paths() {
        assert_eq!(Widget::collection_path(), "/rest/v1/widget/");
        assert_eq!(Widget::record_path(&12), "/rest/v1/widget/12/");
    }

    #[tokio::test]
    async fn test_get_returns_single_record() {
        let transport = ScriptedTransport::new().get("/rest/v1/widget/3/", json!({"id": 3}));
        let rest = RestClient::with_transport(transport);
        let widgets = EntityClient::<Widget, _>::new(&rest);

        let widget = widgets.get(3, QueryOptions::new()).await.unwrap();

        assert_eq!(widget["id"], json!(3));
    }

    #[tokio::test]
    async fn test_get_rejects_collection_body() {
        let transport = ScriptedTransport::new().get("/rest/v1/widget/3/", json!({"objects": []}));
        let rest = RestClient::with_transport(transport);
        let widgets = EntityClient::<Widget, _>::new(&rest);

        let result = widgets.get(3, QueryOptions::new()).await;

        assert!(matches!(result, Err(ResourceError::UnexpectedBody { .. })));
    }

    #[tokio::test]
    async fn test_write_operations_use_entity_paths() {
        let transport = ScriptedTransport::new()
            .route(HttpMethod::Post, "/rest/v1/widget/", 201, json!({}))
            .route(HttpMethod::Put, "/rest/v1/widget/8/", 204, json!({}))
            .route(HttpMethod::Delete, "/rest/v1/widget/8/", 204, json!({}));
        let rest = RestClient::with_transport(transport);
        let widgets = EntityClient::<Widget, _>::new(&rest);

        widgets.create(&json!({"name": "a"})).await.unwrap();
        widgets.update(8, &json!({"name": "b"})).await.unwrap();
        widgets.delete(8).await.unwrap();

        let requests = rest.transport().requests();
        let calls: Vec<_> = requests
            .iter()
            .map(|r| (r.http_method, r.path.as_str()))
            .collect();
        assert_eq!(
            calls,
            vec![
                (HttpMethod::Post, "/rest/v1/widget/"),
                (HttpMethod::Put, "/rest/v1/widget/8/"),
                (HttpMethod::Delete, "/rest/v1/widget/8/"),
            ]
        );
    }

    #[tokio::test]
    async fn test_count_forwards_filters() {
        let transport = ScriptedTransport::new().get(
            "/rest/v1/widget/",
            json!({"objects": [], "meta": {"total_count": 12}}),
        );
        let rest = RestClient::with_transport(transport);
        let widgets = EntityClient::<Widget, _>::new(&rest);

        let count = widgets
            .count(QueryOptions::new().filter("color", "red"))
            .await
            .unwrap();

        assert_eq!(count, 12);
        let query = rest.transport().requests()[0].query.clone().unwrap();
        assert_eq!(query.get("color"), Some(&"red".to_string()));
    }

    #[tokio::test]
    async fn test_find_by_overrides_caller_value() {
        let transport = ScriptedTransport::new().get("/rest/v1/widget/", json!({"objects": []}));
        let rest = RestClient::with_transport(transport);
        let widgets = EntityClient::<Widget, _>::new(&rest);

        find_by(
            &widgets,
            FixedFilter::new("color", "blue"),
            QueryOptions::new().filter("color", "red").limit(5),
        )
        .await
        .unwrap();

        let query = rest.transport().requests()[0].query.clone().unwrap();
        assert_eq!(query.get("color"), Some(&"blue".to_string()));
        assert_eq!(query.get("_limit"), Some(&"5".to_string()));
    }
}
