//! Resource request client for the ActionKit REST API.
//!
//! [`RestClient`] issues single-resource operations against a path and
//! decides success by the exact status code each operation expects:
//!
//! | Operation    | Method | Success |
//! |--------------|--------|---------|
//! | `fetch_one`  | GET    | 200     |
//! | `create_one` | POST   | 201     |
//! | `update_one` | PUT    | 204     |
//! | `delete_one` | DELETE | 204     |
//! | `count`      | GET    | 200     |
//!
//! Any other status becomes [`ResourceError::Status`]. The paginated
//! `fetch_all` and the `populate` step are implemented alongside, in the
//! `pagination` and `populate` modules.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::clients::{DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::config::ActionKitConfig;
use crate::rest::path::{validate_path, API_PREFIX};
use crate::rest::{QueryOptions, ResourceError, ResponseShape};

/// Client for path-level operations on the ActionKit REST API.
///
/// Generic over the [`Transport`] so tests can swap the network out; the
/// default is the `reqwest`-backed [`HttpClient`].
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync` whenever its transport is.
///
/// # Example
///
/// ```rust,ignore
/// use actionkit_api::rest::{QueryOptions, RestClient};
///
/// let client = RestClient::new(&config)?;
///
/// let page = client
///     .fetch_one("/rest/v1/page/42/", QueryOptions::new().populate("tags"))
///     .await?;
///
/// let users = client.fetch_all("/rest/v1/user/", QueryOptions::new()).await?;
/// let total = client.count("/rest/v1/user/", QueryOptions::new()).await?;
/// ```
#[derive(Debug)]
pub struct RestClient<T = HttpClient> {
    transport: T,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a client that talks HTTP to the configured instance.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the HTTP client cannot be created.
    pub fn new(config: &ActionKitConfig) -> Result<Self, HttpError> {
        Ok(Self::with_transport(HttpClient::new(config)?))
    }
}

impl<T: Transport> RestClient<T> {
    /// Creates a client over an arbitrary transport.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches a resource or a single page of a collection.
    ///
    /// Query parameters from `options` are sent with the request. When
    /// `options` names fields to populate, they are resolved before returning.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Status`] unless the server answers 200, or
    /// any error raised while populating.
    pub async fn fetch_one(
        &self,
        path: &str,
        options: QueryOptions,
    ) -> Result<ResponseShape, ResourceError> {
        let (query, populate) = options.into_parts();
        let shape = self.fetch_shape(path, query).await?;
        self.populate(&populate, shape).await
    }

    /// Fetches the API root, which lists the available endpoints.
    ///
    /// # Errors
    ///
    /// Same as [`fetch_one`](Self::fetch_one).
    pub async fn fetch_root(&self) -> Result<ResponseShape, ResourceError> {
        self.fetch_one(API_PREFIX, QueryOptions::new()).await
    }

    /// Creates a resource by POSTing `data` as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Status`] unless the server answers 201.
    pub async fn create_one<D>(&self, path: &str, data: &D) -> Result<(), ResourceError>
    where
        D: Serialize + ?Sized,
    {
        let body = serde_json::to_value(data)?;
        self.execute(HttpMethod::Post, path, BTreeMap::new(), Some(body), 201)
            .await?;
        Ok(())
    }

    /// Updates a resource by PUTting `data` as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Status`] unless the server answers 204.
    pub async fn update_one<D>(&self, path: &str, data: &D) -> Result<(), ResourceError>
    where
        D: Serialize + ?Sized,
    {
        let body = serde_json::to_value(data)?;
        self.execute(HttpMethod::Put, path, BTreeMap::new(), Some(body), 204)
            .await?;
        Ok(())
    }

    /// Deletes a resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Status`] unless the server answers 204.
    pub async fn delete_one(&self, path: &str) -> Result<(), ResourceError> {
        self.execute(HttpMethod::Delete, path, BTreeMap::new(), None, 204)
            .await?;
        Ok(())
    }

    /// Counts the records of a collection.
    ///
    /// Returns `meta.total_count` from the response body, or `1` when the
    /// body carries no count (a single record).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Status`] unless the server answers 200.
    pub async fn count(&self, path: &str, options: QueryOptions) -> Result<u64, ResourceError> {
        let response = self
            .execute(HttpMethod::Get, path, options.to_query(), None, 200)
            .await?;

        Ok(response
            .body
            .pointer("/meta/total_count")
            .and_then(Value::as_u64)
            .unwrap_or(1))
    }

    /// GETs `path` and decodes the body, without populating anything.
    pub(crate) async fn fetch_shape(
        &self,
        path: &str,
        query: BTreeMap<String, String>,
    ) -> Result<ResponseShape, ResourceError> {
        let response = self
            .execute(HttpMethod::Get, path, query, None, 200)
            .await?;
        ResponseShape::decode(response.body)
    }

    async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        query: BTreeMap<String, String>,
        body: Option<Value>,
        expected: u16,
    ) -> Result<HttpResponse, ResourceError> {
        validate_path(path)?;

        let mut builder = HttpRequest::builder(method, path).query(query);
        if let Some(body) = body {
            builder = builder.body(body).body_type(DataType::Json);
        }
        let request = builder.build().map_err(HttpError::from)?;

        let response = self.transport.send(request).await?;

        if response.code != expected {
            tracing::debug!(
                %method,
                path,
                code = response.code,
                expected,
                "ActionKit API returned an unexpected status"
            );
            return Err(ResourceError::Status {
                code: response.code,
                status_text: response.status_text,
            });
        }

        Ok(response)
    }
}
