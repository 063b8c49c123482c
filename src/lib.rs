//! # ActionKit API
//!
//! A Rust client for the ActionKit REST API (`/rest/v1/`).
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ActionKitConfig`] and [`ActionKitConfigBuilder`]
//! - Validated newtypes for the instance domain and HTTP Basic credentials
//! - An async HTTP transport with default headers and Basic auth
//! - A REST client with status-code success rules per operation
//! - Pagination that follows `meta.next` until a collection is exhausted
//! - Field population that replaces locator fields with the records they name
//! - Facades for users, pages, actions and tags
//!
//! ## Quick Start
//!
//! ```rust
//! use actionkit_api::{ActionKitConfig, Domain, Password, Username};
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
//!
//! ## Fetching Collections
//!
//! ```rust,ignore
//! use actionkit_api::ActionKit;
//! use actionkit_api::rest::{Fetchable, QueryOptions};
//!
//! let api = ActionKit::new(&config)?;
//!
//! // Every page of results, with each action's page resolved
//! let actions = api
//!     .actions()
//!     .find_by_user(1234, QueryOptions::new().populate("page"))
//!     .await?;
//!
//! // A single record
//! let user = api.users().get(1234, QueryOptions::new()).await?;
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events: `debug` for each request, page and
//! populated field, `warn` when a collection body has no `objects` array.
//! Install any `tracing` subscriber to see them.
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is passed explicitly
//! - **Fail-fast validation**: newtypes validate on construction
//! - **All-or-nothing calls**: a failed page or sub-fetch aborts the whole call
//! - **Async-first**: plain `async fn`s with no runtime of their own; run them on Tokio

mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

pub use api::ActionKit;

// Re-export public types at crate root for convenience
pub use config::{ActionKitConfig, ActionKitConfigBuilder, Domain, HostUrl, Password, Username};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, Transport,
};

// Re-export REST types
pub use rest::{QueryOptions, Resource, ResourceError, ResponseShape, RestClient};
