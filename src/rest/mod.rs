//! REST layer for the ActionKit API.
//!
//! This module provides:
//!
//! - **[`RestClient`]**: path-level requests with status-code success rules,
//!   paginated `fetch_all`, and field population
//! - **[`ResponseShape`]**: the three body shapes a GET can return
//! - **[`QueryOptions`]** / **[`FixedFilter`]**: query parameters and populate fields
//! - **Entity facades**: [`EntityClient`] plus the [`Fetchable`], [`Creatable`],
//!   [`Updatable`], [`Deletable`] and [`Countable`] capability traits
//! - **Path building**: [`collection_path`] and [`record_path`] under [`API_PREFIX`]
//! - **[`ResourceError`]**: every failure a REST call can produce
//!
//! # Example
//!
//! ```rust,ignore
//! use actionkit_api::rest::{QueryOptions, RestClient};
//!
//! let client = RestClient::new(&config)?;
//!
//! // Walk the whole collection, resolving each page's tags
//! let pages = client
//!     .fetch_all("/rest/v1/page/", QueryOptions::new().populate("tags"))
//!     .await?;
//!
//! for page in &pages {
//!     println!("{}: {}", page["id"], page["tags"]);
//! }
//! ```

mod client;
mod errors;
mod options;
mod pagination;
mod path;
mod populate;
mod resource;
pub mod resources;
mod shape;

#[cfg(test)]
pub(crate) mod testing;

pub use client::RestClient;
pub use errors::ResourceError;
pub use options::{FixedFilter, QueryOptions, DEFAULT_LIMIT};
pub use path::{collection_path, record_path, API_PREFIX};
pub use resource::{
    find_by, Countable, Creatable, Deletable, Entity, EntityClient, Fetchable, Updatable,
};
pub use shape::{Resource, ResponseShape};
