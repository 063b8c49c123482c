//! HTTP transport types for ActionKit API communication.
//!
//! This module is the transport adapter: it turns an [`HttpRequest`] into a
//! network round-trip and hands back an [`HttpResponse`]. It adds the default
//! headers and HTTP Basic credentials but never decides whether a status code
//! means success; that is [`RestClient`](crate::rest::RestClient)'s job.
//!
//! # Overview
//!
//! - [`Transport`]: The narrow interface the REST layer depends on
//! - [`HttpClient`]: The `reqwest`-backed [`Transport`]
//! - [`HttpRequest`] / [`HttpRequestBuilder`]: A request to be sent
//! - [`HttpResponse`]: Status line and decoded JSON body
//! - [`HttpMethod`] / [`DataType`]: Method and body content type
//! - [`HttpError`]: Transport failures
//!
//! # Example
//!
//! ```rust,ignore
//! use actionkit_api::clients::{HttpClient, HttpMethod, HttpRequest, Transport};
//!
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/rest/v1/page/")
//!     .query_param("_limit", "10")
//!     .build()
//!     .unwrap();
//!
//! let response = client.send(request).await?;
//! println!("{} {}", response.code, response.status_text);
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use transport::Transport;
