//! Outgoing requests: method, path, optional JSON body and query.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use crate::clients::errors::InvalidHttpRequestError;

/// The four verbs the ActionKit CRUD endpoints answer to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// Read a record or a page of records.
    Get,
    /// Create a record (201).
    Post,
    /// Replace fields on a record (204).
    Put,
    /// Remove a record (204).
    Delete,
}

impl HttpMethod {
    /// Lowercase verb, as used in log lines and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
        }
    }

    const fn requires_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encoding of a request body. ActionKit only takes JSON.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// `application/json`
    Json,
}

impl DataType {
    /// Value for the `Content-Type` header.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
        }
    }
}

/// One request for a [`Transport`](crate::clients::Transport).
///
/// `path` is appended to the instance origin as is, so it may already carry
/// a query string (pagination cursors do). `query` is added on top.
///
/// ```rust
/// use actionkit_api::clients::{DataType, HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let page = HttpRequest::builder(HttpMethod::Get, "/rest/v1/page/")
///     .query_param("type", "petition")
///     .build()
///     .unwrap();
/// assert!(page.query.is_some());
///
/// let signup = HttpRequest::builder(HttpMethod::Post, "/rest/v1/user/")
///     .body(json!({"email": "a@b.com"}))
///     .body_type(DataType::Json)
///     .build()
///     .unwrap();
/// assert_eq!(signup.body_type, Some(DataType::Json));
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub http_method: HttpMethod,
    pub path: String,
    pub body: Option<Value>,
    pub body_type: Option<DataType>,
    /// Extra query parameters; `None` when there are none.
    pub query: Option<BTreeMap<String, String>>,
}

impl HttpRequest {
    /// Starts a request for `method` on `path`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder {
            request: Self {
                http_method: method,
                path: path.into(),
                body: None,
                body_type: None,
                query: None,
            },
        }
    }

    /// Checks that a body has a declared type and that POST and PUT carry one.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingBodyType`] or
    /// [`InvalidHttpRequestError::MissingBody`].
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        match (&self.body, self.body_type) {
            (Some(_), None) => Err(InvalidHttpRequestError::MissingBodyType),
            (None, _) if self.http_method.requires_body() => {
                Err(InvalidHttpRequestError::MissingBody {
                    method: self.http_method.to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}

/// Accumulates the optional parts of an [`HttpRequest`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    request: HttpRequest,
}

impl HttpRequestBuilder {
    #[must_use]
    pub fn body(mut self, body: impl Into<Value>) -> Self {
        self.request.body = Some(body.into());
        self
    }

    #[must_use]
    pub const fn body_type(mut self, body_type: DataType) -> Self {
        self.request.body_type = Some(body_type);
        self
    }

    /// Replaces the query. An empty map clears it.
    #[must_use]
    pub fn query(mut self, query: BTreeMap<String, String>) -> Self {
        self.request.query = (!query.is_empty()).then_some(query);
        self
    }

    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request
            .query
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Finishes the request.
    ///
    /// # Errors
    ///
    /// Same as [`HttpRequest::verify`].
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        self.request.verify()?;
        Ok(self.request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_renders_lowercase() {
        let verbs: Vec<String> = [
            HttpMethod::Get,
            HttpMethod::Post,
            HttpMethod::Put,
            HttpMethod::Delete,
        ]
        .iter()
        .map(ToString::to_string)
        .collect();

        assert_eq!(verbs, ["get", "post", "put", "delete"]);
    }

    #[test]
    fn test_get_and_delete_need_no_body() {
        for method in [HttpMethod::Get, HttpMethod::Delete] {
            let request = HttpRequest::builder(method, "/rest/v1/tag/3/").build().unwrap();
            assert!(request.body.is_none());
            assert!(request.query.is_none());
        }
    }

    #[test]
    fn test_put_keeps_json_body() {
        let request = HttpRequest::builder(HttpMethod::Put, "/rest/v1/user/7/")
            .body(json!({"first_name": "Ada"}))
            .body_type(DataType::Json)
            .build()
            .unwrap();

        assert_eq!(request.body, Some(json!({"first_name": "Ada"})));
        assert_eq!(
            request.body_type.map(|t| t.as_content_type()),
            Some("application/json")
        );
    }

    #[test]
    fn test_post_without_body_is_rejected() {
        let result = HttpRequest::builder(HttpMethod::Post, "/rest/v1/user/").build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "post"
        ));
    }

    #[test]
    fn test_body_without_type_is_rejected() {
        let result = HttpRequest::builder(HttpMethod::Get, "/rest/v1/")
            .body(json!({"key": "value"}))
            .build();

        assert_eq!(result.unwrap_err(), InvalidHttpRequestError::MissingBodyType);
    }

    #[test]
    fn test_query_map_and_params() {
        let cleared = HttpRequest::builder(HttpMethod::Get, "/rest/v1/user/")
            .query_param("state", "NY")
            .query(BTreeMap::new())
            .build()
            .unwrap();
        assert!(cleared.query.is_none());

        let request = HttpRequest::builder(HttpMethod::Get, "/rest/v1/user/")
            .query_param("_limit", "100")
            .query_param("email", "a@b.com")
            .build()
            .unwrap();
        let query = request.query.unwrap();
        assert_eq!(query.get("_limit").map(String::as_str), Some("100"));
        assert_eq!(query.get("email").map(String::as_str), Some("a@b.com"));
    }
}
