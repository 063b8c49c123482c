//! HTTP client for ActionKit API communication.
//!
//! This module provides the [`HttpClient`] type, the `reqwest`-backed
//! [`Transport`] used in production.

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::Transport;
use crate::config::{ActionKitConfig, Password, Username};

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the ActionKit API.
///
/// The client handles:
/// - Base URI construction from the configured domain or `api_host`
/// - Default headers (`Accept` and a fixed `User-Agent`)
/// - HTTP Basic authentication on every request
/// - JSON decoding of response bodies
///
/// It does not retry and does not judge status codes.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use actionkit_api::clients::{HttpClient, HttpRequest, HttpMethod, Transport};
///
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/rest/v1/user/")
///     .build()
///     .unwrap();
///
/// let response = client.send(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://act.example.org`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    username: Username,
    password: Password,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &ActionKitConfig) -> Result<Self, HttpError> {
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("ActionKit API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_uri: config.base_uri(),
            default_headers,
            username: config.username().clone(),
            password: config.password().clone(),
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }
}

impl Transport for HttpClient {
    /// Sends an HTTP request to the ActionKit API.
    ///
    /// `status_text` on the response is the canonical reason phrase for the
    /// status code, not the phrase on the server's status line.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if request validation fails (`InvalidRequest`)
    /// or a network error occurs (`Network`).
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}", self.base_uri, request.path);

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        req_builder = req_builder.basic_auth(self.username.as_ref(), Some(self.password.as_ref()));

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            "Sending ActionKit API request"
        );

        let res = req_builder.send().await?;

        let status = res.status();
        let code = status.as_u16();
        // The canonical phrase; reqwest does not expose the one the server sent
        let status_text = status.canonical_reason().unwrap_or_default();
        let body_text = res.text().await?;

        Ok(HttpResponse::new(
            code,
            status_text,
            HttpResponse::decode_body(&body_text),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{DataType, HttpRequest};
    use crate::config::{Domain, HostUrl};
    use serde_json::json;
    use wiremock::matchers::{basic_auth, body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_config(api_host: Option<&str>) -> ActionKitConfig {
        let mut builder = ActionKitConfig::builder()
            .domain(Domain::new("act.example.org").unwrap())
            .username(Username::new("api-user").unwrap())
            .password(Password::new("api-pass").unwrap());
        if let Some(host) = api_host {
            builder = builder.api_host(HostUrl::new(host).unwrap());
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_client_construction_uses_https_domain() {
        let client = HttpClient::new(&create_test_config(None)).unwrap();
        assert_eq!(client.base_uri(), "https://act.example.org");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config(None)).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("ActionKit API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config(None)).unwrap();

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[tokio::test]
    async fn test_send_attaches_credentials_and_headers() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/user/"))
            .and(basic_auth("api-user", "api-pass"))
            .and(header("accept", "application/json"))
            .and(query_param("_limit", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"objects": []})))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new(&create_test_config(Some(&server.uri()))).unwrap();
        let request = HttpRequest::builder(HttpMethod::Get, "/rest/v1/user/")
            .query_param("_limit", "100")
            .build()
            .unwrap();

        let response = client.send(request).await.unwrap();

        assert_eq!(response.code, 200);
        assert_eq!(response.status_text, "OK");
        assert_eq!(response.body, json!({"objects": []}));
    }

    #[tokio::test]
    async fn test_send_posts_json_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/rest/v1/user/"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"email": "a@b.com"})))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new(&create_test_config(Some(&server.uri()))).unwrap();
        let request = HttpRequest::builder(HttpMethod::Post, "/rest/v1/user/")
            .body(json!({"email": "a@b.com"}))
            .body_type(DataType::Json)
            .build()
            .unwrap();

        let response = client.send(request).await.unwrap();

        assert_eq!(response.code, 201);
        assert_eq!(response.body, json!({}));
    }

    #[tokio::test]
    async fn test_send_does_not_judge_status_codes() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/rest/v1/tag/9/"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = HttpClient::new(&create_test_config(Some(&server.uri()))).unwrap();
        let request = HttpRequest::builder(HttpMethod::Delete, "/rest/v1/tag/9/")
            .build()
            .unwrap();

        let response = client.send(request).await.unwrap();

        assert_eq!(response.code, 404);
        assert_eq!(response.status_text, "Not Found");
    }

    #[tokio::test]
    async fn test_send_surfaces_connection_errors() {
        // Nothing listens on port 9 of the loopback interface
        let client = HttpClient::new(&create_test_config(Some("http://127.0.0.1:9"))).unwrap();
        let request = HttpRequest::builder(HttpMethod::Get, "/rest/v1/")
            .build()
            .unwrap();

        let result = client.send(request).await;

        assert!(matches!(result, Err(HttpError::Network(_))));
    }

    #[tokio::test]
    async fn test_status_text_is_canonical_reason() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/rest/v1/user/"))
            .respond_with(ResponseTemplate::new(422))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/user/"))
            .respond_with(ResponseTemplate::new(299))
            .mount(&server)
            .await;

        let client = HttpClient::new(&create_test_config(Some(&server.uri()))).unwrap();

        let request = HttpRequest::builder(HttpMethod::Post, "/rest/v1/user/")
            .body(json!({}))
            .body_type(DataType::Json)
            .build()
            .unwrap();
        let response = client.send(request).await.unwrap();
        assert_eq!(response.status_text, "Unprocessable Entity");

        let request = HttpRequest::builder(HttpMethod::Get, "/rest/v1/user/")
            .build()
            .unwrap();
        let response = client.send(request).await.unwrap();
        assert_eq!(response.code, 299);
        assert_eq!(response.status_text, "");
    }
}
