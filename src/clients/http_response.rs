//! What the transport hands back for one round-trip.

/// Status line and decoded body of an ActionKit API response.
///
/// The body is always JSON: an empty body becomes `{}` and a body that
/// fails to parse is kept verbatim as a JSON string, so an HTML error page
/// can still be reported.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// Status code.
    pub code: u16,
    /// Canonical reason phrase for `code` (e.g. "Bad Request"), or empty
    /// for codes without one.
    pub status_text: String,
    /// Decoded body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Builds a response from its parts.
    #[must_use]
    pub fn new(code: u16, status_text: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            code,
            status_text: status_text.into(),
            body,
        }
    }

    /// Turns raw body text into JSON the way the transport does.
    #[must_use]
    pub fn decode_body(text: &str) -> serde_json::Value {
        if text.trim().is_empty() {
            return serde_json::json!({});
        }
        serde_json::from_str(text).unwrap_or_else(|_| serde_json::Value::String(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_body_decodes_to_empty_object() {
        assert_eq!(HttpResponse::decode_body(""), json!({}));
        assert_eq!(HttpResponse::decode_body("  \n"), json!({}));
    }

    #[test]
    fn test_json_body_decodes() {
        assert_eq!(
            HttpResponse::decode_body(r#"{"objects": [], "meta": {"next": null}}"#),
            json!({"objects": [], "meta": {"next": null}})
        );
        assert_eq!(HttpResponse::decode_body("[1, 2]"), json!([1, 2]));
    }

    #[test]
    fn test_non_json_body_is_kept_as_string() {
        assert_eq!(
            HttpResponse::decode_body("<html>oops</html>"),
            json!("<html>oops</html>")
        );
    }

    #[test]
    fn test_new_keeps_status_line() {
        let response = HttpResponse::new(204, "No Content", json!({}));
        assert_eq!(response.code, 204);
        assert_eq!(response.status_text, "No Content");
    }
}
