//! Query options for fetch operations.
//!
//! [`QueryOptions`] holds the query parameters sent with a request plus the
//! list of fields to populate after the fetch. The populate list is consumed
//! by the client and never sent to the server.
//!
//! [`FixedFilter`] is a single filter that a facade helper forces onto the
//! caller's options; on a key collision the fixed value wins.

use std::collections::BTreeMap;

/// Page size applied by [`RestClient::fetch_all`](crate::rest::RestClient::fetch_all) when none is given.
pub const DEFAULT_LIMIT: u32 = 100;

/// Query parameters and populate fields for a fetch.
///
/// # Example
///
/// ```rust
/// use actionkit_api::rest::QueryOptions;
///
/// let options = QueryOptions::new()
///     .limit(25)
///     .filter("status", "active")
///     .populate("tags");
///
/// assert_eq!(options.get("_limit"), Some("25"));
/// assert_eq!(options.populated_fields(), ["tags"]);
/// assert!(!options.to_query().contains_key("populate"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryOptions {
    params: BTreeMap<String, String>,
    populate: Vec<String>,
}

impl QueryOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a query parameter, replacing any previous value for `key`.
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(key.into(), value.to_string());
        self
    }

    /// Sets the page size (`_limit`).
    #[must_use]
    pub fn limit(self, limit: u32) -> Self {
        self.filter("_limit", limit)
    }

    /// Sets the starting offset (`_offset`).
    #[must_use]
    pub fn offset(self, offset: u32) -> Self {
        self.filter("_offset", offset)
    }

    /// Sets the sort field (`order_by`).
    #[must_use]
    pub fn order_by(self, field: impl ToString) -> Self {
        self.filter("order_by", field)
    }

    /// Adds one field to populate after the fetch.
    #[must_use]
    pub fn populate(mut self, field: impl Into<String>) -> Self {
        self.populate.push(field.into());
        self
    }

    /// Adds several fields to populate, in order.
    #[must_use]
    pub fn populate_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.populate.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Returns the value of a query parameter.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Returns the fields to populate, in request order.
    #[must_use]
    pub fn populated_fields(&self) -> &[String] {
        &self.populate
    }

    /// Returns the query parameters to send, without the populate list.
    #[must_use]
    pub fn to_query(&self) -> BTreeMap<String, String> {
        self.params.clone()
    }

    /// Splits the options into query parameters and populate fields.
    #[must_use]
    pub fn into_parts(self) -> (BTreeMap<String, String>, Vec<String>) {
        (self.params, self.populate)
    }

    /// Fills in `_limit` and `_offset` when the caller left them out.
    #[must_use]
    pub fn with_pagination_defaults(mut self) -> Self {
        self.params
            .entry("_limit".to_string())
            .or_insert_with(|| DEFAULT_LIMIT.to_string());
        self.params
            .entry("_offset".to_string())
            .or_insert_with(|| "0".to_string());
        self
    }
}

/// A filter a facade helper always applies.
///
/// # Example
///
/// ```rust
/// use actionkit_api::rest::{FixedFilter, QueryOptions};
///
/// let caller = QueryOptions::new().filter("email", "old@example.com").limit(5);
/// let merged = FixedFilter::new("email", "a@b.com").apply(caller);
///
/// assert_eq!(merged.get("email"), Some("a@b.com"));
/// assert_eq!(merged.get("_limit"), Some("5"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedFilter {
    key: &'static str,
    value: String,
}

impl FixedFilter {
    /// Creates a filter forcing `key` to `value`.
    #[must_use]
    pub fn new(key: &'static str, value: impl ToString) -> Self {
        Self {
            key,
            value: value.to_string(),
        }
    }

    /// Returns the filtered parameter name.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Returns the forced value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Merges the filter into caller options; the filter wins on collision.
    #[must_use]
    pub fn apply(&self, options: QueryOptions) -> QueryOptions {
        options.filter(self.key, &self.value)
    }
}
