//! Decoding of response bodies into a [`ResponseShape`].
//!
//! ActionKit answers a GET with one of three shapes:
//!
//! - a single record: `{ "id": 1, ... }`
//! - a bare list of records: `[ {...}, {...} ]`
//! - a collection envelope: `{ "objects": [...], "meta": { "next": ..., "total_count": ... } }`
//!
//! The body is classified once, here, and the rest of the client works with
//! the tagged variant instead of probing JSON structure.

use serde_json::{Map, Value};

use crate::rest::ResourceError;

/// One remote record: field name to value.
pub type Resource = Map<String, Value>;

/// A decoded GET response.
///
/// # Example
///
/// ```rust
/// use actionkit_api::rest::ResponseShape;
/// use serde_json::json;
///
/// let shape = ResponseShape::decode(json!({
///     "objects": [{"id": 1}, {"id": 2}],
///     "meta": {"next": "/rest/v1/user/?_offset=2", "total_count": 3}
/// }))
/// .unwrap();
///
/// assert_eq!(shape.resources().len(), 2);
/// assert_eq!(shape.next_cursor(), Some("/rest/v1/user/?_offset=2"));
/// assert_eq!(shape.total_count(), Some(3));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseShape {
    /// A single record.
    Single(Resource),
    /// A bare JSON array of records.
    List(Vec<Resource>),
    /// A paginated collection envelope.
    Envelope {
        /// Records on this page, in server order.
        objects: Vec<Resource>,
        /// Path of the next page, if any.
        next: Option<String>,
        /// Total records across all pages, if reported.
        total_count: Option<u64>,
    },
}

impl ResponseShape {
    /// Classifies a decoded JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnexpectedBody`] if the body is not an object
    /// or array, if a list element is not an object, or if the envelope's
    /// `objects` or `meta.next` have the wrong type.
    pub fn decode(body: Value) -> Result<Self, ResourceError> {
        match body {
            Value::Object(mut map) => match map.remove("objects") {
                Some(objects) => {
                    let objects = decode_records(objects, "objects")?;
                    let meta = map.get("meta");
                    let next = match meta.and_then(|m| m.get("next")) {
                        None | Some(Value::Null) => None,
                        Some(Value::String(next)) => Some(next.clone()),
                        Some(other) => {
                            return Err(ResourceError::unexpected_body(format!(
                                "meta.next must be a path string or null, found {other}"
                            )))
                        }
                    };
                    let total_count = meta
                        .and_then(|m| m.get("total_count"))
                        .and_then(Value::as_u64);

                    Ok(Self::Envelope {
                        objects,
                        next,
                        total_count,
                    })
                }
                None => Ok(Self::Single(map)),
            },
            Value::Array(items) => Ok(Self::List(decode_records(Value::Array(items), "list")?)),
            other => Err(ResourceError::unexpected_body(format!(
                "expected a JSON object or array, found {other}"
            ))),
        }
    }

    /// Returns the records carried by this response.
    ///
    /// A single record is returned as a one-element slice.
    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        match self {
            Self::Single(resource) => std::slice::from_ref(resource),
            Self::List(resources) | Self::Envelope {
                objects: resources, ..
            } => resources.as_slice(),
        }
    }

    /// Mutable access to the records carried by this response.
    pub fn resources_mut(&mut self) -> &mut [Resource] {
        match self {
            Self::Single(resource) => std::slice::from_mut(resource),
            Self::List(resources) | Self::Envelope {
                objects: resources, ..
            } => resources.as_mut_slice(),
        }
    }

    /// Returns the next-page cursor of an envelope.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        match self {
            Self::Envelope { next, .. } => next.as_deref(),
            _ => None,
        }
    }

    /// Returns the total record count of an envelope.
    #[must_use]
    pub fn total_count(&self) -> Option<u64> {
        match self {
            Self::Envelope { total_count, .. } => *total_count,
            _ => None,
        }
    }

    /// Returns the single record, or an error for list-shaped responses.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnexpectedBody`] unless the shape is `Single`.
    pub fn into_single(self) -> Result<Resource, ResourceError> {
        match self {
            Self::Single(resource) => Ok(resource),
            Self::List(_) => Err(ResourceError::unexpected_body(
                "expected a single record, found a list",
            )),
            Self::Envelope { .. } => Err(ResourceError::unexpected_body(
                "expected a single record, found a collection envelope",
            )),
        }
    }

    /// Returns all records, consuming the response.
    #[must_use]
    pub fn into_resources(self) -> Vec<Resource> {
        match self {
            Self::Single(resource) => vec![resource],
            Self::List(resources) | Self::Envelope {
                objects: resources, ..
            } => resources,
        }
    }

    /// Re-encodes the response as the JSON the server sent.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Single(resource) => Value::Object(resource),
            Self::List(resources) => records_to_value(resources),
            Self::Envelope {
                objects,
                next,
                total_count,
            } => serde_json::json!({
                "objects": records_to_value(objects),
                "meta": { "next": next, "total_count": total_count },
            }),
        }
    }
}

pub(crate) fn records_to_value(resources: Vec<Resource>) -> Value {
    Value::Array(resources.into_iter().map(Value::Object).collect())
}

fn decode_records(value: Value, context: &str) -> Result<Vec<Resource>, ResourceError> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(ResourceError::unexpected_body(format!(
                "{context} must be a JSON array, found {other}"
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(resource) => Ok(resource),
            other => Err(ResourceError::unexpected_body(format!(
                "{context}[{index}] must be a JSON object, found {other}"
            ))),
        })
        .collect()
}
