//! Field population: replacing resource locators with the records they name.
//!
//! ActionKit links records by path. A page's `tags` field, for example,
//! holds `"/rest/v1/page/42/tags/"` rather than the tags themselves.
//! Populating `tags` fetches every record behind that path (following
//! pagination) and stores them in place of the locator.

use serde_json::Value;

use crate::clients::Transport;
use crate::rest::shape::records_to_value;
use crate::rest::{Resource, ResourceError, ResponseShape, RestClient};

impl<T: Transport> RestClient<T> {
    /// Resolves `fields` on every record in `response`.
    ///
    /// Fields missing from a record are skipped. With no fields the response
    /// is returned untouched and nothing is fetched. Record order and count
    /// are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidLocator`] if a field holds anything
    /// but a path string, or the error of any failed locator fetch.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let page = client.fetch_one("/rest/v1/page/42/", QueryOptions::new()).await?;
    /// let page = client.populate(&["tags"], page).await?;
    /// ```
    pub async fn populate<S: AsRef<str>>(
        &self,
        fields: &[S],
        mut response: ResponseShape,
    ) -> Result<ResponseShape, ResourceError> {
        self.populate_resources(fields, response.resources_mut())
            .await?;
        Ok(response)
    }

    pub(crate) async fn populate_resources<S: AsRef<str>>(
        &self,
        fields: &[S],
        resources: &mut [Resource],
    ) -> Result<(), ResourceError> {
        if fields.is_empty() {
            return Ok(());
        }

        for resource in resources.iter_mut() {
            for field in fields {
                let field = field.as_ref();
                let Some(value) = resource.get(field) else {
                    continue;
                };
                let locator = match value {
                    Value::String(locator) => locator.clone(),
                    other => {
                        return Err(ResourceError::InvalidLocator {
                            field: field.to_string(),
                            value: other.clone(),
                        })
                    }
                };

                let related = self.collect_all(&locator).await?;
                tracing::debug!(field, locator = %locator, count = related.len(), "Populated field");
                resource.insert(field.to_string(), records_to_value(related));
            }
        }

        Ok(())
    }
}
