//! ActionKit pages.
//!
//! Pages are the petitions, signups, donation forms and events that users
//! act on. Every page has a `type` and a set of tags; the `tags` field is a
//! locator and can be populated.

use crate::clients::Transport;
use crate::rest::{find_by, Entity, EntityClient, FixedFilter, QueryOptions, Resource, ResourceError};

/// The `page` resource type.
#[derive(Clone, Copy, Debug)]
pub struct Page;

impl Entity for Page {
    const NAME: &'static str = "page";
}

impl<T: Transport> EntityClient<'_, Page, T> {
    /// Fetches every page carrying the tag named `tag`.
    ///
    /// # Errors
    ///
    /// Same as [`Fetchable::get_all`](crate::rest::Fetchable::get_all).
    pub async fn find_by_tag(
        &self,
        tag: &str,
        options: QueryOptions,
    ) -> Result<Vec<Resource>, ResourceError> {
        find_by(self, FixedFilter::new("tags__name", tag), options).await
    }

    /// Fetches every page of the given type (e.g. `"petition"`).
    ///
    /// # Errors
    ///
    /// Same as [`Fetchable::get_all`](crate::rest::Fetchable::get_all).
    pub async fn find_by_type(
        &self,
        page_type: &str,
        options: QueryOptions,
    ) -> Result<Vec<Resource>, ResourceError> {
        find_by(self, FixedFilter::new("type", page_type), options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::testing::ScriptedTransport;
    use crate::rest::RestClient;
    use serde_json::json;

    #[tokio::test]
    async fn test_find_by_tag_uses_tag_name_filter() {
        let transport = ScriptedTransport::new().get("/rest/v1/page/", json!({"objects": []}));
        let rest = RestClient::with_transport(transport);
        let pages = EntityClient::<Page, _>::new(&rest);

        pages
            .find_by_tag("climate", QueryOptions::new().filter("tags__name", "other"))
            .await
            .unwrap();

        let query = rest.transport().requests()[0].query.clone().unwrap();
        assert_eq!(query.get("tags__name"), Some(&"climate".to_string()));
    }

    #[tokio::test]
    async fn test_find_by_type_populates_tags() {
        let transport = ScriptedTransport::new()
            .get(
                "/rest/v1/page/",
                json!({"objects": [{"id": 3, "type": "petition", "tags": "/rest/v1/page/3/tags/"}]}),
            )
            .get("/rest/v1/page/3/tags/", json!({"objects": [{"name": "bees"}]}));
        let rest = RestClient::with_transport(transport);
        let pages = EntityClient::<Page, _>::new(&rest);

        let found = pages
            .find_by_type("petition", QueryOptions::new().populate("tags"))
            .await
            .unwrap();

        assert_eq!(found[0]["tags"], json!([{"name": "bees"}]));
        let query = rest.transport().requests()[0].query.clone().unwrap();
        assert_eq!(query.get("type"), Some(&"petition".to_string()));
    }
}
