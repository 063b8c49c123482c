//! Cursor-following pagination over ActionKit collection endpoints.
//!
//! A collection GET returns an envelope whose `meta.next` is the path of the
//! following page. [`Pager`] walks that chain one page at a time:
//!
//! ```text
//! Start { path, query } --GET--> page, next = Some(cursor) --> Next(cursor)
//! Next(cursor)          --GET--> page, next = None         --> Done
//! ```
//!
//! The first request carries the caller's query; later requests use the
//! cursor path as given by the server, which already encodes the offset.
//! Exactly one request is in flight at any time and a failed request ends
//! the walk.

use std::collections::BTreeMap;

use crate::clients::Transport;
use crate::rest::{QueryOptions, Resource, ResourceError, ResponseShape, RestClient};

/// One page of records plus the cursor to the next.
#[derive(Debug)]
pub(crate) struct Page {
    pub(crate) items: Vec<Resource>,
    pub(crate) next: Option<String>,
}

impl Page {
    fn from_shape(shape: ResponseShape, path: &str) -> Self {
        match shape {
            ResponseShape::Envelope { objects, next, .. } => Self {
                items: objects,
                next,
            },
            ResponseShape::List(items) => Self { items, next: None },
            ResponseShape::Single(resource) => {
                tracing::warn!(
                    path,
                    "Collection response has no `objects` array; keeping the body as one record"
                );
                Self {
                    items: vec![resource],
                    next: None,
                }
            }
        }
    }
}

#[derive(Debug)]
enum PagerState {
    Start {
        path: String,
        query: BTreeMap<String, String>,
    },
    Next(String),
    Done,
}

/// Walks a paginated collection page by page.
#[derive(Debug)]
pub(crate) struct Pager {
    state: PagerState,
    pages: usize,
}

impl Pager {
    pub(crate) fn new(path: impl Into<String>, query: BTreeMap<String, String>) -> Self {
        Self {
            state: PagerState::Start {
                path: path.into(),
                query,
            },
            pages: 0,
        }
    }

    /// Fetches the next page, or returns `None` once the chain is exhausted.
    ///
    /// After an error the pager is finished.
    pub(crate) async fn next_page<T: Transport>(
        &mut self,
        client: &RestClient<T>,
    ) -> Result<Option<Page>, ResourceError> {
        let (path, query) = match std::mem::replace(&mut self.state, PagerState::Done) {
            PagerState::Start { path, query } => (path, query),
            PagerState::Next(cursor) => (cursor, BTreeMap::new()),
            PagerState::Done => return Ok(None),
        };

        let shape = client.fetch_shape(&path, query).await?;
        let page = Page::from_shape(shape, &path);
        self.pages += 1;

        tracing::debug!(
            path = %path,
            page = self.pages,
            items = page.items.len(),
            has_next = page.next.is_some(),
            "Fetched collection page"
        );

        if let Some(next) = &page.next {
            self.state = PagerState::Next(next.clone());
        }

        Ok(Some(page))
    }

    /// Drains every remaining page into one list, in server order.
    pub(crate) async fn collect<T: Transport>(
        mut self,
        client: &RestClient<T>,
    ) -> Result<Vec<Resource>, ResourceError> {
        let mut results = Vec::new();
        while let Some(mut page) = self.next_page(client).await? {
            results.append(&mut page.items);
        }
        Ok(results)
    }
}

impl<T: Transport> RestClient<T> {
    /// Fetches every record of a collection by following `meta.next`.
    ///
    /// `_limit` defaults to 100 and `_offset` to 0 when `options` leaves
    /// them out. Requested fields are populated page by page, before the
    /// next page is requested. Records come back in server order.
    ///
    /// # Errors
    ///
    /// Any failed page or populate step aborts the walk and is returned as
    /// is; records gathered so far are discarded.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let users = client
    ///     .fetch_all("/rest/v1/user/", QueryOptions::new().filter("state", "NY"))
    ///     .await?;
    /// ```
    pub async fn fetch_all(
        &self,
        path: &str,
        options: QueryOptions,
    ) -> Result<Vec<Resource>, ResourceError> {
        let (query, populate) = options.with_pagination_defaults().into_parts();
        let mut pager = Pager::new(path, query);
        let mut results = Vec::new();

        while let Some(mut page) = pager.next_page(self).await? {
            self.populate_resources(&populate, &mut page.items).await?;
            results.append(&mut page.items);
        }

        tracing::debug!(path, total = results.len(), "Fetched full collection");
        Ok(results)
    }

    /// Fetches every record behind `path` with default paging and no populate.
    pub(crate) async fn collect_all(&self, path: &str) -> Result<Vec<Resource>, ResourceError> {
        let query = QueryOptions::new().with_pagination_defaults().to_query();
        Pager::new(path, query).collect(self).await
    }
}
