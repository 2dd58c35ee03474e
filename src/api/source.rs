//! Page source for list endpoints

use super::client::OpenseaClient;
use crate::decode::PageEnvelope;
use crate::error::Result;
use crate::pagination::{Page, PageRequest, PageSource};
use crate::types::QueryParams;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// Fetches pages of one list endpoint.
///
/// The base query is sent with every request; the paging parameters
/// (`cursor`, or `offset` and `limit`) are replaced per request.
pub struct EndpointSource<W> {
    client: OpenseaClient,
    path: String,
    query: QueryParams,
    envelope: PhantomData<fn() -> W>,
}

impl<W> EndpointSource<W> {
    /// Source for `path` with a fixed base query
    pub fn new(client: OpenseaClient, path: impl Into<String>, query: QueryParams) -> Self {
        Self {
            client,
            path: path.into(),
            query,
            envelope: PhantomData,
        }
    }

    /// Endpoint path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query for one page request
    pub fn page_query(&self, request: &PageRequest) -> QueryParams {
        let mut query = self.query.clone();
        match request {
            PageRequest::Cursor(_) => match request.cursor() {
                Some(cursor) => {
                    query.set("cursor", cursor);
                }
                None => {
                    query.remove("cursor");
                }
            },
            PageRequest::Offset { offset, limit } => {
                query
                    .set("offset", offset.to_string())
                    .set("limit", limit.to_string());
            }
        }
        query
    }
}

#[async_trait]
impl<W> PageSource for EndpointSource<W>
where
    W: PageEnvelope + DeserializeOwned + Send,
{
    type Record = W::Record;

    async fn fetch_page(&mut self, request: &PageRequest) -> Result<Page<W::Record>> {
        let query = self.page_query(request);
        let envelope: W = self.client.get(&self.path, query).await?;
        Ok(envelope.into_page())
    }
}
