//! Marketplace API client
//!
//! One method per endpoint. List endpoints walk every page and return
//! [`Retrieval`]s, so partial results survive errors and cancellation.
//! Every operation has a `_with_cancel` twin observing a
//! [`CancellationToken`].

use super::params::{EventParams, ListingsParams, OrderParams, DEFAULT_LISTINGS_LIMIT};
use super::source::EndpointSource;
use crate::auth::{AuthConfig, Authenticator};
use crate::decode::{
    decode_response, AssetsPage, CollectionsPage, EventsPage, ListingsPage, OrdersPage,
    OrdersV2Page, PageEnvelope, SingleCollection,
};
use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, HttpTransport, Transport, TransportRequest};
use crate::models::{Asset, CollectionDetail, Event, Order, OrderV2};
use crate::pagination::{
    CursorPaginator, Interrupted, NoPaginator, OffsetPaginator, PageRequest, PageStream,
    PaginationLimits, Paginator, Retrieval,
};
use crate::types::{Network, QueryParams};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Event stream path
pub const EVENTS_PATH: &str = "/api/v1/events";

/// Legacy order book path
pub const ORDERS_PATH: &str = "/wyvern/v1/orders";

/// Seaport listings path
pub const LISTINGS_V2_PATH: &str = "/v2/orders/ethereum/seaport/listings";

/// Asset search path
pub const ASSETS_PATH: &str = "/api/v1/assets";

/// Collection list path
pub const COLLECTIONS_PATH: &str = "/api/v1/collections";

/// Client-wide paging defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientSettings {
    /// Page size for events when the params leave it at zero
    pub event_page_size: u32,
    /// Page size for orders when the params leave it at zero
    pub order_page_size: u32,
    /// Guards applied to every multi-page retrieval
    pub limits: PaginationLimits,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            event_page_size: super::params::DEFAULT_EVENT_LIMIT,
            order_page_size: super::params::DEFAULT_ORDER_LIMIT,
            limits: PaginationLimits::default(),
        }
    }
}

/// Client for the marketplace REST API
#[derive(Clone)]
pub struct OpenseaClient {
    transport: Arc<dyn Transport>,
    auth: Authenticator,
    settings: ClientSettings,
}

impl OpenseaClient {
    /// Mainnet client authenticating with `api_key`
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::for_network(Network::Mainnet, api_key)
    }

    /// Testnet client authenticating with `api_key`
    pub fn rinkeby(api_key: impl Into<String>) -> Result<Self> {
        Self::for_network(Network::Rinkeby, api_key)
    }

    /// Client for `network`
    pub fn for_network(network: Network, api_key: impl Into<String>) -> Result<Self> {
        let config = HttpClientConfig::builder()
            .base_url(network.base_url())
            .build();
        Self::with_http_config(config, api_key)
    }

    /// Mainnet client whose requests are relayed through `proxy`
    pub fn with_proxy(api_key: impl Into<String>, proxy: impl Into<String>) -> Result<Self> {
        let config = HttpClientConfig::builder().proxy(proxy).build();
        Self::with_http_config(config, api_key)
    }

    /// Client over the reqwest transport with explicit configuration
    pub fn with_http_config(config: HttpClientConfig, api_key: impl Into<String>) -> Result<Self> {
        let transport = HttpTransport::with_config(config)?;
        Ok(Self::with_transport(
            Arc::new(transport),
            AuthConfig::api_key(api_key),
        ))
    }

    /// Client over any transport
    pub fn with_transport(transport: Arc<dyn Transport>, auth: AuthConfig) -> Self {
        Self {
            transport,
            auth: Authenticator::new(auth),
            settings: ClientSettings::default(),
        }
    }

    /// Replace the paging defaults
    #[must_use]
    pub fn with_settings(mut self, settings: ClientSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Active paging defaults
    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// Issue one authenticated GET and decode the envelope
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: QueryParams) -> Result<T> {
        let mut request = TransportRequest::get(path).with_query(query);
        self.auth.apply(&mut request);
        debug!("GET {}", request.path_and_query());
        let response = self.transport.execute(request).await?;
        decode_response(&response)
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// Lazy page walk over the event stream
    pub fn event_pages(
        &self,
        params: &EventParams,
    ) -> PageStream<EndpointSource<EventsPage>, CursorPaginator> {
        let mut params = params.clone();
        if params.limit == 0 {
            params.limit = self.settings.event_page_size;
        }
        let source = EndpointSource::new(self.clone(), EVENTS_PATH, params.to_query());
        PageStream::new(source, CursorPaginator::resume_from(params.cursor))
            .with_limits(self.settings.limits)
    }

    /// Every event matching `params`, following the cursor to the end
    pub async fn retrieve_events(&self, params: &EventParams) -> Retrieval<Event> {
        self.event_pages(params).drain().await
    }

    /// [`Self::retrieve_events`], stopping early when `cancel` fires
    pub async fn retrieve_events_with_cancel(
        &self,
        params: &EventParams,
        cancel: &CancellationToken,
    ) -> Retrieval<Event> {
        self.event_pages(params)
            .with_cancellation(cancel.clone())
            .drain()
            .await
    }

    // ========================================================================
    // Orders
    // ========================================================================

    /// Orders matching `params`: one page, or every page when `find_all`
    pub async fn get_orders(&self, params: &OrderParams, find_all: bool) -> Retrieval<Order> {
        self.orders(params, find_all, None).await
    }

    /// [`Self::get_orders`] with cooperative cancellation
    pub async fn get_orders_with_cancel(
        &self,
        params: &OrderParams,
        find_all: bool,
        cancel: &CancellationToken,
    ) -> Retrieval<Order> {
        self.orders(params, find_all, Some(cancel)).await
    }

    /// Every order on `contract` listed after `listed_after`, oldest first
    pub async fn get_orders_listed_after(
        &self,
        contract: &str,
        listed_after: i64,
    ) -> Retrieval<Order> {
        let params = OrderParams::listed_after(contract, listed_after);
        self.orders(&params, true, None).await
    }

    /// [`Self::get_orders_listed_after`] with cooperative cancellation
    pub async fn get_orders_listed_after_with_cancel(
        &self,
        contract: &str,
        listed_after: i64,
        cancel: &CancellationToken,
    ) -> Retrieval<Order> {
        let params = OrderParams::listed_after(contract, listed_after);
        self.orders(&params, true, Some(cancel)).await
    }

    async fn orders(
        &self,
        params: &OrderParams,
        find_all: bool,
        cancel: Option<&CancellationToken>,
    ) -> Retrieval<Order> {
        let limit = if params.limit == 0 {
            self.settings.order_page_size
        } else {
            params.limit
        };
        let source = EndpointSource::<OrdersPage>::new(self.clone(), ORDERS_PATH, params.to_query());

        if find_all {
            let mut limits = self.settings.limits;
            if params.delay.is_some() {
                limits.page_delay = params.delay;
            }
            let paginator = OffsetPaginator::new(limit).starting_at(params.offset);
            drain(PageStream::new(source, paginator).with_limits(limits), cancel).await
        } else {
            let paginator = NoPaginator::new(PageRequest::Offset {
                offset: params.offset,
                limit,
            });
            drain(PageStream::new(source, paginator), cancel).await
        }
    }

    // ========================================================================
    // Listings
    // ========================================================================

    /// Seaport listings for the given tokens, following the cursor
    pub async fn get_active_listings_v2(&self, params: &ListingsParams) -> Retrieval<OrderV2> {
        self.listings_v2(params, None).await
    }

    /// [`Self::get_active_listings_v2`], stopping early when `cancel` fires
    pub async fn get_active_listings_v2_with_cancel(
        &self,
        params: &ListingsParams,
        cancel: &CancellationToken,
    ) -> Retrieval<OrderV2> {
        self.listings_v2(params, Some(cancel)).await
    }

    async fn listings_v2(
        &self,
        params: &ListingsParams,
        cancel: Option<&CancellationToken>,
    ) -> Retrieval<OrderV2> {
        let source =
            EndpointSource::<OrdersV2Page>::new(self.clone(), LISTINGS_V2_PATH, params.to_query());
        let pages = PageStream::new(source, CursorPaginator::new()).with_limits(self.settings.limits);
        drain(pages, cancel).await
    }

    /// Legacy listings of each token, one request per token.
    ///
    /// `interval` pauses between tokens.
    pub async fn get_active_listings(
        &self,
        contract: &str,
        token_ids: &[String],
        interval: Duration,
    ) -> Retrieval<Order> {
        self.listings_per_token(contract, token_ids, interval, None)
            .await
    }

    /// [`Self::get_active_listings`]; `cancel` also cuts the pause between tokens short
    pub async fn get_active_listings_with_cancel(
        &self,
        contract: &str,
        token_ids: &[String],
        interval: Duration,
        cancel: &CancellationToken,
    ) -> Retrieval<Order> {
        self.listings_per_token(contract, token_ids, interval, Some(cancel))
            .await
    }

    async fn listings_per_token(
        &self,
        contract: &str,
        token_ids: &[String],
        interval: Duration,
        cancel: Option<&CancellationToken>,
    ) -> Retrieval<Order> {
        let mut records = Vec::new();
        for (idx, token_id) in token_ids.iter().enumerate() {
            if idx > 0 && !interval.is_zero() {
                if let Err(error) = cancellable(cancel, tokio::time::sleep(interval)).await {
                    return Err(Interrupted { records, error });
                }
            }

            let path = format!("/api/v1/asset/{contract}/{token_id}/listings");
            let mut query = QueryParams::new();
            query.push("limit", DEFAULT_LISTINGS_LIMIT.to_string());

            match cancellable(cancel, self.get::<ListingsPage>(&path, query)).await {
                Ok(Ok(page)) => records.extend(page.into_page().records),
                Ok(Err(error)) | Err(error) => return Err(Interrupted { records, error }),
            }
        }
        info!(
            tokens = token_ids.len(),
            records = records.len(),
            "Retrieved listings for {} tokens",
            token_ids.len()
        );
        Ok(records)
    }

    // ========================================================================
    // Assets
    // ========================================================================

    /// One asset by contract and token id
    pub async fn get_single_asset(&self, contract: &str, token_id: &str) -> Result<Asset> {
        self.single_asset(contract, token_id, None).await
    }

    /// [`Self::get_single_asset`] unless `cancel` fires first
    pub async fn get_single_asset_with_cancel(
        &self,
        contract: &str,
        token_id: &str,
        cancel: &CancellationToken,
    ) -> Result<Asset> {
        self.single_asset(contract, token_id, Some(cancel)).await
    }

    async fn single_asset(
        &self,
        contract: &str,
        token_id: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<Asset> {
        let path = format!("/api/v1/asset/{contract}/{token_id}");
        cancellable(cancel, self.get(&path, QueryParams::new())).await?
    }

    /// First asset of a contract, as a sample of its metadata
    pub async fn get_asset_detail(&self, contract: &str) -> Result<Asset> {
        self.asset_detail(contract, None).await
    }

    /// [`Self::get_asset_detail`] unless `cancel` fires first
    pub async fn get_asset_detail_with_cancel(
        &self,
        contract: &str,
        cancel: &CancellationToken,
    ) -> Result<Asset> {
        self.asset_detail(contract, Some(cancel)).await
    }

    async fn asset_detail(
        &self,
        contract: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<Asset> {
        let mut query = QueryParams::new();
        query
            .push("asset_contract_address", contract)
            .push("limit", "1");
        let page: AssetsPage = cancellable(cancel, self.get(ASSETS_PATH, query)).await??;
        page.assets
            .into_iter()
            .next()
            .ok_or_else(|| Error::not_found(format!("No asset returned for contract {contract}")))
    }

    // ========================================================================
    // Collections
    // ========================================================================

    /// One window of the collection list
    pub async fn get_collections(&self, offset: u32, limit: u32) -> Result<Vec<CollectionDetail>> {
        self.collections(offset, limit, None).await
    }

    /// [`Self::get_collections`] unless `cancel` fires first
    pub async fn get_collections_with_cancel(
        &self,
        offset: u32,
        limit: u32,
        cancel: &CancellationToken,
    ) -> Result<Vec<CollectionDetail>> {
        self.collections(offset, limit, Some(cancel)).await
    }

    async fn collections(
        &self,
        offset: u32,
        limit: u32,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<CollectionDetail>> {
        let mut query = QueryParams::new();
        query
            .push("offset", offset.to_string())
            .push("limit", limit.to_string());
        let page: CollectionsPage = cancellable(cancel, self.get(COLLECTIONS_PATH, query)).await??;
        Ok(page.collections)
    }

    /// One collection by slug
    pub async fn get_single_collection(&self, slug: &str) -> Result<CollectionDetail> {
        self.single_collection(slug, None).await
    }

    /// [`Self::get_single_collection`] unless `cancel` fires first
    pub async fn get_single_collection_with_cancel(
        &self,
        slug: &str,
        cancel: &CancellationToken,
    ) -> Result<CollectionDetail> {
        self.single_collection(slug, Some(cancel)).await
    }

    async fn single_collection(
        &self,
        slug: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<CollectionDetail> {
        let path = format!("/api/v1/collection/{slug}");
        let wrapper: SingleCollection =
            cancellable(cancel, self.get(&path, QueryParams::new())).await??;
        Ok(wrapper.collection)
    }
}

impl std::fmt::Debug for OpenseaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenseaClient")
            .field("auth", self.auth.config())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

/// Drain `pages`, observing `cancel` when given
async fn drain<W, P>(
    pages: PageStream<EndpointSource<W>, P>,
    cancel: Option<&CancellationToken>,
) -> Retrieval<W::Record>
where
    W: PageEnvelope + DeserializeOwned + Send,
    P: Paginator,
{
    match cancel {
        Some(token) => pages.with_cancellation(token.clone()).drain().await,
        None => pages.drain().await,
    }
}

/// Run `future` unless `cancel` fires first
async fn cancellable<F: Future>(
    cancel: Option<&CancellationToken>,
    future: F,
) -> Result<F::Output> {
    match cancel {
        Some(token) if token.is_cancelled() => Err(Error::Cancelled),
        Some(token) => {
            tokio::select! {
                biased;
                () = token.cancelled() => Err(Error::Cancelled),
                output = future => Ok(output),
            }
        }
        None => Ok(future.await),
    }
}
