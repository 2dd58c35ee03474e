//! Response body shapes
//!
//! Success wrappers for each endpoint family plus the error body.

use crate::models::{Asset, CollectionDetail, Event, Order, OrderV2};
use crate::pagination::Page;
use serde::{Deserialize, Serialize};

/// Error body returned with non-200 statuses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub msg: String,
}

/// A success body that carries one page of records
pub trait PageEnvelope {
    /// Record type on the page
    type Record: Send;

    /// Split into records and continuation cursor
    fn into_page(self) -> Page<Self::Record>;
}

fn cursor(next: Option<String>) -> Option<String> {
    next.filter(|next| !next.is_empty())
}

/// `GET /api/v1/events`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventsPage {
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub asset_events: Vec<Event>,
}

impl PageEnvelope for EventsPage {
    type Record = Event;

    fn into_page(self) -> Page<Event> {
        Page::with_cursor(self.asset_events, cursor(self.next))
    }
}

/// `GET /wyvern/v1/orders`
///
/// `count` is informational; termination relies on short pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrdersPage {
    #[serde(default)]
    pub count: i64,
    pub orders: Vec<Order>,
}

impl PageEnvelope for OrdersPage {
    type Record = Order;

    fn into_page(self) -> Page<Order> {
        Page::new(self.orders)
    }
}

/// `GET /v2/orders/{chain}/seaport/listings`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrdersV2Page {
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub orders: Vec<OrderV2>,
}

impl PageEnvelope for OrdersV2Page {
    type Record = OrderV2;

    fn into_page(self) -> Page<OrderV2> {
        Page::with_cursor(self.orders, cursor(self.next))
    }
}

/// `GET /api/v1/asset/{contract}/{token}/listings`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingsPage {
    pub listings: Vec<Order>,
    #[serde(default)]
    pub seaport_listings: Vec<OrderV2>,
}

impl PageEnvelope for ListingsPage {
    type Record = Order;

    fn into_page(self) -> Page<Order> {
        Page::new(self.listings)
    }
}

/// `GET /api/v1/assets`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetsPage {
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub assets: Vec<Asset>,
}

impl PageEnvelope for AssetsPage {
    type Record = Asset;

    fn into_page(self) -> Page<Asset> {
        Page::with_cursor(self.assets, cursor(self.next))
    }
}

/// `GET /api/v1/collections`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionsPage {
    pub collections: Vec<CollectionDetail>,
}

impl PageEnvelope for CollectionsPage {
    type Record = CollectionDetail;

    fn into_page(self) -> Page<CollectionDetail> {
        Page::new(self.collections)
    }
}

/// `GET /api/v1/collection/{slug}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SingleCollection {
    pub collection: CollectionDetail,
}
