//! Endpoint client
//!
//! [`OpenseaClient`] exposes one operation per marketplace endpoint:
//!
//! | Operation | Path | Paging |
//! |---|---|---|
//! | `retrieve_events` | `/api/v1/events` | cursor |
//! | `get_orders` | `/wyvern/v1/orders` | offset, or a single page |
//! | `get_orders_listed_after` | `/wyvern/v1/orders` | offset |
//! | `get_active_listings_v2` | `/v2/orders/ethereum/seaport/listings` | cursor |
//! | `get_active_listings` | `/api/v1/asset/{c}/{t}/listings` | one request per token |
//! | `get_single_asset` | `/api/v1/asset/{c}/{t}` | none |
//! | `get_asset_detail` | `/api/v1/assets` | none |
//! | `get_collections` | `/api/v1/collections` | caller-chosen window |
//! | `get_single_collection` | `/api/v1/collection/{slug}` | none |

mod client;
mod params;
mod source;

pub use client::{
    ClientSettings, OpenseaClient, ASSETS_PATH, COLLECTIONS_PATH, EVENTS_PATH, LISTINGS_V2_PATH,
    ORDERS_PATH,
};
pub use params::{
    EventParams, ListingsParams, OrderBy, OrderDirection, OrderParams, DEFAULT_EVENT_LIMIT,
    DEFAULT_LISTINGS_LIMIT, DEFAULT_ORDER_LIMIT, LISTED_AFTER_PAGE_SIZE,
};
pub use source::EndpointSource;
