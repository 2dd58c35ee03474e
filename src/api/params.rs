//! Endpoint query parameters
//!
//! Zero-valued filters are omitted from the encoded query. A few
//! parameters are always sent; each `to_query` notes which.

use crate::models::{AuctionType, EventType, SaleKind, Side};
use crate::types::QueryParams;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Default page size of the event stream
pub const DEFAULT_EVENT_LIMIT: u32 = 300;

/// Default page size of the order book
pub const DEFAULT_ORDER_LIMIT: u32 = 50;

/// Page size used when walking orders listed after a timestamp
pub const LISTED_AFTER_PAGE_SIZE: u32 = 100;

/// Page size of listing endpoints
pub const DEFAULT_LISTINGS_LIMIT: u32 = 50;

// ============================================================================
// Events
// ============================================================================

/// Filters for `GET /api/v1/events`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventParams {
    pub asset_contract_address: String,
    /// Token id in decimal; empty for all tokens
    pub token_id: String,
    pub account_address: String,
    pub event_type: Option<EventType>,
    /// Restrict to marketplace events; always sent
    pub only_opensea: bool,
    pub auction_type: Option<AuctionType>,
    pub collection_slug: String,
    /// Cursor to resume from
    pub cursor: String,
    /// Unix seconds
    pub occurred_before: i64,
    /// Unix seconds
    pub occurred_after: i64,
    pub limit: u32,
}

impl EventParams {
    /// Parameters with the default page size
    pub fn new() -> Self {
        Self {
            limit: DEFAULT_EVENT_LIMIT,
            ..Default::default()
        }
    }

    /// Contract to filter on
    #[must_use]
    pub fn asset_contract_address(mut self, address: impl Into<String>) -> Self {
        self.asset_contract_address = address.into();
        self
    }

    /// Single token of the contract
    #[must_use]
    pub fn token_id(mut self, token_id: impl Into<String>) -> Self {
        self.token_id = token_id.into();
        self
    }

    /// Events involving this account
    #[must_use]
    pub fn account_address(mut self, address: impl Into<String>) -> Self {
        self.account_address = address.into();
        self
    }

    /// Only events of this kind
    #[must_use]
    pub fn event_type(mut self, event_type: EventType) -> Self {
        self.event_type = Some(event_type);
        self
    }

    /// Whether to restrict to marketplace events
    #[must_use]
    pub fn only_opensea(mut self, only: bool) -> Self {
        self.only_opensea = only;
        self
    }

    /// Only auctions of this kind
    #[must_use]
    pub fn auction_type(mut self, auction_type: AuctionType) -> Self {
        self.auction_type = Some(auction_type);
        self
    }

    /// Events of one collection
    #[must_use]
    pub fn collection_slug(mut self, slug: impl Into<String>) -> Self {
        self.collection_slug = slug.into();
        self
    }

    /// Resume from a cursor returned by an earlier walk
    #[must_use]
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = cursor.into();
        self
    }

    /// Events at or after this time
    #[must_use]
    pub fn occurred_after(mut self, unix_seconds: i64) -> Self {
        self.occurred_after = unix_seconds;
        self
    }

    /// Events before this time
    #[must_use]
    pub fn occurred_before(mut self, unix_seconds: i64) -> Self {
        self.occurred_before = unix_seconds;
        self
    }

    /// Page size; zero falls back to the client default
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Encode; `only_opensea` is always present as `true` or `false`
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_nonempty("asset_contract_address", &self.asset_contract_address)
            .push_nonempty("token_id", &self.token_id)
            .push_nonempty("collection_slug", &self.collection_slug)
            .push_nonempty("account_address", &self.account_address);
        if let Some(event_type) = &self.event_type {
            query.push("event_type", event_type.as_str());
        }
        query.push("only_opensea", self.only_opensea.to_string());
        if let Some(auction_type) = &self.auction_type {
            query.push("auction_type", auction_type.as_str());
        }
        query
            .push_nonempty("cursor", &self.cursor)
            .push_nonzero("occurred_after", self.occurred_after)
            .push_nonzero("occurred_before", self.occurred_before)
            .push_nonzero("limit", self.limit);
        query
    }
}

// ============================================================================
// Orders
// ============================================================================

/// Sort key of the order book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderBy {
    #[default]
    CreatedDate,
    EthPrice,
}

impl OrderBy {
    /// Wire name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreatedDate => "created_date",
            Self::EthPrice => "eth_price",
        }
    }
}

impl FromStr for OrderBy {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created_date" => Ok(Self::CreatedDate),
            "eth_price" => Ok(Self::EthPrice),
            other => Err(crate::Error::config(format!("Unknown order_by: {other}"))),
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction of the order book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    Asc,
    #[default]
    Desc,
}

impl OrderDirection {
    /// Wire name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for OrderDirection {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(crate::Error::config(format!(
                "Unknown order_direction: {other}"
            ))),
        }
    }
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters for `GET /wyvern/v1/orders`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderParams {
    pub asset_contract_address: String,
    pub payment_token_address: String,
    pub maker: String,
    pub taker: String,
    pub owner: String,
    pub is_english: Option<bool>,
    pub bundled: Option<bool>,
    pub include_bundled: Option<bool>,
    /// Unix seconds
    pub listed_after: i64,
    /// Unix seconds
    pub listed_before: i64,
    /// Sent once per id
    pub token_ids: Vec<String>,
    pub side: Option<Side>,
    pub sale_kind: Option<SaleKind>,
    pub limit: u32,
    pub offset: u32,
    pub order_by: OrderBy,
    pub order_direction: OrderDirection,
    /// Pause between pages when walking every page
    pub delay: Option<Duration>,
}

impl Default for OrderParams {
    fn default() -> Self {
        Self {
            asset_contract_address: String::new(),
            payment_token_address: String::new(),
            maker: String::new(),
            taker: String::new(),
            owner: String::new(),
            is_english: None,
            bundled: None,
            include_bundled: None,
            listed_after: 0,
            listed_before: 0,
            token_ids: Vec::new(),
            side: None,
            sale_kind: None,
            limit: DEFAULT_ORDER_LIMIT,
            offset: 0,
            order_by: OrderBy::default(),
            order_direction: OrderDirection::default(),
            delay: None,
        }
    }
}

impl OrderParams {
    /// Parameters with the default page size and sort
    pub fn new() -> Self {
        Self::default()
    }

    /// Orders on one contract listed after `listed_after`, oldest first
    pub fn listed_after(contract: impl Into<String>, listed_after: i64) -> Self {
        Self {
            asset_contract_address: contract.into(),
            listed_after,
            limit: LISTED_AFTER_PAGE_SIZE,
            order_by: OrderBy::CreatedDate,
            order_direction: OrderDirection::Asc,
            ..Self::default()
        }
    }

    /// Contract to filter on
    #[must_use]
    pub fn asset_contract_address(mut self, address: impl Into<String>) -> Self {
        self.asset_contract_address = address.into();
        self
    }

    /// Tokens to filter on; replaces any earlier list
    #[must_use]
    pub fn token_ids<I, V>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.token_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Orders made by this account
    #[must_use]
    pub fn maker(mut self, maker: impl Into<String>) -> Self {
        self.maker = maker.into();
        self
    }

    /// Orders on assets owned by this account
    #[must_use]
    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    /// Buy or sell side
    #[must_use]
    pub fn side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    /// Page size; zero falls back to the client default
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Sort key and direction
    #[must_use]
    pub fn order(mut self, by: OrderBy, direction: OrderDirection) -> Self {
        self.order_by = by;
        self.order_direction = direction;
        self
    }

    /// Pause between pages
    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Encode.
    ///
    /// `offset`, `limit`, `order_by`, and `order_direction` are always sent;
    /// `token_ids` trails the other parameters, one entry per id.
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push("offset", self.offset.to_string())
            .push("limit", self.limit.to_string())
            .push("order_by", self.order_by.as_str())
            .push("order_direction", self.order_direction.as_str())
            .push_nonempty("asset_contract_address", &self.asset_contract_address)
            .push_nonempty("payment_token_address", &self.payment_token_address)
            .push_nonempty("maker", &self.maker)
            .push_nonempty("taker", &self.taker)
            .push_nonempty("owner", &self.owner);
        push_flag(&mut query, "is_english", self.is_english);
        push_flag(&mut query, "bundled", self.bundled);
        push_flag(&mut query, "include_bundled", self.include_bundled);
        query
            .push_nonzero("listed_after", self.listed_after)
            .push_nonzero("listed_before", self.listed_before);
        if let Some(side) = self.side {
            query.push("side", side.value().to_string());
        }
        if let Some(sale_kind) = self.sale_kind {
            query.push("sale_kind", sale_kind.value().to_string());
        }
        query.push_all("token_ids", self.token_ids.iter().map(String::as_str));
        query
    }
}

fn push_flag(query: &mut QueryParams, key: &str, flag: Option<bool>) {
    if let Some(flag) = flag {
        query.push(key, flag.to_string());
    }
}

// ============================================================================
// Listings
// ============================================================================

/// Filters for `GET /v2/orders/ethereum/seaport/listings`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingsParams {
    pub asset_contract_address: String,
    pub token_ids: Vec<String>,
    pub limit: u32,
}

impl ListingsParams {
    /// Listings of `token_ids` on `contract`
    pub fn new<I, V>(contract: impl Into<String>, token_ids: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            asset_contract_address: contract.into(),
            token_ids: token_ids.into_iter().map(Into::into).collect(),
            limit: DEFAULT_LISTINGS_LIMIT,
        }
    }

    /// Encode; `limit` and the contract are always sent
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push("limit", self.limit.to_string())
            .push("asset_contract_address", self.asset_contract_address.as_str())
            .push_all("token_ids", self.token_ids.iter().map(String::as_str));
        query
    }
}
