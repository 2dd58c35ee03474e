//! Orders: legacy exchange orders and seaport listings

use super::account::{AccountFee, AccountRef};
use super::asset::{Asset, AssetBundle};
use super::{null_as_default, wire_int_enum};
use crate::codec::{Address, DecimalNumber, FlexValue, FlexibleTimestamp, HexBytes};
use serde::{Deserialize, Serialize};

// ============================================================================
// Enumerations
// ============================================================================

wire_int_enum! {
    /// Order side
    Side: u8 {
        #[default]
        Buy = 0,
        Sell = 1,
    }
}

wire_int_enum! {
    /// Pricing mechanism of a legacy order
    SaleKind: u8 {
        /// Fixed price, or minimum-bid auction
        #[default]
        FixedOrMinBid = 0,
        /// Declining-price auction
        DutchAuction = 1,
    }
}

wire_int_enum! {
    /// How the exchange invokes the order target
    HowToCall: u8 {
        #[default]
        Call = 0,
        DelegateCall = 1,
    }
}

wire_int_enum! {
    /// How fees on a legacy order are charged
    FeeMethod: u8 {
        #[default]
        ProtocolFee = 0,
        SplitFee = 1,
    }
}

wire_int_enum! {
    /// Kind of item offered or requested by a seaport order
    ItemType: u8 {
        #[default]
        Native = 0,
        Erc20 = 1,
        Erc721 = 2,
        Erc1155 = 3,
        Erc721WithCriteria = 4,
        Erc1155WithCriteria = 5,
    }
}

wire_int_enum! {
    /// Seaport order type
    OrderType: i8 {
        Old = -1,
        #[default]
        FullOpen = 0,
        PartialOpen = 1,
        FullRestricted = 2,
        PartialRestricted = 3,
    }
}

// ============================================================================
// Legacy orders
// ============================================================================

/// Asset reference carried in order metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataAsset {
    pub id: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderMetadata {
    pub asset: Option<MetadataAsset>,
    pub schema: Option<String>,
}

/// Legacy exchange order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    pub asset: Option<Asset>,
    pub created_date: Option<FlexibleTimestamp>,
    pub closing_date: Option<FlexibleTimestamp>,
    #[serde(deserialize_with = "null_as_default")]
    pub closing_extendable: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub expiration_time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub listing_time: i64,
    pub order_hash: Option<String>,
    pub metadata: Option<OrderMetadata>,
    pub exchange: Address,
    pub maker: Option<AccountRef>,
    pub taker: Option<AccountRef>,
    pub current_price: DecimalNumber,
    pub bounty_multiple: Option<String>,
    pub maker_relayer_fee: DecimalNumber,
    pub taker_relayer_fee: DecimalNumber,
    pub maker_protocol_fee: DecimalNumber,
    pub taker_protocol_fee: DecimalNumber,
    pub maker_referrer_fee: DecimalNumber,
    pub fee_recipient: Option<AccountRef>,
    #[serde(deserialize_with = "null_as_default")]
    pub fee_method: FeeMethod,
    #[serde(deserialize_with = "null_as_default")]
    pub side: Side,
    #[serde(deserialize_with = "null_as_default")]
    pub sale_kind: SaleKind,
    pub target: Address,
    #[serde(deserialize_with = "null_as_default")]
    pub how_to_call: HowToCall,
    pub calldata: HexBytes,
    pub replacement_pattern: HexBytes,
    pub static_target: Address,
    pub static_extradata: HexBytes,
    pub payment_token: Address,
    pub base_price: DecimalNumber,
    pub extra: DecimalNumber,
    pub quantity: Option<String>,
    pub salt: DecimalNumber,
    pub v: Option<u8>,
    pub r: Option<String>,
    pub s: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub approved_on_chain: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub cancelled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub finalized: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub marked_invalid: bool,
    pub prefixed_hash: Option<String>,
}

impl Order {
    /// Whether the order is reserved for a specific taker
    pub fn is_private(&self) -> bool {
        self.taker.as_ref().is_some_and(|taker| !taker.address.is_null())
    }
}

// ============================================================================
// Seaport listings
// ============================================================================

/// Item offered by a seaport order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OfferItem {
    #[serde(deserialize_with = "null_as_default")]
    pub item_type: ItemType,
    pub token: Address,
    pub identifier_or_criteria: DecimalNumber,
    pub start_amount: DecimalNumber,
    pub end_amount: DecimalNumber,
}

/// Item a seaport order requires in return, and who receives it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsiderationItem {
    #[serde(flatten)]
    pub item: OfferItem,
    pub recipient: Address,
}

/// Signed seaport order parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderComponents {
    pub offerer: Address,
    pub zone: Address,
    pub zone_hash: HexBytes,
    pub start_time: DecimalNumber,
    pub end_time: DecimalNumber,
    #[serde(deserialize_with = "null_as_default")]
    pub order_type: OrderType,
    pub salt: DecimalNumber,
    pub conduit_key: HexBytes,
    #[serde(deserialize_with = "null_as_default")]
    pub total_original_consideration_items: i64,
    pub counter: FlexValue,
    pub nonce: FlexValue,
    #[serde(deserialize_with = "null_as_default")]
    pub offer: Vec<OfferItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub consideration: Vec<ConsiderationItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtocolData {
    pub parameters: Option<OrderComponents>,
    pub signature: HexBytes,
}

/// Seaport listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderV2 {
    pub order_hash: Option<String>,
    pub created_date: Option<FlexibleTimestamp>,
    pub closing_date: Option<FlexibleTimestamp>,
    #[serde(deserialize_with = "null_as_default")]
    pub expiration_time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub listing_time: i64,
    pub maker: Option<AccountRef>,
    pub taker: Option<AccountRef>,
    pub current_price: DecimalNumber,
    #[serde(deserialize_with = "null_as_default")]
    pub maker_fees: Vec<AccountFee>,
    #[serde(deserialize_with = "null_as_default")]
    pub taker_fees: Vec<AccountFee>,
    pub side: Option<String>,
    pub order_type: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub cancelled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub finalized: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub marked_invalid: bool,
    pub relay_id: Option<String>,
    pub client_signature: Option<String>,
    pub protocol_address: Address,
    pub protocol_data: Option<ProtocolData>,
    pub maker_asset_bundle: Option<AssetBundle>,
    pub taker_asset_bundle: Option<AssetBundle>,
}

impl OrderV2 {
    /// Whether the listing is reserved for a specific taker
    pub fn is_private(&self) -> bool {
        self.taker.as_ref().is_some_and(|taker| !taker.address.is_null())
    }
}
