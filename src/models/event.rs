//! Asset events

use super::account::Account;
use super::asset::{Asset, AssetBundle, AssetContract};
use super::collection::{Collection, PaymentToken};
use super::null_as_default;
use crate::codec::{Address, DecimalNumber, FlexValue, FlexibleTimestamp};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Event Type
// ============================================================================

/// Kind of activity an event records
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    Created,
    Successful,
    Cancelled,
    BidEntered,
    BidWithdrawn,
    Transfer,
    Approve,
    CompositionCreated,
    /// A kind this client does not know about, kept verbatim
    Other(String),
}

impl EventType {
    /// Wire name
    pub fn as_str(&self) -> &str {
        match self {
            Self::Created => "created",
            Self::Successful => "successful",
            Self::Cancelled => "cancelled",
            Self::BidEntered => "bid_entered",
            Self::BidWithdrawn => "bid_withdrawn",
            Self::Transfer => "transfer",
            Self::Approve => "approve",
            Self::CompositionCreated => "composition_created",
            Self::Other(other) => other,
        }
    }
}

impl From<String> for EventType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "created" => Self::Created,
            "successful" => Self::Successful,
            "cancelled" => Self::Cancelled,
            "bid_entered" => Self::BidEntered,
            "bid_withdrawn" => Self::BidWithdrawn,
            "transfer" => Self::Transfer,
            "approve" => Self::Approve,
            "composition_created" => Self::CompositionCreated,
            _ => Self::Other(value),
        }
    }
}

impl From<EventType> for String {
    fn from(value: EventType) -> Self {
        match value {
            EventType::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for EventType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Auction Type
// ============================================================================

/// Auction mechanism of a listing
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AuctionType {
    English,
    Dutch,
    MinPrice,
    Other(String),
}

impl AuctionType {
    /// Wire name
    pub fn as_str(&self) -> &str {
        match self {
            Self::English => "english",
            Self::Dutch => "dutch",
            Self::MinPrice => "min-price",
            Self::Other(other) => other,
        }
    }
}

impl From<String> for AuctionType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "english" => Self::English,
            "dutch" => Self::Dutch,
            "min-price" => Self::MinPrice,
            _ => Self::Other(value),
        }
    }
}

impl From<AuctionType> for String {
    fn from(value: AuctionType) -> Self {
        match value {
            AuctionType::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for AuctionType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl fmt::Display for AuctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Records
// ============================================================================

/// On-chain transaction backing an event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    pub id: Option<i64>,
    pub from_account: Option<Account>,
    pub to_account: Option<Account>,
    pub created_date: Option<FlexibleTimestamp>,
    pub modified_date: Option<FlexibleTimestamp>,
    pub transaction_hash: Option<String>,
    pub transaction_index: Option<String>,
    pub block_number: Option<String>,
    pub block_hash: Option<String>,
    pub timestamp: Option<String>,
}

/// Bulk fee transfer from the marketplace to a collection's developer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevFeePaymentEvent {
    pub event_type: Option<String>,
    pub event_timestamp: Option<String>,
    pub auction_type: FlexValue,
    pub total_price: FlexValue,
    pub transaction: Option<Transaction>,
    pub payment_token: Option<PaymentToken>,
}

/// One entry of the asset event stream
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    pub transaction: Option<Transaction>,
    pub payment_token: Option<PaymentToken>,
    pub asset: Option<Asset>,
    /// Present when the event concerns a bundle rather than a single asset
    pub asset_bundle: Option<AssetBundle>,
    pub winner_account: Option<Account>,
    pub from_account: Option<Account>,
    pub to_account: Option<Account>,
    pub owner_account: Option<Account>,
    pub approved_account: Option<Account>,
    pub seller: Option<Account>,
    pub dev_fee_payment_event: Option<DevFeePaymentEvent>,
    pub collection_slug: Option<String>,
    pub created_date: Option<FlexibleTimestamp>,
    pub modified_date: Option<FlexibleTimestamp>,
    pub contract_address: Address,
    pub log_index: FlexValue,
    pub event_type: Option<EventType>,
    pub auction_type: Option<AuctionType>,
    pub starting_price: Option<String>,
    pub ending_price: Option<String>,
    pub duration: Option<String>,
    pub min_price: DecimalNumber,
    pub offered_to: DecimalNumber,
    pub bid_amount: DecimalNumber,
    pub total_price: DecimalNumber,
    pub custom_event_name: FlexValue,
    pub quantity: Option<String>,
    pub payout_amount: FlexValue,
    pub event_timestamp: Option<FlexibleTimestamp>,
    pub relayer: Option<String>,
    pub collection: Option<u64>,
    pub payout_account: Option<Account>,
    pub payout_asset_contract: Option<AssetContract>,
    pub payout_collection: Option<Collection>,
    pub buy_order: Option<u64>,
    pub sell_order: Option<u64>,
    pub listing_time: Option<String>,
    pub is_private: Option<bool>,
}

impl Event {
    /// Whether the event concerns an asset bundle
    pub fn is_bundle(&self) -> bool {
        self.asset_bundle.is_some()
    }
}
