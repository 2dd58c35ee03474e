//! Collections and payment tokens

use super::asset::AssetContract;
use super::null_as_default;
use crate::codec::{Address, FlexValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Currency accepted for payment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentToken {
    pub symbol: Option<String>,
    pub address: Address,
    pub image_url: Option<String>,
    pub name: Option<String>,
    pub decimals: Option<i64>,
    pub eth_price: FlexValue,
    pub usd_price: FlexValue,
}

/// Trait value counts of a collection, keyed by trait type then value
pub type CollectionTraits = BTreeMap<String, BTreeMap<String, FlexValue>>;

/// How the marketplace renders a collection's cards
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayData {
    pub card_display_style: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub images: Vec<String>,
}

/// Collection summary as embedded in assets and contracts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Collection {
    pub banner_image_url: Option<String>,
    pub chat_url: Option<String>,
    pub created_date: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub default_to_fiat: bool,
    pub description: Option<String>,
    pub dev_buyer_fee_basis_points: FlexValue,
    pub dev_seller_fee_basis_points: FlexValue,
    pub discord_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub display_data: DisplayData,
    pub external_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub featured: bool,
    pub featured_image_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub hidden: bool,
    pub safelist_request_status: Option<String>,
    pub image_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_subject_to_whitelist: bool,
    pub large_image_url: Option<String>,
    pub medium_username: Option<String>,
    pub name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub only_proxied_transfers: bool,
    pub opensea_buyer_fee_basis_points: FlexValue,
    pub opensea_seller_fee_basis_points: FlexValue,
    pub payout_address: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub require_email: bool,
    pub short_description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    pub telegram_url: Option<String>,
    pub twitter_username: Option<String>,
    pub instagram_username: Option<String>,
    pub wiki_url: Option<String>,
}

/// Trading statistics of a collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionStats {
    #[serde(deserialize_with = "null_as_default")]
    pub one_day_volume: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub one_day_change: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub one_day_sales: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub one_day_average_price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub seven_day_volume: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub seven_day_change: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub seven_day_sales: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub seven_day_average_price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub thirty_day_volume: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub thirty_day_change: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub thirty_day_sales: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub thirty_day_average_price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_volume: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_sales: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_supply: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub count: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub num_owners: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub average_price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub num_reports: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub market_cap: f64,
    pub floor_price: Option<f64>,
}

/// Full collection record from the collection endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub editors: Vec<Address>,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_tokens: Vec<PaymentToken>,
    #[serde(deserialize_with = "null_as_default")]
    pub primary_asset_contracts: Vec<AssetContract>,
    #[serde(deserialize_with = "null_as_default")]
    pub traits: CollectionTraits,
    pub stats: Option<CollectionStats>,
    #[serde(flatten)]
    pub collection: Collection,
}
