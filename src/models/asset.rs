//! Assets, bundles, and contracts

use super::account::Account;
use super::collection::Collection;
use super::null_as_default;
use super::order::Order;
use crate::codec::{Address, FlexValue};
use serde::{Deserialize, Serialize};

/// A single token
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Asset {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    /// Token id as a decimal string; may exceed 64 bits
    #[serde(deserialize_with = "null_as_default")]
    pub token_id: String,
    pub num_sales: Option<i64>,
    pub background_color: Option<String>,
    pub image_url: Option<String>,
    pub image_preview_url: Option<String>,
    pub image_thumbnail_url: Option<String>,
    pub image_original_url: Option<String>,
    pub animation_url: Option<String>,
    pub animation_original_url: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub external_link: Option<String>,
    pub asset_contract: Option<AssetContract>,
    pub owner: Option<Account>,
    pub permalink: Option<String>,
    pub collection: Option<Collection>,
    pub decimals: Option<i64>,
    pub token_metadata: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub traits: Vec<AssetTrait>,
}

/// One attribute of a token's metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetTrait {
    #[serde(deserialize_with = "null_as_default")]
    pub trait_type: String,
    /// Text or number, as the metadata declares it
    pub value: FlexValue,
    pub display_type: Option<String>,
    pub max_value: FlexValue,
    #[serde(deserialize_with = "null_as_default")]
    pub trait_count: i64,
    pub order: FlexValue,
}

/// A group of assets sold together
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetBundle {
    pub maker: Option<Account>,
    pub slug: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub assets: Vec<Asset>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub external_link: Option<String>,
    pub collection: Option<Collection>,
    pub asset_contract: Option<AssetContract>,
    pub permalink: Option<String>,
    pub sell_orders: Option<Vec<Order>>,
}

/// Token contract metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetContract {
    pub address: Address,
    pub asset_contract_type: Option<String>,
    pub created_date: Option<String>,
    pub name: Option<String>,
    pub nft_version: Option<String>,
    pub opensea_version: FlexValue,
    pub owner: Option<i64>,
    pub schema_name: Option<String>,
    pub symbol: Option<String>,
    pub total_supply: FlexValue,
    pub description: Option<String>,
    pub external_link: Option<String>,
    pub image_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub default_to_fiat: bool,
    pub dev_buyer_fee_basis_points: FlexValue,
    pub dev_seller_fee_basis_points: FlexValue,
    #[serde(deserialize_with = "null_as_default")]
    pub only_proxied_transfers: bool,
    pub opensea_buyer_fee_basis_points: FlexValue,
    pub opensea_seller_fee_basis_points: FlexValue,
    pub buyer_fee_basis_points: FlexValue,
    pub seller_fee_basis_points: FlexValue,
    pub payout_address: Address,
    pub collection: Option<Collection>,
}
