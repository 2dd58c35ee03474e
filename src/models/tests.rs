//! Tests for record models

use super::*;
use crate::codec::{Address, FlexValue};
use pretty_assertions::assert_eq;
use serde_json::json;

// ============================================================================
// Event Tests
// ============================================================================

#[test]
fn test_event_sparse_record_decodes() {
    let event: Event = serde_json::from_value(json!({"id": 7})).unwrap();
    assert_eq!(event.id, 7);
    assert!(event.contract_address.is_null());
    assert!(event.event_type.is_none());
    assert!(event.min_price.is_empty());
    assert!(!event.is_bundle());
}

#[test]
fn test_event_full_record() {
    let event: Event = serde_json::from_value(json!({
        "id": 3014,
        "event_type": "successful",
        "auction_type": "dutch",
        "contract_address": "0xBC4CA0EdA7647A8aB7C2061c2E118A18a936f13D",
        "created_date": "2022-04-16T12:34:09.123456",
        "event_timestamp": "2022-04-16T12:34:09",
        "total_price": "1500000000000000000",
        "bid_amount": null,
        "log_index": 12,
        "payout_amount": "0.5",
        "payout_account": {"address": "0x0"},
        "asset_bundle": null,
        "winner_account": {
            "user": {"username": "alice"},
            "address": "0x0000000000000000000000000000000000000001"
        },
        "collection_slug": "boredapeyachtclub",
        "unknown_field": [1, 2, 3]
    }))
    .unwrap();

    assert_eq!(event.event_type, Some(EventType::Successful));
    assert_eq!(event.auction_type, Some(AuctionType::Dutch));
    assert_eq!(
        event.contract_address.as_str(),
        "0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d"
    );
    assert_eq!(event.total_price.as_str(), "1500000000000000000");
    assert!(event.bid_amount.is_empty());
    assert_eq!(event.log_index, FlexValue::Integer(12));
    assert_eq!(event.payout_amount, FlexValue::Text("0.5".into()));
    assert!(event.payout_account.as_ref().unwrap().address.is_null());
    assert_eq!(
        event.winner_account.as_ref().and_then(Account::username),
        Some("alice")
    );
    assert_eq!(
        event.created_date.unwrap().to_string(),
        "2022-04-16T12:34:09.123456"
    );
    assert!(!event.is_bundle());
}

#[test]
fn test_event_bundle_flag() {
    let event: Event =
        serde_json::from_value(json!({"id": 1, "asset_bundle": {"slug": "pack"}})).unwrap();
    assert!(event.is_bundle());
}

#[test]
fn test_event_invalid_address_is_error() {
    let result: Result<Event, _> =
        serde_json::from_value(json!({"id": 1, "contract_address": "0x123"}));
    assert!(result.is_err());
}

#[test]
fn test_event_type_names() {
    assert_eq!(EventType::from("bid_entered".to_string()), EventType::BidEntered);
    assert_eq!(
        "composition_created".parse::<EventType>().unwrap(),
        EventType::CompositionCreated
    );
    assert_eq!(
        EventType::from("offer_entered".to_string()),
        EventType::Other("offer_entered".into())
    );
    assert_eq!(EventType::Other("x".into()).to_string(), "x");
    assert_eq!(AuctionType::MinPrice.as_str(), "min-price");
    assert_eq!(
        serde_json::to_value(AuctionType::MinPrice).unwrap(),
        json!("min-price")
    );
}

// ============================================================================
// Order Tests
// ============================================================================

#[test]
fn test_order_legacy_record() {
    let order: Order = serde_json::from_value(json!({
        "id": 99,
        "side": 1,
        "sale_kind": 0,
        "fee_method": 1,
        "how_to_call": 0,
        "current_price": 1.5e18,
        "calldata": "0xfb16a595",
        "static_extradata": "0x",
        "maker": {"user": 12, "address": "0xABCDEF0000000000000000000000000000000001"},
        "taker": {"user": null, "address": "0x0000000000000000000000000000000000000000"},
        "exchange": "0x7be8076f4ea4a4ad08075c2508e481d6c946d12b",
        "v": 27,
        "closing_date": null
    }))
    .unwrap();

    assert_eq!(order.side, Side::Sell);
    assert_eq!(order.fee_method, FeeMethod::SplitFee);
    assert_eq!(order.sale_kind, SaleKind::FixedOrMinBid);
    assert_eq!(order.calldata.as_bytes(), &[0xfb, 0x16, 0xa5, 0x95]);
    assert!(order.static_extradata.is_empty());
    assert_eq!(order.maker.as_ref().and_then(|m| m.user), Some(12));
    assert_eq!(order.v, Some(27));
    assert!(order.closing_date.is_none());
    assert!(!order.is_private());
}

#[test]
fn test_order_private_when_taker_set() {
    let order: Order = serde_json::from_value(json!({
        "taker": {"address": "0x00000000000000000000000000000000000000aa"}
    }))
    .unwrap();
    assert!(order.is_private());

    let order: Order = serde_json::from_value(json!({"taker": null})).unwrap();
    assert!(!order.is_private());
}

#[test]
fn test_order_unknown_side_is_error() {
    let result: Result<Order, _> = serde_json::from_value(json!({"side": 7}));
    assert!(result.is_err());
}

#[test]
fn test_wire_enums_round_trip_as_integers() {
    assert_eq!(serde_json::to_value(Side::Sell).unwrap(), json!(1));
    assert_eq!(serde_json::to_value(OrderType::Old).unwrap(), json!(-1));
    assert_eq!(ItemType::try_from(4_i64).unwrap(), ItemType::Erc721WithCriteria);
    assert!(ItemType::try_from(6_i64).is_err());
    assert_eq!(HowToCall::DelegateCall.value(), 1);
    assert_eq!(Side::default(), Side::Buy);
}

#[test]
fn test_order_v2_seaport_listing() {
    let order: OrderV2 = serde_json::from_value(json!({
        "order_hash": "0xabc",
        "created_date": "2022-06-14T10:00:01.001234",
        "current_price": "42000000000000000",
        "side": "ask",
        "order_type": "basic",
        "maker": {"address": "0x00000000000000000000000000000000000000bb"},
        "taker": null,
        "maker_fees": [
            {"account": {"address": "0x0000a26b00c1f0df003000390027140000faa719"}, "basis_points": "250"}
        ],
        "protocol_address": "0x00000000006c3852cbef3e08e8df289169ede581",
        "protocol_data": {
            "parameters": {
                "offerer": "0x00000000000000000000000000000000000000bb",
                "zone": "0x0",
                "zoneHash": "0x0000000000000000000000000000000000000000000000000000000000000000",
                "startTime": "1655200801",
                "endTime": "1657792801",
                "orderType": 2,
                "salt": "96789",
                "conduitKey": "0x0000007b02230091a7ed01230072f7006a004d60a8d4e71d599b8104250f0000",
                "totalOriginalConsiderationItems": 2,
                "counter": 0,
                "offer": [
                    {"itemType": 2, "token": "0x00000000000000000000000000000000000000cc",
                     "identifierOrCriteria": "1234", "startAmount": "1", "endAmount": "1"}
                ],
                "consideration": [
                    {"itemType": 0, "token": "0x0000000000000000000000000000000000000000",
                     "identifierOrCriteria": "0", "startAmount": "39900000000000000",
                     "endAmount": "39900000000000000",
                     "recipient": "0x00000000000000000000000000000000000000bb"}
                ]
            },
            "signature": null
        }
    }))
    .unwrap();

    assert_eq!(order.side.as_deref(), Some("ask"));
    assert_eq!(order.maker_fees[0].basis_points.as_str(), "250");
    assert!(!order.is_private());

    let data = order.protocol_data.unwrap();
    assert!(data.signature.is_empty());
    let params = data.parameters.unwrap();
    assert!(params.zone.is_null());
    assert_eq!(params.order_type, OrderType::FullRestricted);
    assert_eq!(params.zone_hash.len(), 32);
    assert_eq!(params.offer[0].item_type, ItemType::Erc721);
    assert_eq!(params.consideration[0].item.item_type, ItemType::Native);
    assert_eq!(
        params.consideration[0].recipient,
        Address::parse("0x00000000000000000000000000000000000000bb").unwrap()
    );
    assert_eq!(
        params.start_time.to_bigint().unwrap(),
        num_bigint::BigInt::from(1_655_200_801_i64)
    );
}

// ============================================================================
// Asset & Collection Tests
// ============================================================================

#[test]
fn test_asset_with_nested_contract_and_collection() {
    let asset: Asset = serde_json::from_value(json!({
        "id": 1,
        "token_id": "115792089237316195423570985008687907853269984665640564039457584007913129639935",
        "name": null,
        "asset_contract": {
            "address": "0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d",
            "schema_name": "ERC721",
            "total_supply": "10000",
            "payout_address": null
        },
        "collection": {"slug": "bayc", "dev_seller_fee_basis_points": "250"},
        "traits": [
            {"trait_type": "Fur", "value": "Brown", "display_type": null, "trait_count": 1204},
            {"trait_type": "Level", "value": 7, "display_type": "number", "max_value": 10}
        ]
    }))
    .unwrap();

    assert!(asset.name.is_none());
    assert_eq!(asset.token_id.len(), 78);
    let contract = asset.asset_contract.unwrap();
    assert_eq!(contract.total_supply, FlexValue::Text("10000".into()));
    assert!(contract.payout_address.is_null());
    assert_eq!(asset.collection.unwrap().slug, "bayc");
    assert_eq!(asset.traits.len(), 2);
    assert_eq!(asset.traits[0].trait_type, "Fur");
    assert_eq!(asset.traits[0].value, FlexValue::Text("Brown".into()));
    assert_eq!(asset.traits[0].trait_count, 1204);
    assert_eq!(asset.traits[1].value, FlexValue::Integer(7));
    assert_eq!(asset.traits[1].display_type.as_deref(), Some("number"));
}

#[test]
fn test_collection_detail_flattens_summary() {
    let detail: CollectionDetail = serde_json::from_value(json!({
        "slug": "doodles-official",
        "name": "Doodles",
        "editors": ["0x00000000000000000000000000000000000000AA"],
        "payment_tokens": [{"symbol": "ETH", "address": "0x0", "decimals": 18, "eth_price": 1}],
        "primary_asset_contracts": [],
        "stats": {"floor_price": null, "total_volume": 123.5, "num_owners": 5000}
    }))
    .unwrap();

    assert_eq!(detail.collection.slug, "doodles-official");
    assert_eq!(detail.collection.name.as_deref(), Some("Doodles"));
    assert_eq!(
        detail.editors[0].as_str(),
        "0x00000000000000000000000000000000000000aa"
    );
    assert!(detail.payment_tokens[0].address.is_null());
    let stats = detail.stats.unwrap();
    assert_eq!(stats.floor_price, None);
    assert_eq!(stats.num_owners, 5000.0);
}

#[test]
fn test_collection_traits_and_display_data() {
    let detail: CollectionDetail = serde_json::from_value(json!({
        "slug": "cool-cats-nft",
        "display_data": {"card_display_style": "cover", "images": null},
        "traits": {
            "face": {"smile": 1204, "rainbow puke": 58},
            "tier": {"wild_1": "12"}
        }
    }))
    .unwrap();

    let display = &detail.collection.display_data;
    assert_eq!(display.card_display_style.as_deref(), Some("cover"));
    assert!(display.images.is_empty());
    assert_eq!(detail.traits["face"]["smile"], FlexValue::Integer(1204));
    assert_eq!(detail.traits["face"]["rainbow puke"].as_i64(), Some(58));
    assert_eq!(detail.traits["tier"]["wild_1"].as_i64(), Some(12));
}

#[test]
fn test_collection_traits_reject_non_scalar_counts() {
    let result: Result<CollectionDetail, _> = serde_json::from_value(json!({
        "traits": {"face": {"smile": {"count": 1}}}
    }));
    assert!(result.is_err());
}

#[test]
fn test_event_payout_records_are_typed() {
    let event: Event = serde_json::from_value(json!({
        "id": 7,
        "event_type": "payout",
        "payout_account": {
            "address": "0x5b3256965e7C3cF26E11FCAf296DfC8807C01073",
            "user": {"username": "royalties"}
        },
        "payout_asset_contract": {"address": "0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d"},
        "payout_collection": {"slug": "bayc", "featured": true}
    }))
    .unwrap();

    assert_eq!(event.event_type, Some(EventType::Other("payout".into())));
    let account = event.payout_account.unwrap();
    assert_eq!(account.username(), Some("royalties"));
    assert_eq!(
        event.payout_asset_contract.unwrap().address.as_str(),
        "0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d"
    );
    let collection = event.payout_collection.unwrap();
    assert_eq!(collection.slug, "bayc");
    assert!(collection.featured);
}

#[test]
fn test_bundle_sell_orders_decode_as_orders() {
    let bundle: AssetBundle = serde_json::from_value(json!({
        "slug": "pair",
        "assets": [{"id": 1, "token_id": "1"}, {"id": 2, "token_id": "2"}],
        "sell_orders": [{"id": 5, "side": 1, "current_price": "1000"}]
    }))
    .unwrap();

    assert_eq!(bundle.assets.len(), 2);
    let orders = bundle.sell_orders.unwrap();
    assert_eq!(orders[0].id, 5);
    assert_eq!(orders[0].side, Side::Sell);
}

// ============================================================================
// Null Tolerance Tests
// ============================================================================

#[test]
fn test_null_scalars_and_lists_decode_as_defaults() {
    let stats: CollectionStats = serde_json::from_value(json!({
        "market_cap": null,
        "total_volume": 10.5,
        "num_owners": null,
        "floor_price": null
    }))
    .unwrap();
    assert_eq!(stats.market_cap, 0.0);
    assert_eq!(stats.num_owners, 0.0);
    assert_eq!(stats.total_volume, 10.5);
    assert_eq!(stats.floor_price, None);

    let listing: OrderV2 = serde_json::from_value(json!({
        "order_hash": "0xabc",
        "expiration_time": null,
        "listing_time": null,
        "maker_fees": null,
        "taker_fees": [{"account": null, "basis_points": "250"}],
        "cancelled": null,
        "finalized": null,
        "marked_invalid": false
    }))
    .unwrap();
    assert_eq!(listing.expiration_time, 0);
    assert!(listing.maker_fees.is_empty());
    assert!(listing.taker_fees[0].account.address.is_null());
    assert!(!listing.cancelled);

    let order: Order = serde_json::from_value(json!({
        "id": null,
        "side": null,
        "fee_method": null,
        "closing_extendable": null,
        "approved_on_chain": null
    }))
    .unwrap();
    assert_eq!(order.id, 0);
    assert_eq!(order.side, Side::Buy);
    assert_eq!(order.fee_method, FeeMethod::ProtocolFee);
    assert!(!order.closing_extendable);
}

#[test]
fn test_null_fields_in_nested_records() {
    let detail: CollectionDetail = serde_json::from_value(json!({
        "slug": null,
        "featured": null,
        "hidden": null,
        "editors": null,
        "payment_tokens": null,
        "primary_asset_contracts": [{"address": null, "default_to_fiat": null}],
        "traits": null,
        "display_data": null
    }))
    .unwrap();
    assert_eq!(detail.collection.slug, "");
    assert!(!detail.collection.featured);
    assert!(detail.editors.is_empty());
    assert!(detail.payment_tokens.is_empty());
    assert!(!detail.primary_asset_contracts[0].default_to_fiat);
    assert!(detail.traits.is_empty());

    let asset: Asset = serde_json::from_value(json!({
        "id": null,
        "token_id": null,
        "traits": null
    }))
    .unwrap();
    assert_eq!(asset.id, 0);
    assert_eq!(asset.token_id, "");
    assert!(asset.traits.is_empty());

    let listing: OrderV2 = serde_json::from_value(json!({
        "protocol_data": {
            "parameters": {
                "orderType": null,
                "totalOriginalConsiderationItems": null,
                "offer": null,
                "consideration": [{"itemType": null, "recipient": null}]
            }
        }
    }))
    .unwrap();
    let parameters = listing.protocol_data.unwrap().parameters.unwrap();
    assert_eq!(parameters.total_original_consideration_items, 0);
    assert!(parameters.offer.is_empty());
    assert_eq!(parameters.consideration[0].item.item_type, ItemType::Native);
}
