//! Record models
//!
//! Serde mirrors of the marketplace's JSON records. Every struct decodes
//! from a sparse object: absent fields fall back to defaults, and fields
//! the server may send as `null` are `Option`s.
//! Plain scalars, lists and nested records also accept `null` and decode it
//! as their default. Fields the server types inconsistently use
//! [`FlexValue`](crate::codec::FlexValue).

use serde::{Deserialize, Deserializer};

/// Declares a field-less enum carried on the wire as an integer.
///
/// Decoding an integer outside the listed discriminants is an error.
macro_rules! wire_int_enum {
    (
        $(#[$meta:meta])*
        $name:ident: $repr:ty {
            $( $(#[$vmeta:meta])* $variant:ident = $value:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "i64", into = "i64")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Wire value
            pub fn value(self) -> $repr {
                match self {
                    $( Self::$variant => $value ),+
                }
            }
        }

        impl TryFrom<i64> for $name {
            type Error = String;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                $(
                    if value == i64::from($value as $repr) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("invalid {} value: {value}", stringify!($name)))
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                i64::from(value.value())
            }
        }
    };
}

pub(crate) use wire_int_enum;

/// Field deserializer mapping an explicit `null` to the type's default
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

mod account;
mod asset;
mod collection;
mod event;
mod order;

pub use account::{Account, AccountFee, AccountRef, User};
pub use asset::{Asset, AssetBundle, AssetContract, AssetTrait};
pub use collection::{
    Collection, CollectionDetail, CollectionStats, CollectionTraits, DisplayData, PaymentToken,
};
pub use event::{AuctionType, DevFeePaymentEvent, Event, EventType, Transaction};
pub use order::{
    ConsiderationItem, FeeMethod, HowToCall, ItemType, MetadataAsset, OfferItem, Order,
    OrderComponents, OrderMetadata, OrderType, OrderV2, ProtocolData, SaleKind, Side,
};

#[cfg(test)]
mod tests;
