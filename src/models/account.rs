//! Account shapes
//!
//! The server embeds accounts in two forms: with a nested `user` object
//! (events, assets) and with a numeric `user` id (orders, fees).

use super::null_as_default;
use crate::codec::{Address, DecimalNumber};
use serde::{Deserialize, Serialize};

/// Marketplace user profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub username: Option<String>,
}

/// Account with an embedded user profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub user: Option<User>,
    pub profile_img_url: Option<String>,
    pub address: Address,
    pub config: Option<String>,
    pub discord_id: Option<String>,
}

impl Account {
    /// Username, if the account has a profile with one
    pub fn username(&self) -> Option<&str> {
        self.user.as_ref()?.username.as_deref()
    }
}

/// Account referencing its user by numeric id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountRef {
    pub user: Option<i64>,
    pub profile_img_url: Option<String>,
    pub address: Address,
    pub config: Option<String>,
    pub discord_id: Option<String>,
}

/// Fee owed to an account, in basis points
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountFee {
    #[serde(deserialize_with = "null_as_default")]
    pub account: AccountRef,
    pub basis_points: DecimalNumber,
}
