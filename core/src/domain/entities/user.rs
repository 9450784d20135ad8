//! User entity as returned by `/login`, `/register` and `/profil`.

use bk_shared::types::lenient;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use super::mechanic::MechanicMembership;
use super::shop::Shop;

/// Account role; closed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Customer requesting repairs
    Pelanggan,
    /// Repair-shop owner
    Bengkel,
    /// Mechanic employed by a shop
    Montir,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Pelanggan => "pelanggan",
            Role::Bengkel => "bengkel",
            Role::Montir => "montir",
        }
    }

    pub fn is_customer(&self) -> bool {
        matches!(self, Role::Pelanggan)
    }

    pub fn is_shop(&self) -> bool {
        matches!(self, Role::Bengkel)
    }

    pub fn is_mechanic(&self) -> bool {
        matches!(self, Role::Montir)
    }

    /// Mechanic accounts are created by their shop, never through `/register`
    pub fn can_self_register(&self) -> bool {
        !self.is_mechanic()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pelanggan" | "customer" => Ok(Role::Pelanggan),
            "bengkel" | "shop" => Ok(Role::Bengkel),
            "montir" | "mechanic" => Ok(Role::Montir),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// Logged-in account
///
/// Fields the client does not model are kept in `extra` so a cached user
/// survives a save/load cycle unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "lenient::i64")]
    pub id: i64,

    #[serde(rename = "nama")]
    pub name: String,

    #[serde(rename = "alamat", default)]
    pub address: Option<String>,

    pub email: String,

    #[serde(rename = "no_telp", default)]
    pub phone: Option<String>,

    pub role: Role,

    #[serde(rename = "foto", default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,

    /// Present for shop owners once the shop has been set up
    #[serde(rename = "bengkel", default, skip_serializing_if = "Option::is_none")]
    pub shop: Option<Shop>,

    /// Present for mechanics
    #[serde(rename = "montir", default, skip_serializing_if = "Option::is_none")]
    pub mechanic: Option<MechanicMembership>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            address: None,
            email: email.into(),
            phone: None,
            role,
            photo: None,
            shop: None,
            mechanic: None,
            extra: Map::new(),
        }
    }

    /// Shop owners must register their shop before they can take orders
    pub fn needs_shop_setup(&self) -> bool {
        self.role.is_shop() && self.shop.is_none()
    }

    /// Id of the shop this account belongs to, as owner or as mechanic
    pub fn shop_id(&self) -> Option<i64> {
        match self.role {
            Role::Bengkel => self.shop.as_ref().map(|shop| shop.id),
            Role::Montir => self.mechanic.as_ref().and_then(|m| m.shop_id),
            Role::Pelanggan => None,
        }
    }
}

/// Compact user record nested in orders and rosters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(default, deserialize_with = "lenient::option_i64")]
    pub id: Option<i64>,

    #[serde(rename = "nama")]
    pub name: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(rename = "no_telp", default)]
    pub phone: Option<String>,

    #[serde(rename = "alamat", default)]
    pub address: Option<String>,

    #[serde(rename = "foto", default)]
    pub photo: Option<String>,
}
