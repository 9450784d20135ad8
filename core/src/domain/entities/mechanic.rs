//! Mechanics ("montir") and the roster payloads.

use bk_shared::types::lenient;
use bk_shared::utils::validation::{validators, Validate, ValidationErrors};
use serde::{Deserialize, Serialize};

use super::shop::Shop;
use super::user::UserSummary;

/// Roster entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mechanic {
    #[serde(deserialize_with = "lenient::i64")]
    pub id: i64,

    #[serde(rename = "bengkel_id", default, deserialize_with = "lenient::option_i64")]
    pub shop_id: Option<i64>,

    #[serde(rename = "nama", default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(rename = "no_telp", default)]
    pub phone: Option<String>,

    #[serde(rename = "foto", default)]
    pub photo: Option<String>,

    /// Login account backing the mechanic, when the server nests it
    #[serde(default)]
    pub user: Option<UserSummary>,
}

impl Mechanic {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or_else(|| self.user.as_ref().map(|u| u.name.as_str()))
            .unwrap_or("-")
    }
}

/// `montir` object nested in a mechanic's own user record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MechanicMembership {
    #[serde(deserialize_with = "lenient::i64")]
    pub id: i64,

    #[serde(rename = "bengkel_id", default, deserialize_with = "lenient::option_i64")]
    pub shop_id: Option<i64>,

    #[serde(rename = "bengkel", default, skip_serializing_if = "Option::is_none")]
    pub shop: Option<Shop>,
}

/// Body of the "add mechanic" form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateMechanicRequest {
    #[serde(rename = "nama")]
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "no_telp")]
    pub phone: String,
}

impl Validate for CreateMechanicRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(validators::not_blank(&self.name), "nama", "Nama montir wajib diisi");
        errors.check(validators::is_valid_email(&self.email), "email", "Format email tidak valid");
        errors.check(validators::min_chars(&self.password, 6), "password", "Password minimal 6 karakter");
        errors.check(validators::not_blank(&self.phone), "no_telp", "Nomor telepon wajib diisi");
        errors.into_result()
    }
}
