//! Service offerings ("layanan") a shop publishes.

use bk_shared::types::{lenient, Rupiah};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOffering {
    #[serde(deserialize_with = "lenient::i64")]
    pub id: i64,

    #[serde(
        rename = "bengkel_id",
        default,
        deserialize_with = "lenient::option_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub shop_id: Option<i64>,

    #[serde(rename = "nama_layanan", alias = "nama", alias = "jenis_layanan")]
    pub name: String,

    #[serde(rename = "harga", default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Rupiah>,
}
