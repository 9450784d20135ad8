//! Repair shop ("bengkel") records and shop setup payloads.

use bk_shared::types::{lenient, Coordinate};
use bk_shared::utils::mime::infer_image_mime;
use bk_shared::utils::validation::{validators, Validate, ValidationErrors};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::service_offering::ServiceOffering;

/// Shop verification flag (`verifikasi`): 1 = verified, anything else pending
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Verification {
    #[default]
    Pending,
    Verified,
}

impl Verification {
    pub fn is_verified(&self) -> bool {
        matches!(self, Verification::Verified)
    }

    pub fn as_flag(&self) -> u8 {
        match self {
            Verification::Pending => 0,
            Verification::Verified => 1,
        }
    }
}

impl Serialize for Verification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_flag())
    }
}

impl<'de> Deserialize<'de> for Verification {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let flag = match Value::deserialize(deserializer)? {
            Value::Bool(verified) => verified,
            Value::Number(n) => n.as_i64() == Some(1),
            Value::String(s) => matches!(s.trim(), "1" | "true" | "verified" | "terverifikasi"),
            _ => false,
        };
        Ok(if flag {
            Verification::Verified
        } else {
            Verification::Pending
        })
    }
}

/// Shop record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    #[serde(deserialize_with = "lenient::i64")]
    pub id: i64,

    #[serde(default, deserialize_with = "lenient::option_i64", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    #[serde(rename = "nama")]
    pub name: String,

    #[serde(rename = "alamat", default)]
    pub address: Option<String>,

    #[serde(default, deserialize_with = "lenient::option_f64")]
    pub latitude: Option<f64>,

    #[serde(default, deserialize_with = "lenient::option_f64")]
    pub longitude: Option<f64>,

    #[serde(rename = "foto", default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,

    #[serde(rename = "verifikasi", default)]
    pub verification: Verification,

    #[serde(default, deserialize_with = "lenient::option_f64", skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    /// Kilometres from the searching customer (search results only)
    #[serde(
        rename = "jarak",
        default,
        deserialize_with = "lenient::option_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub distance_km: Option<f64>,

    #[serde(rename = "layanan", default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<ServiceOffering>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Shop {
    pub fn coordinate(&self) -> Option<Coordinate> {
        Coordinate::new(self.latitude?, self.longitude?).ok()
    }

    pub fn is_verified(&self) -> bool {
        self.verification.is_verified()
    }
}

/// Photo picked on the device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl PhotoUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        infer_image_mime(&self.file_name)
    }
}

/// Input of the shop setup form
#[derive(Debug, Clone, PartialEq)]
pub struct ShopSetupRequest {
    pub name: String,
    pub address: String,
    pub coordinate: Coordinate,
    pub photo: PhotoUpload,
}

impl Validate for ShopSetupRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(validators::not_blank(&self.name), "nama", "Nama bengkel wajib diisi");
        errors.check(validators::not_blank(&self.address), "alamat", "Alamat bengkel wajib diisi");
        errors.check(!self.photo.bytes.is_empty(), "foto", "Foto bengkel wajib diunggah");
        errors.into_result()
    }
}

/// Result of a geo-scoped shop search
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShopSearchResult {
    pub shops: Vec<Shop>,
    pub total: u64,
}

impl ShopSearchResult {
    /// "No shops found" is a valid outcome, not an error
    pub fn is_empty(&self) -> bool {
        self.shops.is_empty()
    }
}
