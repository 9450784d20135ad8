//! Orders: server-owned read models plus the payloads that ask the server
//! to change them.
//!
//! The client never decides whether a status change is allowed. It renders
//! the current status and fires one-shot requests; the server answers with
//! the authoritative order.

use bk_shared::types::{lenient, Coordinate, Rupiah};
use bk_shared::utils::validation::{validators, Validate, ValidationErrors};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::mechanic::Mechanic;
use super::service_offering::ServiceOffering;
use super::shop::Shop;
use super::user::UserSummary;

/// Order status as reported by the server
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    /// Waiting for the shop to assign a mechanic
    Waiting,
    /// Mechanic is heading to the customer
    EnRoute,
    InProgress,
    AwaitingPayment,
    Completed,
    Cancelled,
    /// Status string this client does not know; shown verbatim
    Other(String),
}

impl OrderStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "menunggu" | "pending" | "waiting" => OrderStatus::Waiting,
            "menuju_lokasi" | "dalam_perjalanan" | "otw" => OrderStatus::EnRoute,
            "dikerjakan" | "diproses" | "proses" => OrderStatus::InProgress,
            "menunggu_pembayaran" | "belum_bayar" => OrderStatus::AwaitingPayment,
            "selesai" | "completed" => OrderStatus::Completed,
            "dibatalkan" | "batal" | "cancelled" => OrderStatus::Cancelled,
            _ => OrderStatus::Other(raw.to_string()),
        }
    }

    /// Wire value
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Waiting => "menunggu",
            OrderStatus::EnRoute => "menuju_lokasi",
            OrderStatus::InProgress => "dikerjakan",
            OrderStatus::AwaitingPayment => "menunggu_pembayaran",
            OrderStatus::Completed => "selesai",
            OrderStatus::Cancelled => "dibatalkan",
            OrderStatus::Other(raw) => raw,
        }
    }

    /// Display label
    pub fn label(&self) -> &str {
        match self {
            OrderStatus::Waiting => "Menunggu",
            OrderStatus::EnRoute => "Menuju Lokasi",
            OrderStatus::InProgress => "Sedang Dikerjakan",
            OrderStatus::AwaitingPayment => "Menunggu Pembayaran",
            OrderStatus::Completed => "Selesai",
            OrderStatus::Cancelled => "Dibatalkan",
            OrderStatus::Other(raw) => raw,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }
}

impl Serialize for OrderStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(OrderStatus::parse(&raw))
    }
}

/// Payment state of an order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Pending,
    Paid,
    Failed,
    Other(String),
}

impl PaymentStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "belum_bayar" | "unpaid" | "" => PaymentStatus::Unpaid,
            "pending" | "menunggu" => PaymentStatus::Pending,
            "lunas" | "paid" | "settlement" | "capture" | "sudah_bayar" => PaymentStatus::Paid,
            "gagal" | "failed" | "expire" | "deny" | "cancel" => PaymentStatus::Failed,
            _ => PaymentStatus::Other(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PaymentStatus::Unpaid => "belum_bayar",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "lunas",
            PaymentStatus::Failed => "gagal",
            PaymentStatus::Other(raw) => raw,
        }
    }

    pub fn is_paid(&self) -> bool {
        matches!(self, PaymentStatus::Paid)
    }
}

impl Serialize for PaymentStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PaymentStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(|r| PaymentStatus::parse(&r)).unwrap_or_default())
    }
}

/// Order as listed for shops, mechanics and customers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(deserialize_with = "lenient::i64")]
    pub id: i64,

    #[serde(rename = "kode_order", default)]
    pub code: Option<String>,

    pub status: OrderStatus,

    #[serde(rename = "status_pembayaran", default)]
    pub payment_status: PaymentStatus,

    #[serde(rename = "pelanggan", default)]
    pub customer: Option<UserSummary>,

    #[serde(rename = "bengkel", default)]
    pub shop: Option<Shop>,

    #[serde(rename = "layanan_bengkel", alias = "layanan", default)]
    pub service: Option<ServiceOffering>,

    #[serde(rename = "montir", default)]
    pub mechanic: Option<Mechanic>,

    #[serde(default, deserialize_with = "lenient::option_f64")]
    pub latitude: Option<f64>,

    #[serde(default, deserialize_with = "lenient::option_f64")]
    pub longitude: Option<f64>,

    #[serde(rename = "keluhan", default)]
    pub complaint: Option<String>,

    /// Base price of the booked service, when the server sends it flat
    #[serde(rename = "harga_layanan", default)]
    pub service_price: Option<Rupiah>,

    #[serde(rename = "total_harga", default)]
    pub total_price: Option<Rupiah>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Order {
    pub fn coordinate(&self) -> Option<Coordinate> {
        Coordinate::new(self.latitude?, self.longitude?).ok()
    }

    pub fn has_mechanic(&self) -> bool {
        self.mechanic.is_some()
    }

    /// Base price of the booked service
    pub fn base_price(&self) -> Rupiah {
        self.service_price
            .or_else(|| self.service.as_ref().and_then(|s| s.price))
            .unwrap_or(Rupiah::ZERO)
    }
}

/// Billable line item added by the mechanic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default, deserialize_with = "lenient::option_i64")]
    pub id: Option<i64>,

    #[serde(rename = "nama_item", alias = "nama")]
    pub name: String,

    #[serde(rename = "harga")]
    pub price: Rupiah,

    #[serde(rename = "jumlah", default = "default_quantity", deserialize_with = "lenient::i64")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    1
}

impl LineItem {
    pub fn subtotal(&self) -> Rupiah {
        self.price * self.quantity
    }
}

/// Single order with its billable items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,

    #[serde(rename = "items", alias = "detail_items", alias = "item_tambahan", default)]
    pub items: Vec<LineItem>,
}

impl OrderDetail {
    pub fn items_total(&self) -> Rupiah {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    /// Service base price plus every line item
    pub fn total(&self) -> Rupiah {
        self.order.base_price() + self.items_total()
    }

    pub fn status(&self) -> &OrderStatus {
        &self.order.status
    }

    pub fn payment_status(&self) -> &PaymentStatus {
        &self.order.payment_status
    }
}

/// Line item the mechanic adds to an order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewLineItem {
    #[serde(rename = "nama_item")]
    pub name: String,
    #[serde(rename = "harga")]
    pub price: Rupiah,
    #[serde(rename = "jumlah")]
    pub quantity: i64,
}

impl Validate for NewLineItem {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(validators::not_blank(&self.name), "nama_item", "Nama item wajib diisi");
        errors.check(self.price.amount() > 0, "harga", "Harga harus lebih dari 0");
        errors.check(self.quantity > 0, "jumlah", "Jumlah minimal 1");
        errors.into_result()
    }
}

/// Customer's service request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateOrderRequest {
    #[serde(rename = "layanan_bengkel_id")]
    pub service_id: i64,
    pub latitude: String,
    pub longitude: String,
    #[serde(rename = "keluhan", skip_serializing_if = "Option::is_none")]
    pub complaint: Option<String>,
}

impl CreateOrderRequest {
    pub fn new(service_id: i64, location: Coordinate, complaint: Option<String>) -> Self {
        Self {
            service_id,
            latitude: location.latitude_str(),
            longitude: location.longitude_str(),
            complaint: complaint.filter(|c| !c.trim().is_empty()),
        }
    }
}

/// Outcome of a one-shot status request
#[derive(Debug, Clone, PartialEq)]
pub struct OrderTransition {
    pub message: Option<String>,
    /// Order as the server sees it after the request, when it sent one back
    pub order: Option<OrderDetail>,
}
