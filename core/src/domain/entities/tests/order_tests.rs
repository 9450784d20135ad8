//! Unit tests for orders and their price summation

use bk_shared::types::Rupiah;
use bk_shared::utils::validation::Validate;
use serde_json::json;

use crate::domain::entities::order::{NewLineItem, Order, OrderDetail, OrderStatus, PaymentStatus};

#[test]
fn test_status_parsing() {
    assert_eq!(OrderStatus::parse("menunggu"), OrderStatus::Waiting);
    assert_eq!(OrderStatus::parse("MENUJU_LOKASI"), OrderStatus::EnRoute);
    assert_eq!(OrderStatus::parse("dikerjakan"), OrderStatus::InProgress);
    assert_eq!(OrderStatus::parse("menunggu_pembayaran"), OrderStatus::AwaitingPayment);
    assert_eq!(OrderStatus::parse("selesai"), OrderStatus::Completed);
    assert_eq!(OrderStatus::parse("dibatalkan"), OrderStatus::Cancelled);
    assert_eq!(
        OrderStatus::parse("ditinjau"),
        OrderStatus::Other("ditinjau".to_string())
    );
}

#[test]
fn test_status_labels_and_terminal() {
    assert_eq!(OrderStatus::EnRoute.label(), "Menuju Lokasi");
    assert_eq!(OrderStatus::Other("x".into()).label(), "x");
    assert!(OrderStatus::Completed.is_terminal());
    assert!(OrderStatus::Cancelled.is_terminal());
    assert!(!OrderStatus::AwaitingPayment.is_terminal());
}

#[test]
fn test_status_wire_round_trip() {
    let json = serde_json::to_string(&OrderStatus::AwaitingPayment).unwrap();
    assert_eq!(json, "\"menunggu_pembayaran\"");
}

#[test]
fn test_payment_status_parsing() {
    assert_eq!(PaymentStatus::parse("lunas"), PaymentStatus::Paid);
    assert_eq!(PaymentStatus::parse("settlement"), PaymentStatus::Paid);
    assert_eq!(PaymentStatus::parse("expire"), PaymentStatus::Failed);
    assert_eq!(PaymentStatus::parse("belum_bayar"), PaymentStatus::Unpaid);
}

#[test]
fn test_order_defaults() {
    let order: Order = serde_json::from_value(json!({ "id": 10, "status": "menunggu" })).unwrap();
    assert_eq!(order.payment_status, PaymentStatus::Unpaid);
    assert!(!order.has_mechanic());
    assert_eq!(order.base_price(), Rupiah::ZERO);
}

#[test]
fn test_order_detail_total() {
    let detail: OrderDetail = serde_json::from_value(json!({
        "id": 10,
        "kode_order": "ORD-0010",
        "status": "menunggu_pembayaran",
        "status_pembayaran": null,
        "layanan_bengkel": { "id": 2, "nama_layanan": "Servis Ringan", "harga": "75000.00" },
        "montir": { "id": 4, "nama": "Andi" },
        "latitude": "-6.2",
        "longitude": "106.8",
        "created_at": "2024-05-01T08:00:00.000000Z",
        "items": [
            { "id": 1, "nama_item": "Oli Mesin", "harga": 45000, "jumlah": 2 },
            { "id": 2, "nama_item": "Busi", "harga": "20000" }
        ]
    }))
    .unwrap();

    assert_eq!(detail.order.code.as_deref(), Some("ORD-0010"));
    assert_eq!(detail.items[1].quantity, 1);
    assert_eq!(detail.items_total(), Rupiah(110_000));
    assert_eq!(detail.total(), Rupiah(185_000));
    assert_eq!(detail.order.mechanic.as_ref().map(|m| m.display_name()), Some("Andi"));
    assert!(detail.order.coordinate().is_some());
}

#[test]
fn test_flat_service_price_wins() {
    let detail: OrderDetail = serde_json::from_value(json!({
        "id": 11,
        "status": "selesai",
        "harga_layanan": 60000,
        "layanan_bengkel": { "id": 2, "nama_layanan": "Servis", "harga": 75000 }
    }))
    .unwrap();
    assert_eq!(detail.total(), Rupiah(60_000));
}

#[test]
fn test_new_line_item_validation() {
    let item = NewLineItem {
        name: "Kampas Rem".to_string(),
        price: Rupiah(0),
        quantity: 0,
    };
    let errors = item.validate().unwrap_err();
    assert!(errors.has_field("harga"));
    assert!(errors.has_field("jumlah"));
}
