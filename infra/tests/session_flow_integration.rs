//! End-to-end session flow through the client context

use bk_core::domain::value_objects::SessionState;
use bk_core::repositories::CredentialStore;
use bk_infra::ClientContext;
use bk_shared::config::{ApiConfig, AppConfig, StorageConfig};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer, dir: &tempfile::TempDir) -> AppConfig {
    AppConfig {
        api: ApiConfig::new(format!("{}/api", server.uri())),
        storage: StorageConfig::new(dir.path()),
        ..AppConfig::development()
    }
}

fn user_json() -> serde_json::Value {
    json!({
        "id": 1,
        "nama": "Budi",
        "alamat": "Jl. Merdeka 1",
        "email": "a@b.com",
        "no_telp": "081234567890",
        "role": "pelanggan"
    })
}

#[tokio::test]
async fn test_login_restart_and_expiry() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "ok",
            "data": user_json(),
            "token": "abc"
        })))
        .mount(&server)
        .await;

    let context = ClientContext::build(config_for(&server, &dir)).unwrap();
    assert_eq!(context.start().await, SessionState::Unauthenticated);

    let user = context.session().login("a@b.com", "secret1").await.unwrap();
    assert_eq!(user.name, "Budi");
    assert!(context.session().snapshot().is_authenticated);
    assert_eq!(context.store().get_token().await.unwrap(), Some("abc".to_string()));

    // A fresh context over the same directory restores the session
    let restarted = ClientContext::build(config_for(&server, &dir)).unwrap();
    assert_eq!(restarted.start().await, SessionState::Authenticated(user));

    Mock::given(method("GET"))
        .and(path("/api/order-layanan/order-history"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Unauthenticated." })))
        .mount(&server)
        .await;

    let error = restarted.services().customer.order_history().await.unwrap_err();
    assert!(error.is_unauthorized());
    assert_eq!(restarted.store().get_token().await.unwrap(), None);
    assert_eq!(restarted.store().get_user().await.unwrap(), None);

    assert_eq!(
        restarted.session().reconcile().await.unwrap(),
        SessionState::Unauthenticated
    );
}

#[tokio::test]
async fn test_logout_clears_disk_state() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": user_json(),
            "token": "abc"
        })))
        .mount(&server)
        .await;

    let context = ClientContext::build(config_for(&server, &dir)).unwrap();
    context.start().await;
    context.session().login("a@b.com", "secret1").await.unwrap();

    context.session().logout().await.unwrap();

    assert_eq!(context.session().state(), SessionState::Unauthenticated);
    assert_eq!(context.store().load_session().await.unwrap(), None);

    let restarted = ClientContext::build(config_for(&server, &dir)).unwrap();
    assert_eq!(restarted.start().await, SessionState::Unauthenticated);
}

#[tokio::test]
async fn test_search_then_pay() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/public/cari-bengkel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "data": [],
            "total": 0
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/payment/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "ok",
            "data": { "snap_token": "snap-1" }
        })))
        .mount(&server)
        .await;

    let context = ClientContext::build(config_for(&server, &dir)).unwrap();
    let services = context.services();

    let location = bk_shared::Coordinate::new(-6.2, 106.8).unwrap();
    let result = services.customer.search_shops(location, "Ganti Oli").await.unwrap();
    assert!(result.is_empty());

    let transaction = services.payment.create_transaction("ORD-1").await.unwrap();
    assert!(transaction.checkout_url.ends_with("/snap-1"));
}
