//! HTTP access layer against a mock marketplace API

use std::sync::Arc;

use bk_core::repositories::{CredentialStore, MemoryCredentialStore};
use bk_core::services::shop::ServiceCatalogService;
use bk_core::services::transport::{ApiRequest, ApiTransport, ApiTransportExt, HttpMethod, MultipartForm, RequestOptions};
use bk_core::DomainError;
use bk_infra::HttpApiClient;
use bk_shared::config::ApiConfig;
use bk_shared::{ApiErrorKind, FALLBACK_MESSAGE};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> (HttpApiClient<MemoryCredentialStore>, Arc<MemoryCredentialStore>) {
    client_with(ApiConfig::new(format!("{}/api", server.uri()))).await
}

async fn client_with(config: ApiConfig) -> (HttpApiClient<MemoryCredentialStore>, Arc<MemoryCredentialStore>) {
    let store = Arc::new(MemoryCredentialStore::in_memory());
    let client = HttpApiClient::new(config, store.clone()).expect("client builds");
    (client, store)
}

async fn seed_session(store: &MemoryCredentialStore) {
    store.save_token("abc").await.unwrap();
    let user = serde_json::from_value(json!({
        "id": 1, "nama": "Budi", "email": "a@b.com", "role": "pelanggan"
    }))
    .unwrap();
    store.save_user(&user).await.unwrap();
}

#[tokio::test]
async fn test_json_headers_and_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/profil"))
        .and(header("authorization", "Bearer abc"))
        .and(header("accept", "application/json"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, store) = client_for(&server).await;
    store.save_token("abc").await.unwrap();

    let body = client.get("/profil").await.unwrap();
    assert_eq!(body, json!({ "success": true }));
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({ "email": "a@b.com", "password": "secret1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": true })))
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server).await;
    client
        .post("/login", &json!({ "email": "a@b.com", "password": "secret1" }))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_server_message_is_preferred() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/payment/create"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "message": "Order sudah dibayar" })))
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server).await;
    let error = client
        .send(ApiRequest::new(HttpMethod::Post, "/payment/create"))
        .await
        .unwrap_err();

    assert!(!error.success);
    assert_eq!(error.message, "Order sudah dibayar");
    assert_eq!(error.status, Some(400));
    assert_eq!(error.kind, ApiErrorKind::Server);
}

#[tokio::test]
async fn test_transport_message_when_body_has_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/order-layanan/order-history"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server).await;
    let error = client
        .send(ApiRequest::new(HttpMethod::Get, "/order-layanan/order-history"))
        .await
        .unwrap_err();

    assert_eq!(error.message, "Request failed with status code 500");
}

#[tokio::test]
async fn test_validation_errors_are_preserved() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/register"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "The given data was invalid.",
            "errors": { "email": ["Email sudah digunakan"], "no_telp": ["Nomor tidak valid"] }
        })))
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server).await;
    let error = client
        .send(ApiRequest::new(HttpMethod::Post, "/register"))
        .await
        .unwrap_err();

    assert!(error.is_validation());
    assert_eq!(error.field_errors("no_telp"), Some(&["Nomor tidak valid".to_string()][..]));
    assert_eq!(error.first_field_error(), Some("Email sudah digunakan"));

    let serialized = serde_json::to_value(&error).unwrap();
    assert_eq!(serialized["success"], json!(false));
    assert!(serialized.get("status").is_none());
}

#[tokio::test]
async fn test_unauthorized_clears_store_on_any_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/bengkel-management/montir/list-montir"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Unauthenticated." })))
        .mount(&server)
        .await;

    let (client, store) = client_for(&server).await;
    seed_session(&store).await;

    let error = client.get("/bengkel-management/montir/list-montir").await.unwrap_err();

    assert!(error.is_unauthorized());
    assert_eq!(error.user_message(), "Unauthenticated.");
    assert_eq!(store.get_token().await.unwrap(), None);
    assert_eq!(store.get_user().await.unwrap(), None);
}

#[tokio::test]
async fn test_unauthorized_policy_can_be_relaxed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/profil"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let (client, store) = client_for(&server).await;
    seed_session(&store).await;
    let request = ApiRequest::new(HttpMethod::Get, "/profil")
        .with_options(RequestOptions::keep_session_on_unauthorized());
    let error = client.send(request).await.unwrap_err();
    assert!(error.is_unauthorized());
    assert_eq!(store.get_token().await.unwrap(), Some("abc".to_string()));

    let config = ApiConfig::new(format!("{}/api", server.uri())).without_session_invalidation();
    let (relaxed, relaxed_store) = client_with(config).await;
    seed_session(&relaxed_store).await;
    relaxed.get("/profil").await.unwrap_err();
    assert_eq!(relaxed_store.get_token().await.unwrap(), Some("abc".to_string()));

    let forced = ApiRequest::new(HttpMethod::Get, "/profil").with_options(RequestOptions {
        invalidate_on_unauthorized: Some(true),
    });
    relaxed.send(forced).await.unwrap_err();
    assert_eq!(relaxed_store.get_token().await.unwrap(), None);
}

#[tokio::test]
async fn test_empty_success_body_is_null() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/bengkel-management/hapus-layanan/3"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server).await;
    let body = client.delete("/bengkel-management/hapus-layanan/3").await.unwrap();
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_catalog_delete_answered_with_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/bengkel-management/hapus-layanan/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/bengkel-management/layanan-bengkel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "data": [{ "id": 1, "nama_layanan": "Ganti Oli" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server).await;
    let catalog = ServiceCatalogService::new(Arc::new(client));

    let offerings = catalog.delete(3).await.unwrap();
    assert_eq!(offerings.len(), 1);
    assert_eq!(offerings[0].name, "Ganti Oli");
}

#[tokio::test]
async fn test_non_json_success_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/profil"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server).await;
    let error = client
        .send(ApiRequest::new(HttpMethod::Get, "/profil"))
        .await
        .unwrap_err();
    assert_eq!(error.kind, ApiErrorKind::Decode);
    assert_eq!(error.message, FALLBACK_MESSAGE);
}

#[tokio::test]
async fn test_multipart_upload_overrides_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/bengkel-management/simpan-data-bengkel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": true })))
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server).await;
    let form = MultipartForm::new()
        .text("nama", "Bengkel Jaya")
        .file("foto", "foto.PNG", "image/png", vec![0x89, 0x50, 0x4e, 0x47]);
    client
        .post_multipart("/bengkel-management/simpan-data-bengkel", form)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("multipart/form-data; boundary="));

    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"nama\""));
    assert!(body.contains("Bengkel Jaya"));
    assert!(body.contains("filename=\"foto.PNG\""));
    assert!(body.contains("Content-Type: image/png"));
}

#[tokio::test]
async fn test_timeout_is_a_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/profil"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": true }))
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = ApiConfig::new(format!("{}/api", server.uri())).with_timeout_secs(1);
    let (client, store) = client_with(config).await;
    seed_session(&store).await;

    let error = client
        .send(ApiRequest::new(HttpMethod::Get, "/profil"))
        .await
        .unwrap_err();

    assert!(error.is_transport());
    assert_eq!(error.status, None);
    assert_eq!(error.message, FALLBACK_MESSAGE);
    assert_eq!(store.get_token().await.unwrap(), Some("abc".to_string()));
}

#[tokio::test]
async fn test_unreachable_server() {
    let (client, _store) = client_with(ApiConfig::new("http://127.0.0.1:9/api").with_timeout_secs(2)).await;

    match client.get("/profil").await {
        Err(DomainError::Api(error)) => {
            assert!(error.is_transport());
            assert_eq!(error.message, FALLBACK_MESSAGE);
        }
        other => panic!("unexpected: {:?}", other),
    }
}
