//! The single point of outgoing network traffic.
//!
//! Every request gets the configured base URL, timeout and JSON headers,
//! plus `Authorization: Bearer <token>` when the credential store holds one.
//! Failures come back as a normalized [`ApiError`]. A 401 clears the store
//! before the error is returned, unless the configuration or the request
//! opts out.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use bk_core::repositories::CredentialStore;
use bk_core::services::transport::{ApiRequest, ApiTransport, HttpMethod, MultipartForm, RequestBody};
use bk_shared::config::ApiConfig;
use bk_shared::ApiError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::InfrastructureError;

pub struct HttpApiClient<S: CredentialStore> {
    client: Client,
    config: ApiConfig,
    store: Arc<S>,
}

impl<S: CredentialStore> HttpApiClient<S> {
    pub fn new(config: ApiConfig, store: Arc<S>) -> Result<Self, InfrastructureError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .user_agent(config.user_agent.clone())
            .build()?;

        info!(
            base_url = %config.base_url,
            timeout_secs = config.timeout_secs,
            "HTTP client initialized"
        );

        Ok(Self { client, config, store })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    async fn bearer_token(&self) -> Option<String> {
        match self.store.get_token().await {
            Ok(token) => token,
            Err(e) => {
                warn!("Could not read token, sending request without it: {}", e);
                None
            }
        }
    }

    /// Eager session invalidation; a storage fault here does not replace the 401
    async fn invalidate_session(&self, path: &str) {
        match self.store.clear_all().await {
            Ok(()) => info!(path, "Session cleared after 401"),
            Err(e) => error!(path, "Failed to clear session after 401: {}", e),
        }
    }
}

#[async_trait]
impl<S: CredentialStore> ApiTransport for HttpApiClient<S> {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let ApiRequest {
            method,
            path,
            body,
            options,
        } = request;
        let url = self.config.url_for(&path);

        let mut builder = self.client.request(to_reqwest_method(method), &url);
        if let Some(token) = self.bearer_token().await {
            builder = builder.bearer_auth(token);
        }
        builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(form) => builder.multipart(build_form(form)?),
        };

        let started = Instant::now();
        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(%method, path = %path, timeout = e.is_timeout(), "Request failed without response: {}", e);
                return Err(ApiError::transport(None));
            }
        };

        let status = response.status();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(%method, path = %path, status = status.as_u16(), "Failed to read response body: {}", e);
                return Err(ApiError::transport(None));
            }
        };
        let elapsed_ms = started.elapsed().as_millis() as u64;
        debug!(%method, path = %path, status = status.as_u16(), elapsed_ms, "Request finished");

        let parsed = if bytes.is_empty() {
            Some(Value::Null)
        } else {
            serde_json::from_slice::<Value>(&bytes).ok()
        };

        if status.is_success() {
            return parsed.ok_or_else(|| {
                warn!(path = %path, status = status.as_u16(), "Response body is not JSON");
                ApiError::decode(status.as_u16())
            });
        }

        let error = ApiError::normalize(
            Some(status.as_u16()),
            parsed.as_ref(),
            Some(&status_message(status)),
        );

        if status == StatusCode::UNAUTHORIZED
            && options.invalidates_on_unauthorized(self.config.invalidate_session_on_unauthorized)
        {
            self.invalidate_session(&path).await;
        }

        warn!(%method, path = %path, status = status.as_u16(), "Request rejected: {}", error.message);
        Err(error)
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Transport-level message for a non-2xx status
fn status_message(status: StatusCode) -> String {
    format!("Request failed with status code {}", status.as_u16())
}

fn build_form(form: MultipartForm) -> Result<Form, ApiError> {
    let mut multipart = Form::new();
    for (name, value) in form.fields {
        multipart = multipart.text(name, value);
    }
    for file in form.files {
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.mime)
            .map_err(|e| {
                error!(field = %file.field, mime = %file.mime, "Invalid upload content type: {}", e);
                ApiError::transport(None)
            })?;
        multipart = multipart.part(file.field, part);
    }
    Ok(multipart)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        assert_eq!(
            status_message(StatusCode::INTERNAL_SERVER_ERROR),
            "Request failed with status code 500"
        );
    }

    #[test]
    fn test_method_mapping() {
        assert_eq!(to_reqwest_method(HttpMethod::Patch), Method::PATCH);
        assert_eq!(to_reqwest_method(HttpMethod::Delete), Method::DELETE);
    }

    #[test]
    fn test_build_form_rejects_bad_mime() {
        let form = MultipartForm::new().file("foto", "foto.png", "not a mime", vec![1]);
        assert!(build_form(form).is_err());
    }
}
