//! Transport seam between the service modules and the HTTP access layer.
//!
//! The infra crate provides the reqwest implementation; tests substitute a
//! scripted double. Either way services only see decoded JSON bodies or a
//! normalized [`ApiError`].

mod request;

pub use request::{ApiRequest, FilePart, HttpMethod, MultipartForm, RequestBody, RequestOptions};

use async_trait::async_trait;
use bk_shared::ApiError;
use serde::Serialize;
use serde_json::Value;

use crate::errors::DomainResult;

/// Single point of outgoing network traffic
///
/// Implementations resolve to the decoded body of a 2xx response, or to a
/// normalized error for everything else. On 401 they clear the credential
/// store first unless the request opted out.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError>;
}

#[async_trait]
impl<T: ApiTransport + ?Sized> ApiTransport for std::sync::Arc<T> {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        (**self).send(request).await
    }
}

/// Verb helpers over [`ApiTransport::send`]
#[async_trait]
pub trait ApiTransportExt: ApiTransport {
    async fn get(&self, path: &str) -> DomainResult<Value> {
        Ok(self.send(ApiRequest::new(HttpMethod::Get, path)).await?)
    }

    async fn post<B>(&self, path: &str, body: &B) -> DomainResult<Value>
    where
        B: Serialize + Sync + ?Sized,
    {
        let request = ApiRequest::new(HttpMethod::Post, path).json(body)?;
        Ok(self.send(request).await?)
    }

    /// POST without a body
    async fn post_empty(&self, path: &str) -> DomainResult<Value> {
        Ok(self.send(ApiRequest::new(HttpMethod::Post, path)).await?)
    }

    async fn put<B>(&self, path: &str, body: &B) -> DomainResult<Value>
    where
        B: Serialize + Sync + ?Sized,
    {
        let request = ApiRequest::new(HttpMethod::Put, path).json(body)?;
        Ok(self.send(request).await?)
    }

    async fn patch<B>(&self, path: &str, body: &B) -> DomainResult<Value>
    where
        B: Serialize + Sync + ?Sized,
    {
        let request = ApiRequest::new(HttpMethod::Patch, path).json(body)?;
        Ok(self.send(request).await?)
    }

    async fn delete(&self, path: &str) -> DomainResult<Value> {
        Ok(self.send(ApiRequest::new(HttpMethod::Delete, path)).await?)
    }

    async fn post_multipart(&self, path: &str, form: MultipartForm) -> DomainResult<Value> {
        let request = ApiRequest::new(HttpMethod::Post, path).multipart(form);
        Ok(self.send(request).await?)
    }
}

impl<T: ApiTransport + ?Sized> ApiTransportExt for T {}
