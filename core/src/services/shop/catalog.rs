use std::sync::Arc;

use bk_shared::utils::validation::{validators, ValidationErrors};
use serde_json::json;
use tracing::{debug, info};

use crate::domain::entities::service_offering::ServiceOffering;
use crate::errors::DomainResult;
use crate::services::endpoints;
use crate::services::envelope::{decode_list, decode_optional_list};
use crate::services::transport::{ApiTransport, ApiTransportExt};

/// The shop's published service offerings.
///
/// Every mutation returns the full list as the server sees it, re-fetching
/// when the mutation response does not carry one.
pub struct ServiceCatalogService<T: ApiTransport> {
    transport: Arc<T>,
}

impl<T: ApiTransport> ServiceCatalogService<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    pub async fn list(&self) -> DomainResult<Vec<ServiceOffering>> {
        let body = self.transport.get(endpoints::CATALOG_LIST).await?;
        let offerings = decode_list::<ServiceOffering>(body)?.data.unwrap_or_default();
        debug!(count = offerings.len(), "Service catalog loaded");
        Ok(offerings)
    }

    /// Create several offerings in one call
    pub async fn create_batch<N: AsRef<str>>(&self, names: &[N]) -> DomainResult<Vec<ServiceOffering>> {
        let names: Vec<&str> = names.iter().map(|n| n.as_ref().trim()).collect();

        let mut errors = ValidationErrors::new();
        errors.check(!names.is_empty(), "nama_layanan", "Minimal satu layanan");
        errors.check(
            names.iter().all(|n| validators::not_blank(n)),
            "nama_layanan",
            "Nama layanan wajib diisi",
        );
        errors.into_result()?;

        let body = self
            .transport
            .post(endpoints::CATALOG_CREATE, &json!({ "nama_layanan": names }))
            .await?;
        info!(count = names.len(), "Service offerings created");
        self.settle(body).await
    }

    pub async fn update(&self, id: i64, name: &str) -> DomainResult<Vec<ServiceOffering>> {
        let name = name.trim();
        let mut errors = ValidationErrors::new();
        errors.check(validators::not_blank(name), "nama_layanan", "Nama layanan wajib diisi");
        errors.into_result()?;

        let body = self
            .transport
            .put(&endpoints::catalog_update(id), &json!({ "nama_layanan": name }))
            .await?;
        info!(service_id = id, "Service offering updated");
        self.settle(body).await
    }

    pub async fn delete(&self, id: i64) -> DomainResult<Vec<ServiceOffering>> {
        let body = self.transport.delete(&endpoints::catalog_delete(id)).await?;
        info!(service_id = id, "Service offering deleted");
        self.settle(body).await
    }

    async fn settle(&self, body: serde_json::Value) -> DomainResult<Vec<ServiceOffering>> {
        match decode_optional_list(body)? {
            Some(offerings) => Ok(offerings),
            None => self.list().await,
        }
    }
}
