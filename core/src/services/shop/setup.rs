use std::sync::Arc;

use bk_shared::utils::validation::Validate;
use tracing::info;

use crate::domain::entities::shop::{Shop, ShopSetupRequest};
use crate::errors::DomainResult;
use crate::services::endpoints;
use crate::services::envelope::{decode, EnvelopeExt};
use crate::services::transport::{ApiTransport, ApiTransportExt, MultipartForm};

/// Shop registration and verification status
pub struct ShopSetupService<T: ApiTransport> {
    transport: Arc<T>,
}

impl<T: ApiTransport> ShopSetupService<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Submit the shop profile with its photo as a multipart form
    pub async fn setup_shop(&self, request: &ShopSetupRequest) -> DomainResult<Shop> {
        request.validate()?;

        let form = MultipartForm::new()
            .text("nama", request.name.trim())
            .text("alamat", request.address.trim())
            .text("latitude", request.coordinate.latitude_str())
            .text("longitude", request.coordinate.longitude_str())
            .file(
                "foto",
                request.photo.file_name.clone(),
                request.photo.mime_type(),
                request.photo.bytes.clone(),
            );

        let body = self.transport.post_multipart(endpoints::SHOP_SETUP, form).await?;
        let shop = decode::<Shop>(body)?.require_data("shop")?;

        info!(shop_id = shop.id, verified = shop.is_verified(), "Shop saved");
        Ok(shop)
    }

    /// Shop record with the server-computed verification flag
    pub async fn check_validation_status(&self) -> DomainResult<Shop> {
        let body = self.transport.get(endpoints::SHOP_VALIDATION).await?;
        decode::<Shop>(body)?.require_data("shop")
    }
}
