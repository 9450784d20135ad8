use std::sync::Arc;

use bk_shared::utils::phone::mask_phone_number;
use bk_shared::utils::validation::{mask_email, Validate};
use tracing::{debug, info};

use crate::domain::entities::mechanic::{CreateMechanicRequest, Mechanic};
use crate::errors::DomainResult;
use crate::services::endpoints;
use crate::services::envelope::{decode_list, decode_optional_list};
use crate::services::transport::{ApiTransport, ApiTransportExt};

/// Mechanics employed by the caller's shop.
///
/// Mutations answer with the refreshed roster, never a locally patched one.
pub struct MechanicRosterService<T: ApiTransport> {
    transport: Arc<T>,
}

impl<T: ApiTransport> MechanicRosterService<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    pub async fn list(&self) -> DomainResult<Vec<Mechanic>> {
        let body = self.transport.get(endpoints::ROSTER_LIST).await?;
        let roster = decode_list::<Mechanic>(body)?.data.unwrap_or_default();
        debug!(count = roster.len(), "Mechanic roster loaded");
        Ok(roster)
    }

    pub async fn create(&self, request: &CreateMechanicRequest) -> DomainResult<Vec<Mechanic>> {
        request.validate()?;

        let body = self.transport.post(endpoints::ROSTER_CREATE, request).await?;
        info!(
            email = %mask_email(&request.email),
            phone = %mask_phone_number(&request.phone),
            "Mechanic added"
        );
        self.settle(body).await
    }

    pub async fn delete(&self, id: i64) -> DomainResult<Vec<Mechanic>> {
        let body = self.transport.delete(&endpoints::roster_delete(id)).await?;
        info!(mechanic_id = id, "Mechanic removed");
        self.settle(body).await
    }

    async fn settle(&self, body: serde_json::Value) -> DomainResult<Vec<Mechanic>> {
        match decode_optional_list(body)? {
            Some(roster) => Ok(roster),
            None => self.list().await,
        }
    }
}
