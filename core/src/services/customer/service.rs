use std::sync::Arc;

use bk_shared::types::Coordinate;
use bk_shared::utils::validation::{validators, Validate, ValidationErrors};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::domain::entities::order::{CreateOrderRequest, Order, OrderDetail};
use crate::domain::entities::review::ReviewRequest;
use crate::domain::entities::shop::{Shop, ShopSearchResult};
use crate::domain::entities::user::User;
use crate::domain::value_objects::{PasswordChange, ProfileUpdate};
use crate::errors::DomainResult;
use crate::repositories::CredentialStore;
use crate::services::endpoints;
use crate::services::envelope::{decode, decode_list, EnvelopeExt};
use crate::services::orders::fetch_order_detail;
use crate::services::transport::{ApiTransport, ApiTransportExt};

pub struct CustomerService<T, S>
where
    T: ApiTransport,
    S: CredentialStore,
{
    transport: Arc<T>,
    store: Arc<S>,
}

impl<T, S> CustomerService<T, S>
where
    T: ApiTransport,
    S: CredentialStore,
{
    pub fn new(transport: Arc<T>, store: Arc<S>) -> Self {
        Self { transport, store }
    }

    /// Shops near `location` offering `service_type`.
    ///
    /// An empty result is a valid answer; check [`ShopSearchResult::is_empty`].
    pub async fn search_shops(&self, location: Coordinate, service_type: &str) -> DomainResult<ShopSearchResult> {
        let service_type = service_type.trim();
        let mut errors = ValidationErrors::new();
        errors.check(validators::not_blank(service_type), "jenis_layanan", "Jenis layanan wajib diisi");
        errors.into_result()?;

        let payload = json!({
            "latitude": location.latitude_str(),
            "longitude": location.longitude_str(),
            "jenis_layanan": service_type,
        });
        let body = self.transport.post(endpoints::SHOP_SEARCH, &payload).await?;
        let envelope = decode_list::<Shop>(body)?;

        let shops = envelope.data.unwrap_or_default();
        let total = envelope.total.unwrap_or(shops.len() as u64);
        debug!(location = %location, service_type, total, "Shop search finished");
        Ok(ShopSearchResult { shops, total })
    }

    pub async fn create_order(&self, request: &CreateOrderRequest) -> DomainResult<OrderDetail> {
        let body = self.transport.post(endpoints::CREATE_ORDER, request).await?;
        let order = decode::<OrderDetail>(body)?.require_data("order")?;
        info!(order_id = order.order.id, service_id = request.service_id, "Order created");
        Ok(order)
    }

    pub async fn order_history(&self) -> DomainResult<Vec<Order>> {
        let body = self.transport.get(endpoints::ORDER_HISTORY).await?;
        Ok(decode_list::<Order>(body)?.data.unwrap_or_default())
    }

    pub async fn order_detail(&self, order_id: i64) -> DomainResult<OrderDetail> {
        fetch_order_detail(self.transport.as_ref(), order_id).await
    }

    /// Update the profile and refresh the cached user when the server returns one
    pub async fn update_profile(&self, update: &ProfileUpdate) -> DomainResult<Option<User>> {
        update.validate()?;

        let body = self.transport.post(endpoints::PROFILE_UPDATE, update).await?;
        let envelope = decode::<User>(body)?.into_result()?;

        if let Some(user) = &envelope.data {
            self.store.save_user(user).await?;
            info!(user_id = user.id, "Profile updated");
        }
        Ok(envelope.data)
    }

    pub async fn change_password(&self, change: &PasswordChange) -> DomainResult<Option<String>> {
        change.validate()?;

        let body = self.transport.post(endpoints::PASSWORD_CHANGE, change).await?;
        let envelope = decode::<Value>(body)?.into_result()?;
        info!("Password changed");
        Ok(envelope.message)
    }

    /// Rate the shop and the mechanic of a finished order in one call
    pub async fn submit_review(&self, review: &ReviewRequest) -> DomainResult<Option<String>> {
        review.validate()?;

        let body = self
            .transport
            .post(&endpoints::submit_review(review.order_id), review)
            .await?;
        let envelope = decode::<Value>(body)?.into_result()?;
        info!(order_id = review.order_id, "Review submitted");
        Ok(envelope.message)
    }
}
