use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info};

use crate::domain::entities::order::{Order, OrderDetail, OrderTransition};
use crate::errors::DomainResult;
use crate::services::endpoints;
use crate::services::envelope::decode_list;
use crate::services::orders::{fetch_order_detail, read_transition};
use crate::services::transport::{ApiTransport, ApiTransportExt};

/// Orders placed with the caller's shop
pub struct ShopOrderService<T: ApiTransport> {
    transport: Arc<T>,
}

impl<T: ApiTransport> ShopOrderService<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    pub async fn list(&self) -> DomainResult<Vec<Order>> {
        let body = self.transport.get(endpoints::SHOP_ORDERS).await?;
        let orders = decode_list::<Order>(body)?.data.unwrap_or_default();
        debug!(count = orders.len(), "Shop orders loaded");
        Ok(orders)
    }

    pub async fn detail(&self, order_id: i64) -> DomainResult<OrderDetail> {
        fetch_order_detail(self.transport.as_ref(), order_id).await
    }

    /// Hand the order to one of the shop's mechanics
    pub async fn assign_mechanic(&self, order_id: i64, mechanic_id: i64) -> DomainResult<OrderTransition> {
        let body = self
            .transport
            .post(&endpoints::assign_mechanic(order_id), &json!({ "montir_id": mechanic_id }))
            .await?;
        info!(order_id, mechanic_id, "Mechanic assigned");
        read_transition(order_id, body)
    }
}
