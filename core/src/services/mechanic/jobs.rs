use std::sync::Arc;

use bk_shared::utils::validation::{Validate, ValidationErrors};
use serde_json::json;
use tracing::{debug, info};

use crate::domain::entities::order::{NewLineItem, Order, OrderDetail, OrderTransition};
use crate::errors::DomainResult;
use crate::services::endpoints;
use crate::services::envelope::decode_list;
use crate::services::orders::{fetch_order_detail, read_transition};
use crate::services::transport::{ApiTransport, ApiTransportExt};

/// Status requests for the mechanic's own orders.
///
/// Each request is a single POST. Whether the order may move is the
/// server's decision; its answer is returned as-is.
pub struct MechanicJobService<T: ApiTransport> {
    transport: Arc<T>,
}

impl<T: ApiTransport> MechanicJobService<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    pub async fn list_assigned(&self) -> DomainResult<Vec<Order>> {
        let body = self.transport.get(endpoints::MECHANIC_ORDERS).await?;
        let orders = decode_list::<Order>(body)?.data.unwrap_or_default();
        debug!(count = orders.len(), "Assigned orders loaded");
        Ok(orders)
    }

    pub async fn detail(&self, order_id: i64) -> DomainResult<OrderDetail> {
        fetch_order_detail(self.transport.as_ref(), order_id).await
    }

    pub async fn head_to_location(&self, order_id: i64) -> DomainResult<OrderTransition> {
        let body = self
            .transport
            .post_empty(&endpoints::head_to_location(order_id))
            .await?;
        info!(order_id, "Heading to customer");
        read_transition(order_id, body)
    }

    pub async fn start_work(&self, order_id: i64) -> DomainResult<OrderTransition> {
        let body = self.transport.post_empty(&endpoints::start_work(order_id)).await?;
        info!(order_id, "Work started");
        read_transition(order_id, body)
    }

    /// Bill extra parts or labour on top of the service price
    pub async fn add_line_items(&self, order_id: i64, items: &[NewLineItem]) -> DomainResult<OrderTransition> {
        let mut errors = ValidationErrors::new();
        errors.check(!items.is_empty(), "items", "Minimal satu item");
        errors.into_result()?;
        for item in items {
            item.validate()?;
        }

        let body = self
            .transport
            .post(&endpoints::add_line_items(order_id), &json!({ "items": items }))
            .await?;
        info!(order_id, count = items.len(), "Line items added");
        read_transition(order_id, body)
    }

    pub async fn request_payment(&self, order_id: i64) -> DomainResult<OrderTransition> {
        let body = self
            .transport
            .post_empty(&endpoints::request_payment(order_id))
            .await?;
        info!(order_id, "Payment requested");
        read_transition(order_id, body)
    }
}
