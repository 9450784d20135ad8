//! Order calls shared by the shop, mechanic, customer and payment modules.

use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::entities::order::{OrderDetail, OrderTransition};
use crate::errors::DomainResult;
use crate::services::endpoints;
use crate::services::envelope::{decode, EnvelopeExt};
use crate::services::transport::{ApiTransport, ApiTransportExt};

pub(crate) async fn fetch_order_detail<T>(transport: &T, order_id: i64) -> DomainResult<OrderDetail>
where
    T: ApiTransport + ?Sized,
{
    let body = transport.get(&endpoints::order_detail(order_id)).await?;
    let detail = decode::<OrderDetail>(body)?.require_data("order detail")?;
    debug!(order_id, status = detail.status().as_str(), "Order detail fetched");
    Ok(detail)
}

/// Read the answer to a one-shot status request.
///
/// The server's acceptance is what matters; an order payload that does not
/// decode is dropped rather than failing a change that already happened.
pub(crate) fn read_transition(order_id: i64, body: Value) -> DomainResult<OrderTransition> {
    let envelope = decode::<Value>(body)?.into_result()?;
    let order = match envelope.data {
        Some(data) if data.is_object() => match serde_json::from_value::<OrderDetail>(data) {
            Ok(detail) => Some(detail),
            Err(e) => {
                warn!(order_id, "Order in transition response could not be decoded: {}", e);
                None
            }
        },
        _ => None,
    };
    Ok(OrderTransition {
        message: envelope.message,
        order,
    })
}
