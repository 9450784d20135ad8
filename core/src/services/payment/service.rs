use std::sync::Arc;

use bk_shared::config::PaymentConfig;
use bk_shared::utils::validation::{validators, ValidationErrors};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};
use url::Url;

use crate::domain::entities::payment::{CheckoutProgress, PaymentConfirmation, SnapTransaction};
use crate::errors::{DomainError, DomainResult};
use crate::services::endpoints;
use crate::services::envelope::{decode, EnvelopeExt};
use crate::services::orders::fetch_order_detail;
use crate::services::transport::{ApiTransport, ApiTransportExt};

#[derive(Deserialize)]
struct SnapPayload {
    snap_token: String,
}

pub struct PaymentService<T: ApiTransport> {
    transport: Arc<T>,
    config: PaymentConfig,
}

impl<T: ApiTransport> PaymentService<T> {
    pub fn new(transport: Arc<T>, config: PaymentConfig) -> Self {
        Self { transport, config }
    }

    /// Open a checkout transaction for the order with code `order_code`
    pub async fn create_transaction(&self, order_code: &str) -> DomainResult<SnapTransaction> {
        let order_code = order_code.trim();
        let mut errors = ValidationErrors::new();
        errors.check(validators::not_blank(order_code), "kode_order", "Kode order wajib diisi");
        errors.into_result()?;

        let body = self
            .transport
            .post(endpoints::PAYMENT_CREATE, &json!({ "kode_order": order_code }))
            .await?;
        let payload = decode::<SnapPayload>(body)?.require_data("snap token")?;
        if payload.snap_token.trim().is_empty() {
            return Err(DomainError::missing("snap token"));
        }

        info!(order_code, "Checkout transaction created");
        Ok(SnapTransaction {
            checkout_url: self.config.checkout_url(&payload.snap_token),
            snap_token: payload.snap_token,
        })
    }

    /// Whether the web view has landed on the finish redirect.
    ///
    /// Both finish parameters must be present and non-empty. Unparseable
    /// addresses are still pending.
    pub fn inspect_navigation(&self, address: &str) -> CheckoutProgress {
        let Ok(url) = Url::parse(address) else {
            return CheckoutProgress::Pending;
        };
        let [order_param, status_param] = &self.config.finish_params;

        let mut order_id = None;
        let mut transaction_status = None;
        for (key, value) in url.query_pairs() {
            if value.is_empty() {
                continue;
            }
            if key == order_param.as_str() {
                order_id = Some(value.into_owned());
            } else if key == status_param.as_str() {
                transaction_status = Some(value.into_owned());
            }
        }

        match (order_id, transaction_status) {
            (Some(order_id), Some(transaction_status)) => {
                debug!(order_id = %order_id, transaction_status = %transaction_status, "Checkout redirect seen");
                CheckoutProgress::Finished {
                    order_id,
                    transaction_status,
                }
            }
            _ => CheckoutProgress::Pending,
        }
    }

    /// Authoritative payment state, read back from the order
    pub async fn confirm(&self, order_id: i64) -> DomainResult<PaymentConfirmation> {
        let order = fetch_order_detail(self.transport.as_ref(), order_id).await?;
        let status = order.payment_status().clone();
        info!(order_id, payment_status = status.as_str(), "Payment status confirmed");
        Ok(PaymentConfirmation { status, order })
    }
}
