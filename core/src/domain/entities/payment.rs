//! Hosted checkout values.

use serde::{Deserialize, Serialize};

use super::order::{OrderDetail, PaymentStatus};

/// Transaction opened on the hosted payment page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapTransaction {
    pub snap_token: String,
    /// Page to open in the embedded web view
    pub checkout_url: String,
}

/// What the embedded web view's current address says about the checkout.
///
/// This is only a hint that it is time to re-check the order; it proves
/// nothing about the payment itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutProgress {
    Pending,
    Finished {
        order_id: String,
        transaction_status: String,
    },
}

impl CheckoutProgress {
    pub fn is_finished(&self) -> bool {
        matches!(self, CheckoutProgress::Finished { .. })
    }
}

/// Authoritative payment state read back from the server
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentConfirmation {
    pub status: PaymentStatus,
    pub order: OrderDetail,
}

impl PaymentConfirmation {
    pub fn is_paid(&self) -> bool {
        self.status.is_paid()
    }
}
