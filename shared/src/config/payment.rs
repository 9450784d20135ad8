//! Hosted checkout configuration

use serde::{Deserialize, Serialize};

const SANDBOX_CHECKOUT_URL: &str = "https://app.sandbox.midtrans.com/snap/v2/vtweb/";
const PRODUCTION_CHECKOUT_URL: &str = "https://app.midtrans.com/snap/v2/vtweb/";

/// Hosted payment page configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentConfig {
    /// Prefix the snap token is appended to
    #[serde(default = "default_checkout_base_url")]
    pub checkout_base_url: String,

    /// Query parameters whose joint presence marks a finished checkout
    #[serde(default = "default_finish_params")]
    pub finish_params: [String; 2],
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self::sandbox()
    }
}

impl PaymentConfig {
    pub fn sandbox() -> Self {
        Self {
            checkout_base_url: default_checkout_base_url(),
            finish_params: default_finish_params(),
        }
    }

    pub fn production() -> Self {
        Self {
            checkout_base_url: PRODUCTION_CHECKOUT_URL.to_string(),
            finish_params: default_finish_params(),
        }
    }

    /// Build the checkout page address for a snap token
    pub fn checkout_url(&self, snap_token: &str) -> String {
        format!("{}{}", self.checkout_base_url, snap_token)
    }
}

fn default_checkout_base_url() -> String {
    SANDBOX_CHECKOUT_URL.to_string()
}

fn default_finish_params() -> [String; 2] {
    [String::from("order_id"), String::from("transaction_status")]
}
