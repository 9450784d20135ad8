//! Paired shop + mechanic rating submitted after a completed order.

use bk_shared::utils::validation::{Validate, ValidationErrors};
use serde::Serialize;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewRequest {
    #[serde(skip)]
    pub order_id: i64,

    #[serde(rename = "rating_bengkel")]
    pub shop_rating: u8,

    #[serde(rename = "rating_montir")]
    pub mechanic_rating: u8,

    #[serde(rename = "ulasan", skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Validate for ReviewRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let range = MIN_RATING..=MAX_RATING;
        let mut errors = ValidationErrors::new();
        errors.check(range.contains(&self.shop_rating), "rating_bengkel", "Rating bengkel harus 1 sampai 5");
        errors.check(range.contains(&self.mechanic_rating), "rating_montir", "Rating montir harus 1 sampai 5");
        errors.into_result()
    }
}
