//! Common utility functions

pub mod mime;
pub mod phone;
pub mod validation;

pub use mime::infer_image_mime;
pub use phone::{mask_phone_number, normalize_phone_number};
pub use validation::{mask_email, FieldError, Validate, ValidationErrors};
