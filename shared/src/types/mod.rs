//! Type definitions shared across the client
//!
//! - `common` - Coordinates, money and lenient number decoding
//! - `response` - The canonical response envelope

pub mod common;
pub mod response;

pub use common::{lenient, Coordinate, CoordinateError, Rupiah};
pub use response::Envelope;
