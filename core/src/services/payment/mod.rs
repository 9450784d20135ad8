//! Payment module: hosted checkout transactions.
//!
//! Completion is read from the embedded web view's address, which only
//! says "time to re-check". [`PaymentService::confirm`] re-fetches the order
//! and that answer is the one to act on.

mod service;

pub use service::PaymentService;
