//! Customer module: shop search, ordering, history, profile and reviews.

mod service;

pub use service::CustomerService;
