//! Service modules, one per role, plus the session controller.
//!
//! Every module is generic over the [`ApiTransport`] it talks through and
//! holds it in an `Arc`, so one HTTP client is shared by all of them.

pub mod auth;
pub mod customer;
pub mod endpoints;
pub mod envelope;
pub mod mechanic;
pub mod payment;
pub mod session;
pub mod shop;
pub mod transport;

mod orders;

#[cfg(test)]
mod tests;

pub use auth::AuthService;
pub use customer::CustomerService;
pub use envelope::EnvelopeExt;
pub use mechanic::MechanicJobService;
pub use payment::PaymentService;
pub use session::SessionController;
pub use shop::{MechanicRosterService, ServiceCatalogService, ShopOrderService, ShopSetupService};
pub use transport::{
    ApiRequest, ApiTransport, ApiTransportExt, FilePart, HttpMethod, MultipartForm, RequestBody,
    RequestOptions,
};
