//! # Bengkel Connect Core
//!
//! Domain and application layer of the Bengkel Connect client.
//! This crate contains the domain entities, the credential store and
//! transport interfaces, the role-scoped service modules and the session
//! controller that front ends drive.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::{
    ApiRequest, ApiTransport, ApiTransportExt, AuthService, CustomerService, EnvelopeExt,
    FilePart, HttpMethod, MechanicJobService, MechanicRosterService, MultipartForm, PaymentService,
    RequestBody, RequestOptions, ServiceCatalogService, SessionController, ShopOrderService,
    ShopSetupService,
};
