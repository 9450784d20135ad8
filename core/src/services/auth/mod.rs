//! Authentication service module
//!
//! Login, registration, profile fetch and password-reset requests. Login and
//! registration persist the issued token and user as a side effect.

mod service;

pub use service::AuthService;
