//! Value objects for authentication and session state.

pub mod auth;
pub mod session;

pub use auth::{AuthSession, LoginRequest, ProfileUpdate, PasswordChange, RegisterRequest};
pub use session::{SessionState, SessionView};
