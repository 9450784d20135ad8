//! Domain entities mirrored from the marketplace API.

pub mod mechanic;
pub mod order;
pub mod payment;
pub mod review;
pub mod service_offering;
pub mod shop;
pub mod user;

#[cfg(test)]
mod tests;

pub use mechanic::{CreateMechanicRequest, Mechanic, MechanicMembership};
pub use order::{
    CreateOrderRequest, LineItem, NewLineItem, Order, OrderDetail, OrderStatus, OrderTransition,
    PaymentStatus,
};
pub use payment::{CheckoutProgress, PaymentConfirmation, SnapTransaction};
pub use review::ReviewRequest;
pub use service_offering::ServiceOffering;
pub use shop::{PhotoUpload, Shop, ShopSearchResult, ShopSetupRequest, Verification};
pub use user::{Role, User, UserSummary};
