//! Shop-owner modules: shop setup, service catalog, mechanic roster and
//! incoming orders.

mod catalog;
mod orders;
mod roster;
mod setup;

pub use catalog::ServiceCatalogService;
pub use orders::ShopOrderService;
pub use roster::MechanicRosterService;
pub use setup::ShopSetupService;
