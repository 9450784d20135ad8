//! Session controller: sole owner of the `{ user, is_authenticated, is_loading }`
//! state observed by front ends.

mod controller;

pub use controller::SessionController;
