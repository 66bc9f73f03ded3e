//! Middleware applied to every route.

pub mod catch_panic;

pub use catch_panic::handle_panic;
