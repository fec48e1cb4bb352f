//! Session cart.
//!
//! - `lines`: the [`Cart`] and its totals
//! - `shipping`: the [`ShippingPolicy`] deciding the shipping fee

pub mod lines;
pub mod shipping;

pub use lines::{Cart, CartLine};
pub use shipping::ShippingPolicy;
