//! Core types for Toko.

pub mod cart;
pub mod price;

pub use cart::{Cart, CartItem};
pub use price::Price;
