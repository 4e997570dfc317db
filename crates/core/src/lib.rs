//! Toko Core - Shared domain types.
//!
//! This crate provides the cart domain used by the storefront:
//! - [`Price`] - integer Rupiah amounts with `Rp10.000`-style display
//! - [`CartItem`] / [`Cart`] - the persisted cart collection and its
//!   mutation operations
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no sessions, no HTTP.
//! All cart mutations here are pure; persistence (load-mutate-save against
//! the session slot) lives in the storefront crate.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
