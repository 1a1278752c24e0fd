//! TezTayor Core - Shared domain types.
//!
//! This crate provides the types used across the TezTayor components:
//! - `storefront` - Cart, checkout and messaging hand-off logic
//! - `cli` - Command-line host for the storefront
//!
//! # Architecture
//!
//! The core crate contains only types and parsing rules - no I/O, no storage,
//! no rendering. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs, prices, customer details
//!   and delivery modes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
