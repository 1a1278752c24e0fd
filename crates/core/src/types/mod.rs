//! Core types for TezTayor.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod customer;
pub mod delivery;
pub mod id;
pub mod price;

pub use customer::{CustomerName, NameError, PhoneError, PhoneNumber};
pub use delivery::DeliveryMode;
pub use id::*;
pub use price::Price;
