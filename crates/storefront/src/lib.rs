//! TezTayor Storefront library.
//!
//! The ordering widget's logic with no rendering attached: a persisted cart,
//! modal state, order validation, summary texts and the messaging hand-off.
//! Hosts drive it through [`OrderController`] and supply storage, dialogs
//! and link opening as injected capabilities.
//!
//! # Modules
//!
//! - [`cart`] - Cart model, persistence and change notification
//! - [`checkout`] - Validation, summary formatting, hand-off links
//! - [`controller`] - Event handlers and the two completion flows
//! - [`ui`] - Modal visibility and control enablement
//! - [`storage`] - Key-value store trait and backends
//! - [`catalog`] - Menu loading
//! - [`config`] - Environment configuration
//! - [`messages`] - English and Russian texts

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod controller;
pub mod error;
pub mod messages;
pub mod storage;
pub mod ui;

pub use cart::{Cart, CartLine, CartObserver, CartStore, CartView, Totals};
pub use catalog::{Menu, MenuItem};
pub use checkout::{OrderForm, OrderRequest};
pub use config::StorefrontConfig;
pub use controller::{Launcher, Notifier, OrderController, SubmitOutcome};
pub use error::{CheckoutError, FormField, OrderError};
pub use messages::Language;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use ui::{Controls, Modal, UiCoordinator};
