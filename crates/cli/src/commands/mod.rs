//! Subcommand implementations.
//!
//! Each command writes its user-facing output to the given writer and
//! returns a [`CommandError`] for anything that should end the process with
//! a non-zero status.

pub mod cart;
pub mod menu;
pub mod order;

use teztayor_storefront::catalog::CatalogError;
use teztayor_storefront::{CheckoutError, OrderError};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Writing output failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    /// The menu could not be loaded or lacks the dish.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// `add` without `--menu` needs a name and a price.
    #[error("Missing --{0} (or use --menu)")]
    MissingItemField(&'static str),

    /// The control is disabled in the current state.
    #[error("{0}")]
    Disabled(&'static str),

    /// The order was rejected by validation.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// The messaging hand-off failed.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}
