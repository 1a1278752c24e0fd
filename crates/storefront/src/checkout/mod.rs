//! Order validation, summary formatting and messaging hand-off.
//!
//! Both completions of an order share [`OrderValidator`] and
//! [`SummaryFormatter`]; they differ only in what the controller does with
//! the result (see [`crate::controller`]).

mod handoff;
mod summary;
mod validator;

pub use handoff::{HandoffError, HandoffTarget};
pub use summary::SummaryFormatter;
pub use validator::{ADDRESS_PLACEHOLDER, OrderForm, OrderRequest, OrderValidator, Submission};
