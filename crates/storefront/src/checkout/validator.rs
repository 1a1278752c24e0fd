//! Order form validation.

use teztayor_core::{CustomerName, DeliveryMode, PhoneNumber};

use crate::cart::Totals;
use crate::error::OrderError;
use crate::messages::Messages;

/// Address shown for pickup orders.
pub const ADDRESS_PLACEHOLDER: &str = "—";

/// Raw order form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderForm<'a> {
    pub name: &'a str,
    pub phone: &'a str,
    pub mode: DeliveryMode,
    pub address: &'a str,
}

/// Which completion the order is being validated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Local confirmation; the host keeps the submit control disabled while
    /// the cart is empty, so emptiness is not checked.
    Manual,
    /// Messaging hand-off; requires a non-empty cart.
    Handoff,
}

/// A validated order, ready for summary formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub customer_name: CustomerName,
    pub customer_phone: PhoneNumber,
    /// Phone with the country prefix, e.g. `+992 555123456`.
    pub phone_display: String,
    pub delivery_mode: DeliveryMode,
    /// Localized mode label, e.g. `Pickup`.
    pub delivery_label: &'static str,
    /// Trimmed address, or [`ADDRESS_PLACEHOLDER`] for pickup.
    pub address: String,
    /// Cart totals when the order was validated.
    pub totals: Totals,
}

/// Validates order forms against the storefront's phone prefix and texts.
#[derive(Debug, Clone, Copy)]
pub struct OrderValidator<'a> {
    country_prefix: &'a str,
    messages: &'static Messages,
}

impl<'a> OrderValidator<'a> {
    #[must_use]
    pub const fn new(country_prefix: &'a str, messages: &'static Messages) -> Self {
        Self {
            country_prefix,
            messages,
        }
    }

    /// Validate `form` and normalize it into an [`OrderRequest`].
    ///
    /// Checks run in order and stop at the first failure: name, phone,
    /// address (delivery only), then cart emptiness (hand-off only).
    ///
    /// # Errors
    ///
    /// Returns the first `OrderError` encountered.
    pub fn validate(
        &self,
        form: &OrderForm<'_>,
        totals: Totals,
        submission: Submission,
    ) -> Result<OrderRequest, OrderError> {
        let customer_name = CustomerName::parse(form.name)?;
        let customer_phone = PhoneNumber::parse(form.phone)?;

        let address = if form.mode.requires_address() {
            let address = form.address.trim();
            if address.is_empty() {
                return Err(OrderError::MissingAddress);
            }
            address.to_string()
        } else {
            ADDRESS_PLACEHOLDER.to_string()
        };

        if submission == Submission::Handoff && totals.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        Ok(OrderRequest {
            phone_display: customer_phone.international(self.country_prefix),
            customer_name,
            customer_phone,
            delivery_mode: form.mode,
            delivery_label: self.delivery_label(form.mode),
            address,
            totals,
        })
    }

    /// Localized label for a delivery mode.
    #[must_use]
    pub const fn delivery_label(&self, mode: DeliveryMode) -> &'static str {
        match mode {
            DeliveryMode::Pickup => self.messages.pickup,
            DeliveryMode::Delivery => self.messages.delivery,
        }
    }
}
