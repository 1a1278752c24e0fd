//! Order validation and checkout errors.
//!
//! Every variant of [`OrderError`] is a user-input rejection: the host shows
//! [`OrderError::message`] and, where [`OrderError::field`] names one, moves
//! focus back to that form field. None of them changes cart state.

use teztayor_core::{NameError, PhoneError};
use thiserror::Error;

use crate::checkout::HandoffError;
use crate::messages::Messages;

/// Order form fields that validation can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Phone,
    Address,
}

/// Reasons an order is rejected before submission or hand-off.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Name is empty or contains something other than letters.
    #[error("Invalid name: {0}")]
    InvalidName(#[from] NameError),

    /// Phone is not exactly nine digits.
    #[error("Invalid phone: {0}")]
    InvalidPhone(#[from] PhoneError),

    /// Delivery was chosen without an address.
    #[error("Address is required for delivery")]
    MissingAddress,

    /// Messaging hand-off with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,
}

impl OrderError {
    /// The form field the user should correct, if any.
    #[must_use]
    pub const fn field(&self) -> Option<FormField> {
        match self {
            Self::InvalidName(_) => Some(FormField::Name),
            Self::InvalidPhone(_) => Some(FormField::Phone),
            Self::MissingAddress => Some(FormField::Address),
            Self::EmptyCart => None,
        }
    }

    /// The alert text shown to the user.
    #[must_use]
    pub const fn message(&self, messages: &'static Messages) -> &'static str {
        match self {
            Self::InvalidName(_) => messages.invalid_name,
            Self::InvalidPhone(_) => messages.invalid_phone,
            Self::MissingAddress => messages.missing_address,
            Self::EmptyCart => messages.empty_cart,
        }
    }
}

/// Failure of the messaging hand-off flow.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The order was rejected by validation.
    #[error(transparent)]
    Invalid(#[from] OrderError),

    /// The hand-off link could not be built or opened.
    #[error(transparent)]
    Handoff(#[from] HandoffError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Language;

    #[test]
    fn test_fields() {
        assert_eq!(
            OrderError::InvalidName(NameError::Empty).field(),
            Some(FormField::Name)
        );
        assert_eq!(
            OrderError::InvalidPhone(PhoneError::NonDigit('x')).field(),
            Some(FormField::Phone)
        );
        assert_eq!(OrderError::MissingAddress.field(), Some(FormField::Address));
        assert_eq!(OrderError::EmptyCart.field(), None);
    }

    #[test]
    fn test_messages_follow_language() {
        let en = Language::En.messages();
        let ru = Language::Ru.messages();
        assert_eq!(OrderError::EmptyCart.message(en), "The cart is empty!");
        assert_eq!(OrderError::MissingAddress.message(ru), "Укажите адрес.");
    }
}
