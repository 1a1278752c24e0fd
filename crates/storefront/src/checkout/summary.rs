//! Order summary texts.

use std::fmt::Write as _;

use crate::cart::Totals;
use crate::messages::Messages;

use super::OrderRequest;

/// Formats validated orders for the confirmation prompt, the success
/// acknowledgment and the messaging hand-off.
#[derive(Debug, Clone, Copy)]
pub struct SummaryFormatter<'a> {
    shop_name: &'a str,
    currency: &'a str,
    messages: &'static Messages,
}

impl<'a> SummaryFormatter<'a> {
    #[must_use]
    pub const fn new(shop_name: &'a str, currency: &'a str, messages: &'static Messages) -> Self {
        Self {
            shop_name,
            currency,
            messages,
        }
    }

    /// Text sent through the messaging hand-off.
    ///
    /// ```text
    /// Order from TezTayor
    ///
    /// Name: Ann
    /// Phone: +992 555123456
    /// Type: Pickup
    /// Address: —
    ///
    /// Items: 2
    /// Total: 500 somoni
    /// ```
    #[must_use]
    pub fn message_text(&self, order: &OrderRequest) -> String {
        let mut text = format!("{} {}\n\n", self.messages.order_from, self.shop_name);
        self.write_details(&mut text, order);
        text
    }

    /// Text of the confirmation prompt for a manual order.
    #[must_use]
    pub fn confirmation_text(&self, order: &OrderRequest) -> String {
        let mut text = format!("{}\n\n", self.messages.confirm_order_header);
        self.write_details(&mut text, order);
        text
    }

    /// Acknowledgment shown after a manual order is accepted.
    #[must_use]
    pub fn acknowledgment_text(&self, totals: &Totals) -> String {
        let m = self.messages;
        format!(
            "{}\n{}: {}\n{}: {} {}",
            m.order_confirmed, m.items_label, totals.items, m.total_label, totals.price, self.currency
        )
    }

    fn write_details(&self, text: &mut String, order: &OrderRequest) {
        let m = self.messages;
        // Writing to a String cannot fail.
        let _ = write!(
            text,
            "{}: {}\n{}: {}\n{}: {}\n{}: {}\n\n{}: {}\n{}: {} {}",
            m.name_label,
            order.customer_name,
            m.phone_label,
            order.phone_display,
            m.mode_label,
            order.delivery_label,
            m.address_label,
            order.address,
            m.items_label,
            order.totals.items,
            m.total_label,
            order.totals.price,
            self.currency,
        );
    }
}
