//! Order completion commands.
//!
//! # Usage
//!
//! ```bash
//! tt-cli order --name Ann --phone 555123456
//! tt-cli send --name Ann --phone 555123456 --mode delivery --address "Rudaki 10"
//! ```

use std::io::Write;

use teztayor_core::DeliveryMode;
use teztayor_storefront::{
    KeyValueStore, Launcher, Modal, Notifier, OrderController, OrderForm, SubmitOutcome,
};

use super::CommandError;

/// Order form values from the command line.
#[derive(Debug, Clone)]
pub struct FormArgs {
    pub name: String,
    pub phone: String,
    pub mode: DeliveryMode,
    pub address: String,
}

impl FormArgs {
    #[must_use]
    pub fn as_form(&self) -> OrderForm<'_> {
        OrderForm {
            name: &self.name,
            phone: &self.phone,
            mode: self.mode,
            address: &self.address,
        }
    }
}

/// Validate, confirm and place the order.
///
/// On confirmation the cart is cleared and the acknowledgment is shown by
/// the notifier.
///
/// # Errors
///
/// Returns an error if the cart is empty, validation fails or writing fails.
pub fn submit<S, N, L>(
    controller: &mut OrderController<S, N, L>,
    args: &FormArgs,
    out: &mut impl Write,
) -> Result<(), CommandError>
where
    S: KeyValueStore,
    N: Notifier,
    L: Launcher,
{
    controller.open(Modal::Cart);
    if !controller.begin_checkout() {
        return Err(CommandError::Disabled("Checkout is disabled: the cart is empty"));
    }

    match controller.submit_order(&args.as_form())? {
        SubmitOutcome::Confirmed(order) => {
            tracing::info!(customer = %order.customer_name, "Order placed");
        }
        SubmitOutcome::Declined => {
            writeln!(out, "Order not placed; the cart is unchanged.")?;
        }
    }
    Ok(())
}

/// Validate the order and print its messaging hand-off link.
///
/// The cart is kept.
///
/// # Errors
///
/// Returns an error if validation fails, the link cannot be produced or
/// writing fails.
pub fn send<S, N, L>(
    controller: &mut OrderController<S, N, L>,
    args: &FormArgs,
    out: &mut impl Write,
) -> Result<(), CommandError>
where
    S: KeyValueStore,
    N: Notifier,
    L: Launcher,
{
    controller.send_to_messenger(&args.as_form())?;
    let items = controller.cart().totals().items;
    writeln!(out, "Cart kept ({items} items) until the restaurant confirms.")?;
    Ok(())
}
