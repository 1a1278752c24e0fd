//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! tt-cli show
//! tt-cli add --id 1 --menu menu.json
//! tt-cli add --id 7 --name Tea --price 10
//! tt-cli qty --id 1 --delta -1
//! tt-cli remove --id 7
//! tt-cli clear --yes
//! ```

use std::io::Write;
use std::path::PathBuf;

use teztayor_core::{Price, ProductId};
use teztayor_storefront::{KeyValueStore, Launcher, Menu, Notifier, OrderController};

use super::CommandError;

/// Where `add` gets the dish's details from.
pub enum AddSource {
    /// Look the id up in a menu file.
    Menu(PathBuf),
    /// Details given on the command line.
    Manual {
        name: Option<String>,
        price: Option<Price>,
        image: String,
    },
}

/// Print the cart.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn show<S, N, L>(
    controller: &OrderController<S, N, L>,
    out: &mut impl Write,
) -> Result<(), CommandError>
where
    S: KeyValueStore,
    N: Notifier,
    L: Launcher,
{
    let messages = controller.config().messages();
    let currency = controller.config().currency();
    let view = controller.view();

    if view.is_empty() {
        writeln!(out, "{}", messages.cart_empty)?;
        return Ok(());
    }

    for item in &view.items {
        writeln!(
            out,
            "#{} {} — {} {currency} × {} = {} {currency}",
            item.id, item.name, item.price, item.quantity, item.line_price
        )?;
    }
    writeln!(out, "{}: {}", messages.items_label, view.item_count)?;
    writeln!(out, "{}: {} {currency}", messages.total_label, view.total_price)?;
    Ok(())
}

/// Add one unit of a dish and print the cart.
///
/// # Errors
///
/// Returns an error if the dish cannot be resolved or writing fails.
pub fn add<S, N, L>(
    controller: &mut OrderController<S, N, L>,
    id: ProductId,
    source: AddSource,
    out: &mut impl Write,
) -> Result<(), CommandError>
where
    S: KeyValueStore,
    N: Notifier,
    L: Launcher,
{
    let added = match source {
        AddSource::Menu(path) => {
            let menu = Menu::from_path(&path)?;
            controller.add_menu_item(menu.get(id)?)
        }
        AddSource::Manual { name, price, image } => {
            let name = name.ok_or(CommandError::MissingItemField("name"))?;
            let price = price.ok_or(CommandError::MissingItemField("price"))?;
            controller.add_item(id, name, price, image)
        }
    };

    if !added {
        return Err(CommandError::Disabled("Adding to the cart is disabled"));
    }
    tracing::info!(product_id = %id, "Added to cart");
    show(controller, out)
}

/// Change a line's quantity and print the cart.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn change_quantity<S, N, L>(
    controller: &mut OrderController<S, N, L>,
    id: ProductId,
    delta: i64,
    out: &mut impl Write,
) -> Result<(), CommandError>
where
    S: KeyValueStore,
    N: Notifier,
    L: Launcher,
{
    if controller.cart().get(id).is_none() {
        tracing::warn!(product_id = %id, "Not in the cart");
    }
    if !controller.change_quantity(id, delta) {
        return Err(CommandError::Disabled("Quantity changes are disabled"));
    }
    show(controller, out)
}

/// Remove a line and print the cart.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn remove<S, N, L>(
    controller: &mut OrderController<S, N, L>,
    id: ProductId,
    out: &mut impl Write,
) -> Result<(), CommandError>
where
    S: KeyValueStore,
    N: Notifier,
    L: Launcher,
{
    if !controller.remove_line(id) {
        return Err(CommandError::Disabled("Quantity changes are disabled"));
    }
    show(controller, out)
}

/// Empty the cart after confirmation.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn clear<S, N, L>(
    controller: &mut OrderController<S, N, L>,
    out: &mut impl Write,
) -> Result<(), CommandError>
where
    S: KeyValueStore,
    N: Notifier,
    L: Launcher,
{
    if controller.cart().is_empty() {
        writeln!(out, "{}", controller.config().messages().cart_empty)?;
        return Ok(());
    }

    if controller.clear_cart() {
        tracing::info!("Cart cleared");
    }
    show(controller, out)
}
