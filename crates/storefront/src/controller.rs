//! Order controller: the widget's event handlers as plain method calls.
//!
//! [`OrderController`] owns the cart store and the modal state and talks to
//! the host through two injected capabilities:
//!
//! - [`Notifier`] - alerts, yes/no confirmations and field focus
//! - [`Launcher`] - opens a messaging hand-off link
//!
//! # Completion flows
//!
//! - [`OrderController::submit_order`] validates, asks for confirmation and,
//!   on accept, clears the cart, closes checkout and cart and acknowledges.
//! - [`OrderController::send_to_messenger`] validates (including a non-empty
//!   cart), then hands the summary to the messaging app. The cart is kept:
//!   the order is not complete until the restaurant answers in the chat.

use teztayor_core::{Price, ProductId};
use url::Url;

use crate::cart::{CartStore, CartView};
use crate::catalog::MenuItem;
use crate::checkout::{
    HandoffError, HandoffTarget, OrderForm, OrderRequest, OrderValidator, Submission,
    SummaryFormatter,
};
use crate::config::StorefrontConfig;
use crate::error::{CheckoutError, FormField, OrderError};
use crate::storage::KeyValueStore;
use crate::ui::{Controls, Modal, UiCoordinator};

/// Blocking user notifications supplied by the host.
pub trait Notifier {
    /// Show a message and wait for it to be dismissed.
    fn alert(&mut self, message: &str);

    /// Ask a yes/no question; `true` means accepted.
    fn confirm(&mut self, message: &str) -> bool;

    /// Move input focus to a form field.
    fn focus(&mut self, _field: FormField) {}
}

/// Opens messaging hand-off links.
pub trait Launcher {
    /// Open `url` in a new browsing context (or the host's equivalent).
    ///
    /// # Errors
    ///
    /// Returns `HandoffError::Launch` if the link cannot be opened.
    fn launch(&mut self, url: &Url) -> Result<(), HandoffError>;
}

/// Result of a manual order submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The customer accepted the summary; the cart has been cleared.
    Confirmed(OrderRequest),
    /// The customer declined; nothing changed.
    Declined,
}

/// Cart, modals and order flows of one widget instance.
pub struct OrderController<S, N, L> {
    config: StorefrontConfig,
    cart: CartStore<S>,
    ui: UiCoordinator,
    notifier: N,
    launcher: L,
}

impl<S, N, L> OrderController<S, N, L>
where
    S: KeyValueStore,
    N: Notifier,
    L: Launcher,
{
    /// Create a controller, restoring the cart saved under `config.cart_key`.
    pub fn new(config: StorefrontConfig, store: S, notifier: N, launcher: L) -> Self {
        let cart = CartStore::open(store, config.cart_key.clone());
        Self {
            config,
            cart,
            ui: UiCoordinator::new(),
            notifier,
            launcher,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    #[must_use]
    pub const fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    /// Mutable access for registering observers.
    pub const fn cart_mut(&mut self) -> &mut CartStore<S> {
        &mut self.cart
    }

    #[must_use]
    pub const fn ui(&self) -> &UiCoordinator {
        &self.ui
    }

    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    #[must_use]
    pub const fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Current enablement of the cart controls.
    #[must_use]
    pub fn controls(&self) -> Controls {
        self.ui.controls(self.cart.is_empty())
    }

    /// Display data for the cart modal.
    #[must_use]
    pub fn view(&self) -> CartView {
        CartView::from(self.cart.cart())
    }

    // =========================================================================
    // Modals
    // =========================================================================

    pub fn open(&mut self, modal: Modal) {
        self.ui.open(modal);
    }

    pub fn close(&mut self, modal: Modal) {
        self.ui.close(modal);
    }

    pub fn click_backdrop(&mut self, modal: Modal) {
        self.ui.click_backdrop(modal);
    }

    pub fn escape(&mut self) {
        self.ui.escape();
    }

    /// The checkout button: opens the order form if checkout is enabled.
    pub fn begin_checkout(&mut self) -> bool {
        if !self.controls().checkout {
            tracing::debug!("Checkout ignored: control disabled");
            return false;
        }
        self.ui.open(Modal::Checkout);
        true
    }

    // =========================================================================
    // Cart controls
    // =========================================================================

    /// An "add to cart" click. Returns `false` if the control is disabled.
    pub fn add_item(
        &mut self,
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        image: impl Into<String>,
    ) -> bool {
        if !self.controls().add_to_cart {
            tracing::debug!(product_id = %id, "Add ignored: controls locked");
            return false;
        }
        self.cart.add_item(id, name, price, image);
        true
    }

    /// Add one unit of a menu item.
    pub fn add_menu_item(&mut self, item: &MenuItem) -> bool {
        self.add_item(item.id, item.name.clone(), item.price, item.image.clone())
    }

    /// A +/- click on a cart line. Returns `false` if the control is disabled.
    pub fn change_quantity(&mut self, id: ProductId, delta: i64) -> bool {
        if !self.controls().quantity {
            tracing::debug!(product_id = %id, "Quantity change ignored: controls locked");
            return false;
        }
        self.cart.change_quantity(id, delta);
        true
    }

    /// Drop a whole line. Returns `false` if the control is disabled.
    pub fn remove_line(&mut self, id: ProductId) -> bool {
        if !self.controls().quantity {
            tracing::debug!(product_id = %id, "Remove ignored: controls locked");
            return false;
        }
        self.cart.remove(id);
        true
    }

    /// The clear button: asks for confirmation, then empties the cart.
    ///
    /// Returns `true` if the cart was cleared.
    pub fn clear_cart(&mut self) -> bool {
        if !self.controls().clear {
            tracing::debug!("Clear ignored: control disabled");
            return false;
        }

        if !self.notifier.confirm(self.config.messages().clear_cart_prompt) {
            return false;
        }

        self.cart.clear();
        true
    }

    // =========================================================================
    // Completion flows
    // =========================================================================

    /// Submit the order form for local confirmation.
    ///
    /// # Errors
    ///
    /// Returns the validation failure after alerting the user and focusing
    /// the offending field. Cart and modals are left untouched.
    pub fn submit_order(&mut self, form: &OrderForm<'_>) -> Result<SubmitOutcome, OrderError> {
        let order = self.validate(form, Submission::Manual, true)?;

        let formatter = SummaryFormatter::new(
            &self.config.shop_name,
            self.config.currency(),
            self.config.messages(),
        );

        if !self.notifier.confirm(&formatter.confirmation_text(&order)) {
            tracing::info!("Order declined at confirmation");
            return Ok(SubmitOutcome::Declined);
        }

        self.cart.clear();
        self.ui.close(Modal::Checkout);
        self.ui.close(Modal::Cart);
        self.notifier
            .alert(&formatter.acknowledgment_text(&order.totals));

        tracing::info!(
            items = order.totals.items,
            total = %order.totals.price,
            mode = %order.delivery_mode,
            "Order confirmed"
        );
        Ok(SubmitOutcome::Confirmed(order))
    }

    /// Hand the order to the messaging app.
    ///
    /// Returns the link that was opened. The cart is not cleared.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::Invalid` (after alerting the user) if
    /// validation fails, in which case no link is built, or
    /// `CheckoutError::Handoff` if the link cannot be built or opened.
    pub fn send_to_messenger(&mut self, form: &OrderForm<'_>) -> Result<Url, CheckoutError> {
        let order = self.validate(form, Submission::Handoff, false)?;

        let text = SummaryFormatter::new(
            &self.config.shop_name,
            self.config.currency(),
            self.config.messages(),
        )
        .message_text(&order);

        let url = HandoffTarget::from_config(&self.config.messaging).url(&text)?;
        self.launcher.launch(&url)?;

        tracing::info!(
            items = order.totals.items,
            total = %order.totals.price,
            destination = %self.config.messaging.destination,
            "Order handed off to messenger"
        );
        Ok(url)
    }

    fn validate(
        &mut self,
        form: &OrderForm<'_>,
        submission: Submission,
        focus_field: bool,
    ) -> Result<OrderRequest, OrderError> {
        let validator =
            OrderValidator::new(&self.config.country_prefix, self.config.messages());

        validator
            .validate(form, self.cart.totals(), submission)
            .inspect_err(|e| {
                tracing::debug!(?submission, "Order rejected: {e}");
                self.notifier.alert(e.message(self.config.messages()));
                if focus_field {
                    if let Some(field) = e.field() {
                        self.notifier.focus(field);
                    }
                }
            })
    }
}

impl<S, N, L> std::fmt::Debug for OrderController<S, N, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderController")
            .field("config", &self.config)
            .field("cart", &self.cart)
            .field("ui", &self.ui)
            .finish_non_exhaustive()
    }
}
