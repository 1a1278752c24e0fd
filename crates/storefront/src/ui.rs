//! Modal visibility and control enablement.
//!
//! Each modal is open or closed independently. Cart-mutating controls are
//! locked exactly while the checkout modal is open, so every way of closing
//! checkout (close button, backdrop click, Escape, cancel, a confirmed order)
//! unlocks them again.

use teztayor_core::DeliveryMode;

/// The widget's modal dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modal {
    Cart,
    Checkout,
    About,
    Contact,
}

impl Modal {
    pub const ALL: [Self; 4] = [Self::Cart, Self::Checkout, Self::About, Self::Contact];
}

/// Enablement of the cart-mutating controls.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    /// Menu "add to cart" buttons.
    pub add_to_cart: bool,
    /// The +/- buttons on each cart line.
    pub quantity: bool,
    pub clear: bool,
    pub checkout: bool,
}

/// Tracks which modals are open.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiCoordinator {
    cart: bool,
    checkout: bool,
    about: bool,
    contact: bool,
}

impl UiCoordinator {
    /// All modals closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_open(&self, modal: Modal) -> bool {
        match modal {
            Modal::Cart => self.cart,
            Modal::Checkout => self.checkout,
            Modal::About => self.about,
            Modal::Contact => self.contact,
        }
    }

    const fn slot(&mut self, modal: Modal) -> &mut bool {
        match modal {
            Modal::Cart => &mut self.cart,
            Modal::Checkout => &mut self.checkout,
            Modal::About => &mut self.about,
            Modal::Contact => &mut self.contact,
        }
    }

    pub fn open(&mut self, modal: Modal) {
        *self.slot(modal) = true;
        tracing::debug!(?modal, "Modal opened");
    }

    pub fn close(&mut self, modal: Modal) {
        *self.slot(modal) = false;
        tracing::debug!(?modal, "Modal closed");
    }

    /// A click on a modal's backdrop, outside its content, closes it.
    pub fn click_backdrop(&mut self, modal: Modal) {
        self.close(modal);
    }

    /// The Escape key closes every modal.
    pub fn escape(&mut self) {
        *self = Self::default();
        tracing::debug!("All modals closed");
    }

    /// Whether cart-mutating controls are locked.
    #[must_use]
    pub const fn cart_locked(&self) -> bool {
        self.is_open(Modal::Checkout)
    }

    /// Current enablement of the cart controls.
    ///
    /// Clear and checkout also stay disabled while the cart is empty.
    #[must_use]
    pub const fn controls(&self, cart_is_empty: bool) -> Controls {
        let unlocked = !self.cart_locked();
        Controls {
            add_to_cart: unlocked,
            quantity: unlocked,
            clear: unlocked && !cart_is_empty,
            checkout: unlocked && !cart_is_empty,
        }
    }

    /// Whether the order form shows its address field.
    #[must_use]
    pub const fn address_visible(mode: DeliveryMode) -> bool {
        mode.requires_address()
    }
}
