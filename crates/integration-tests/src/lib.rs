//! Integration tests for TezTayor.
//!
//! The tests drive [`OrderController`] end to end with in-process hosts:
//! a notifier that answers confirmations from a script and a launcher that
//! records the links it is asked to open.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p teztayor-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `ordering_flow` - Manual confirmation and messaging hand-off
//! - `validation` - Order form rules and their alerts
//! - `persistence` - Saved carts across controller instances

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::VecDeque;

use rust_decimal::Decimal;
use teztayor_core::{Price, ProductId};
use teztayor_storefront::checkout::HandoffError;
use teztayor_storefront::{
    FormField, KeyValueStore, Launcher, Menu, MenuItem, Notifier, OrderController,
    StorefrontConfig,
};
use url::Url;

/// Records every notification and answers confirmations in order.
///
/// Once the script runs out every confirmation is declined.
#[derive(Debug, Default)]
pub struct ScriptedNotifier {
    answers: VecDeque<bool>,
    pub alerts: Vec<String>,
    pub prompts: Vec<String>,
    pub focused: Vec<FormField>,
}

impl ScriptedNotifier {
    #[must_use]
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl Notifier for ScriptedNotifier {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.prompts.push(message.to_string());
        self.answers.pop_front().unwrap_or(false)
    }

    fn focus(&mut self, field: FormField) {
        self.focused.push(field);
    }
}

/// Records opened links instead of opening them.
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    pub opened: Vec<Url>,
}

impl Launcher for RecordingLauncher {
    fn launch(&mut self, url: &Url) -> Result<(), HandoffError> {
        self.opened.push(url.clone());
        Ok(())
    }
}

/// Controller type used throughout the tests.
pub type TestController<S> = OrderController<S, ScriptedNotifier, RecordingLauncher>;

/// Build a controller with the default configuration over `store`.
#[must_use]
pub fn controller<S: KeyValueStore>(store: S, answers: &[bool]) -> TestController<S> {
    OrderController::new(
        StorefrontConfig::default(),
        store,
        ScriptedNotifier::answering(answers),
        RecordingLauncher::default(),
    )
}

/// A small menu: Pizza (250), Plov (45) and Green tea (7.5).
#[must_use]
pub fn sample_menu() -> Menu {
    Menu::new(vec![
        item(1, "Pizza", Price::from(250), "img/pizza.jpg"),
        item(2, "Plov", Price::from(45), "img/plov.jpg"),
        item(3, "Green tea", Price::new(Decimal::new(75, 1)), "img/tea.jpg"),
    ])
}

fn item(id: i32, name: &str, price: Price, image: &str) -> MenuItem {
    MenuItem {
        id: ProductId::new(id),
        name: name.to_string(),
        price,
        image: image.to_string(),
    }
}
