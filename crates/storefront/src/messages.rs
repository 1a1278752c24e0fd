//! User-facing texts.
//!
//! The widget ships in English and in the Russian wording the TezTayor page
//! uses. Every alert, prompt and summary line is looked up here so
//! the flows never hard-code a language.

use serde::{Deserialize, Serialize};

/// Language of the user-facing texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl Language {
    /// The text table for this language.
    #[must_use]
    pub const fn messages(self) -> &'static Messages {
        match self {
            Self::En => &EN,
            Self::Ru => &RU,
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ru" => Ok(Self::Ru),
            _ => Err(format!("unsupported language: {s}")),
        }
    }
}

/// One language's worth of texts.
#[derive(Debug)]
pub struct Messages {
    // Validation alerts
    pub invalid_name: &'static str,
    pub invalid_phone: &'static str,
    pub missing_address: &'static str,
    pub empty_cart: &'static str,

    // Prompts
    pub clear_cart_prompt: &'static str,
    pub confirm_order_header: &'static str,
    pub order_confirmed: &'static str,

    // Delivery labels
    pub pickup: &'static str,
    pub delivery: &'static str,

    // Summary field labels
    pub order_from: &'static str,
    pub name_label: &'static str,
    pub phone_label: &'static str,
    pub mode_label: &'static str,
    pub address_label: &'static str,
    pub items_label: &'static str,
    pub total_label: &'static str,

    // Cart view
    pub cart_empty: &'static str,

    /// Currency suffix used when none is configured.
    pub currency: &'static str,
}

const EN: Messages = Messages {
    invalid_name: "Name must contain only letters.",
    invalid_phone: "Phone must be 9 digits.",
    missing_address: "Please enter an address.",
    empty_cart: "The cart is empty!",
    clear_cart_prompt: "Clear the cart?",
    confirm_order_header: "Confirm order?",
    order_confirmed: "Your order is confirmed!",
    pickup: "Pickup",
    delivery: "Delivery",
    order_from: "Order from",
    name_label: "Name",
    phone_label: "Phone",
    mode_label: "Type",
    address_label: "Address",
    items_label: "Items",
    total_label: "Total",
    cart_empty: "The cart is empty.",
    currency: "somoni",
};

const RU: Messages = Messages {
    invalid_name: "Имя должно содержать только буквы.",
    invalid_phone: "Телефон 9 цифр.",
    missing_address: "Укажите адрес.",
    empty_cart: "Корзина пуста!",
    clear_cart_prompt: "Очистить корзину?",
    confirm_order_header: "Подтвердить заказ?",
    order_confirmed: "Ваш заказ подтверждён!",
    pickup: "Самовывоз",
    delivery: "Доставка",
    order_from: "Заказ из",
    name_label: "Имя",
    phone_label: "Телефон",
    mode_label: "Тип",
    address_label: "Адрес",
    items_label: "Количество блюд",
    total_label: "Итоговая сумма",
    cart_empty: "Корзина пуста.",
    currency: "сомони",
};
