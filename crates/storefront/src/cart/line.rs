//! Cart contents and their saved form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use teztayor_core::{Price, ProductId};

/// One product's aggregated quantity in the cart.
///
/// Field names on the wire (`img`, `qty`) match carts saved by the browser
/// widget; the long spellings are accepted when reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(rename = "img", alias = "image")]
    pub image: String,
    #[serde(rename = "qty", alias = "quantity")]
    pub quantity: u32,
}

impl CartLine {
    /// `quantity × price`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price * self.quantity
    }
}

/// Item count and price over the whole cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub items: u64,
    pub price: Price,
}

impl Totals {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items == 0
    }
}

/// Mapping from product id to cart line.
///
/// Iteration is in ascending product id, which is also the order the browser
/// widget displayed its integer-keyed cart in.
///
/// Invariants: every line has `quantity >= 1`, and every line's `id` equals
/// its key. Only [`crate::CartStore`] mutates a cart.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cart {
    lines: BTreeMap<ProductId, CartLine>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines in display order.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    /// Total item count and total price.
    #[must_use]
    pub fn totals(&self) -> Totals {
        self.lines.values().fold(Totals::default(), |acc, line| Totals {
            items: acc.items.saturating_add(u64::from(line.quantity)),
            price: acc.price + line.line_total(),
        })
    }

    pub(crate) fn get_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.get_mut(&id)
    }

    pub(crate) fn insert(&mut self, line: CartLine) {
        debug_assert!(line.quantity >= 1);
        self.lines.insert(line.id, line);
    }

    pub(crate) fn remove(&mut self, id: ProductId) -> Option<CartLine> {
        self.lines.remove(&id)
    }

    pub(crate) fn clear(&mut self) {
        self.lines.clear();
    }

    // =========================================================================
    // Saved form
    // =========================================================================

    /// Serialize to the saved JSON form: an object keyed by product id.
    ///
    /// # Errors
    ///
    /// Returns an error only if serialization itself fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.lines)
    }

    /// Restore a cart from its saved JSON form.
    ///
    /// Entries that cannot hold in a live cart are dropped individually: a
    /// key that is not a product id, an `id` that disagrees with its key, a
    /// quantity below one, or fields of the wrong type.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a JSON object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(json)?;

        let lines = raw
            .into_iter()
            .filter_map(|(key, value)| match restore_line(&key, value) {
                Some(line) => Some((line.id, line)),
                None => {
                    tracing::debug!(key = %key, "Dropping unusable saved cart entry");
                    None
                }
            })
            .collect();

        Ok(Self { lines })
    }
}

/// A saved line as found on disk, before invariants are checked.
#[derive(Deserialize)]
struct SavedLine {
    id: Option<ProductId>,
    name: String,
    price: Price,
    #[serde(rename = "img", alias = "image", default)]
    image: String,
    #[serde(rename = "qty", alias = "quantity")]
    quantity: i64,
}

fn restore_line(key: &str, value: serde_json::Value) -> Option<CartLine> {
    let key_id = key.parse::<ProductId>().ok()?;
    let saved: SavedLine = serde_json::from_value(value).ok()?;

    if saved.id.is_some_and(|id| id != key_id) {
        return None;
    }

    let quantity = u32::try_from(saved.quantity).ok().filter(|q| *q >= 1)?;

    Some(CartLine {
        id: key_id,
        name: saved.name,
        price: saved.price,
        image: saved.image,
        quantity,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn line(id: i32, price: u32, quantity: u32) -> CartLine {
        CartLine {
            id: ProductId::new(id),
            name: format!("Dish {id}"),
            price: Price::from(price),
            image: format!("{id}.png"),
            quantity,
        }
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.insert(line(1, 250, 2));
        cart.insert(line(2, 30, 3));
        let totals = cart.totals();
        assert_eq!(totals.items, 5);
        assert_eq!(totals.price, Price::from(590));
    }

    #[test]
    fn test_empty_totals() {
        let totals = Cart::new().totals();
        assert!(totals.is_empty());
        assert_eq!(totals.price, Price::ZERO);
    }

    #[test]
    fn test_lines_in_id_order() {
        let mut cart = Cart::new();
        cart.insert(line(10, 1, 1));
        cart.insert(line(2, 1, 1));
        cart.insert(line(7, 1, 1));
        let ids: Vec<i32> = cart.lines().map(|l| l.id.as_i32()).collect();
        assert_eq!(ids, vec![2, 7, 10]);
    }

    #[test]
    fn test_saved_form_uses_browser_field_names() {
        let mut cart = Cart::new();
        cart.insert(line(1, 250, 2));
        let value: serde_json::Value = serde_json::from_str(&cart.to_json().unwrap()).unwrap();
        let entry = &value["1"];
        assert_eq!(entry["id"], 1);
        assert_eq!(entry["name"], "Dish 1");
        assert_eq!(entry["img"], "1.png");
        assert_eq!(entry["qty"], 2);
        assert_eq!(entry["price"].to_string(), "250");
    }

    #[test]
    fn test_restore_browser_cart() {
        let json = r#"{"3":{"id":3,"name":"Plov","price":45,"img":"img/plov.jpg","qty":2}}"#;
        let cart = Cart::from_json(json).unwrap();
        let plov = cart.get(ProductId::new(3)).unwrap();
        assert_eq!(plov.name, "Plov");
        assert_eq!(plov.quantity, 2);
        assert_eq!(plov.price, Price::from(45));
        assert_eq!(plov.image, "img/plov.jpg");
    }

    #[test]
    fn test_restore_accepts_long_field_names() {
        let json = r#"{"3":{"id":3,"name":"Plov","price":45,"image":"p.jpg","quantity":1}}"#;
        let cart = Cart::from_json(json).unwrap();
        assert_eq!(cart.totals().items, 1);
    }

    #[test]
    fn test_restore_drops_invalid_entries() {
        let json = r#"{
            "1": {"id": 1, "name": "Ok", "price": 10, "img": "a", "qty": 1},
            "2": {"id": 2, "name": "Zero", "price": 10, "img": "b", "qty": 0},
            "3": {"id": 3, "name": "Negative", "price": 10, "img": "c", "qty": -4},
            "4": {"id": 5, "name": "Mismatch", "price": 10, "img": "d", "qty": 1},
            "x": {"id": 6, "name": "BadKey", "price": 10, "img": "e", "qty": 1},
            "7": {"id": 7, "name": "BadPrice", "price": "cheap", "img": "f", "qty": 1},
            "8": "garbage"
        }"#;
        let cart = Cart::from_json(json).unwrap();
        assert_eq!(cart.len(), 1);
        assert!(cart.get(ProductId::new(1)).is_some());
    }

    #[test]
    fn test_restore_rejects_non_object() {
        assert!(Cart::from_json("[]").is_err());
        assert!(Cart::from_json("null").is_err());
        assert!(Cart::from_json("{").is_err());
    }

    #[test]
    fn test_roundtrip_is_identical() {
        let mut cart = Cart::new();
        cart.insert(line(1, 250, 2));
        cart.insert(CartLine {
            price: "12.5".parse().unwrap(),
            ..line(4, 0, 3)
        });
        let restored = Cart::from_json(&cart.to_json().unwrap()).unwrap();
        assert_eq!(restored, cart);
    }

    #[test]
    fn test_roundtrip_keeps_long_prices_exact() {
        let price: Price = "1234567890.123456789".parse().unwrap();
        let mut cart = Cart::new();
        cart.insert(CartLine {
            price,
            ..line(1, 0, 1)
        });

        let json = cart.to_json().unwrap();
        assert!(json.contains(r#""price":1234567890.123456789"#));

        let restored = Cart::from_json(&json).unwrap();
        assert_eq!(restored.get(ProductId::new(1)).unwrap().price, price);
        assert_eq!(restored, cart);
    }

    #[test]
    fn test_totals_saturate_instead_of_panicking() {
        let mut cart = Cart::new();
        cart.insert(CartLine {
            price: "100000000000000000000".parse().unwrap(),
            ..line(1, 0, u32::MAX)
        });
        cart.insert(line(2, 10, 1));

        let totals = cart.totals();
        assert_eq!(totals.items, u64::from(u32::MAX) + 1);
        assert_eq!(totals.price, Price::MAX);
    }
}
