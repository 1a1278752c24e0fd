//! Cart store.
//!
//! [`CartStore`] owns the [`Cart`], applies every mutation, writes the whole
//! cart back to its [`KeyValueStore`] and then notifies observers. Readers
//! never see a line with a quantity below one.
//!
//! # Persistence
//!
//! The cart is read once when the store is opened. A missing, unreadable or
//! malformed saved cart starts the session with an empty cart; the problem is
//! logged and never surfaced to the user. A failed write is logged and the
//! in-memory mutation stands.

mod line;
mod view;

pub use line::{Cart, CartLine, Totals};
pub use view::{CartItemView, CartView};

use teztayor_core::{Price, ProductId};

use crate::storage::KeyValueStore;

/// Receives the cart after each mutation has been persisted.
pub trait CartObserver {
    fn cart_changed(&mut self, cart: &Cart);
}

impl<F: FnMut(&Cart)> CartObserver for F {
    fn cart_changed(&mut self, cart: &Cart) {
        self(cart);
    }
}

/// The cart plus its persistence and change notification.
pub struct CartStore<S> {
    cart: Cart,
    store: S,
    key: String,
    observers: Vec<Box<dyn CartObserver>>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Open the cart saved under `key`, or start empty.
    pub fn open(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let cart = load(&store, &key);
        tracing::debug!(key = %key, lines = cart.len(), "Cart opened");

        Self {
            cart,
            store,
            key,
            observers: Vec::new(),
        }
    }

    /// Register an observer for subsequent mutations.
    pub fn subscribe(&mut self, observer: impl CartObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Add one unit of a product, creating its line if needed.
    pub fn add_item(
        &mut self,
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        image: impl Into<String>,
    ) {
        if let Some(line) = self.cart.get_mut(id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.cart.insert(CartLine {
                id,
                name: name.into(),
                price,
                image: image.into(),
                quantity: 1,
            });
        }

        tracing::debug!(product_id = %id, "Item added to cart");
        self.commit();
    }

    /// Adjust a line's quantity by `delta`, removing it at zero or below.
    ///
    /// Does nothing (and persists nothing) if the product is not in the cart.
    pub fn change_quantity(&mut self, id: ProductId, delta: i64) {
        let Some(line) = self.cart.get_mut(id) else {
            return;
        };

        let next = i64::from(line.quantity).saturating_add(delta);
        if next <= 0 {
            self.cart.remove(id);
            tracing::debug!(product_id = %id, "Line removed from cart");
        } else {
            line.quantity = u32::try_from(next).unwrap_or(u32::MAX);
            tracing::debug!(product_id = %id, quantity = line.quantity, "Line quantity changed");
        }

        self.commit();
    }

    /// Remove a line outright. Does nothing if the product is not in the cart.
    pub fn remove(&mut self, id: ProductId) {
        if self.cart.remove(id).is_some() {
            tracing::debug!(product_id = %id, "Line removed from cart");
            self.commit();
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.cart.clear();
        tracing::debug!("Cart cleared");
        self.commit();
    }

    #[must_use]
    pub fn totals(&self) -> Totals {
        self.cart.totals()
    }

    /// Lines in display order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<CartLine> {
        self.cart.lines().cloned().collect()
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartLine> {
        self.cart.get(id)
    }

    /// The backing key-value store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Persist, then notify observers.
    fn commit(&mut self) {
        match self.cart.to_json() {
            Ok(json) => {
                if let Err(e) = self.store.set(&self.key, &json) {
                    tracing::warn!(key = %self.key, "Failed to save cart: {e}");
                }
            }
            Err(e) => tracing::warn!("Failed to serialize cart: {e}"),
        }

        for observer in &mut self.observers {
            observer.cart_changed(&self.cart);
        }
    }
}

impl<S> std::fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("key", &self.key)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

fn load<S: KeyValueStore>(store: &S, key: &str) -> Cart {
    let saved = match store.get(key) {
        Ok(Some(saved)) => saved,
        Ok(None) => return Cart::new(),
        Err(e) => {
            tracing::warn!(key = %key, "Failed to read saved cart: {e}");
            return Cart::new();
        }
    };

    Cart::from_json(&saved).unwrap_or_else(|e| {
        tracing::warn!(key = %key, "Ignoring malformed saved cart: {e}");
        Cart::new()
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::storage::{MemoryStore, StorageError};

    fn pizza() -> (ProductId, &'static str, Price, &'static str) {
        (ProductId::new(1), "Pizza", Price::from(250), "p.png")
    }

    fn store_with_pizza(quantity: u32) -> CartStore<MemoryStore> {
        let mut store = CartStore::open(MemoryStore::new(), "cart");
        let (id, name, price, image) = pizza();
        for _ in 0..quantity {
            store.add_item(id, name, price, image);
        }
        store
    }

    #[test]
    fn test_add_item_creates_then_increments() {
        let store = store_with_pizza(2);
        let line = store.get(ProductId::new(1)).unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(
            store.totals(),
            Totals {
                items: 2,
                price: Price::from(500)
            }
        );
    }

    #[test]
    fn test_add_item_keeps_first_catalog_data() {
        let mut store = store_with_pizza(1);
        store.add_item(ProductId::new(1), "Renamed", Price::from(1), "x.png");
        let line = store.get(ProductId::new(1)).unwrap();
        assert_eq!(line.name, "Pizza");
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_change_quantity_missing_is_noop() {
        let mut store = CartStore::open(MemoryStore::new(), "cart");
        store.change_quantity(ProductId::new(9), 1);
        assert!(store.is_empty());
        assert_eq!(store.store().raw("cart"), None);
    }

    #[test]
    fn test_change_quantity_up_and_down() {
        let mut store = store_with_pizza(1);
        store.change_quantity(ProductId::new(1), 5);
        assert_eq!(store.totals().items, 6);
        store.change_quantity(ProductId::new(1), -2);
        assert_eq!(store.totals().items, 4);
    }

    #[test]
    fn test_decrement_to_zero_removes_line() {
        let mut store = store_with_pizza(3);
        store.change_quantity(ProductId::new(1), -3);
        assert!(store.get(ProductId::new(1)).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_decrement_below_zero_removes_line() {
        let mut store = store_with_pizza(3);
        store.change_quantity(ProductId::new(1), -4);
        assert!(store.is_empty());
        assert_eq!(store.totals(), Totals::default());
    }

    #[test]
    fn test_extreme_deltas_do_not_overflow() {
        let mut store = store_with_pizza(1);
        store.change_quantity(ProductId::new(1), i64::MAX);
        assert_eq!(store.get(ProductId::new(1)).unwrap().quantity, u32::MAX);
        store.change_quantity(ProductId::new(1), i64::MIN);
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut store = store_with_pizza(2);
        store.add_item(ProductId::new(2), "Tea", Price::from(10), "t.png");
        store.remove(ProductId::new(1));
        assert_eq!(store.snapshot().len(), 1);
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.store().raw("cart"), Some("{}"));
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let mut store = store_with_pizza(2);
        let saved = Cart::from_json(store.store().raw("cart").unwrap()).unwrap();
        assert_eq!(&saved, store.cart());

        store.change_quantity(ProductId::new(1), -1);
        let saved = Cart::from_json(store.store().raw("cart").unwrap()).unwrap();
        assert_eq!(saved.totals().items, 1);
    }

    #[test]
    fn test_reopen_restores_cart() {
        let store = store_with_pizza(2);
        let backing = store.store().clone();
        let reopened = CartStore::open(backing, "cart");
        assert_eq!(reopened.cart(), store.cart());
    }

    #[test]
    fn test_reopen_keeps_long_prices_exact() {
        let mut store = CartStore::open(MemoryStore::new(), "cart");
        let price: Price = "1234567890.123456789".parse().unwrap();
        store.add_item(ProductId::new(1), "X", price, "x");

        let reopened = CartStore::open(store.store().clone(), "cart");
        assert_eq!(reopened.get(ProductId::new(1)).unwrap().price, price);
        assert_eq!(reopened.cart(), store.cart());
    }

    #[test]
    fn test_huge_line_totals_do_not_panic() {
        let mut store = CartStore::open(MemoryStore::new(), "cart");
        let price: Price = "100000000000000000000".parse().unwrap();
        store.add_item(ProductId::new(1), "X", price, "x");
        store.change_quantity(ProductId::new(1), i64::MAX);

        let totals = store.totals();
        assert_eq!(totals.items, u64::from(u32::MAX));
        assert_eq!(totals.price, Price::MAX);
    }

    #[test]
    fn test_malformed_saved_cart_starts_empty() {
        for bad in ["not json", "[]", "null", "{\"1\":"] {
            let store = CartStore::open(MemoryStore::with_entry("cart", bad), "cart");
            assert!(store.is_empty(), "{bad:?} should give an empty cart");
        }
    }

    #[test]
    fn test_unreadable_store_starts_empty() {
        struct Broken;

        impl KeyValueStore for Broken {
            fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
                Err(std::io::Error::other("denied").into())
            }

            fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
                Err(std::io::Error::other("denied").into())
            }
        }

        let mut store = CartStore::open(Broken, "cart");
        assert!(store.is_empty());

        // Writes fail but the cart still changes in memory.
        let (id, name, price, image) = pizza();
        store.add_item(id, name, price, image);
        assert_eq!(store.totals().items, 1);
    }

    #[test]
    fn test_observers_see_persisted_state() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = CartStore::open(MemoryStore::new(), "cart");

        let log = Rc::clone(&seen);
        store.subscribe(move |cart: &Cart| log.borrow_mut().push(cart.totals().items));

        let (id, name, price, image) = pizza();
        store.add_item(id, name, price, image);
        store.add_item(id, name, price, image);
        store.change_quantity(id, -2);
        store.change_quantity(id, -1);

        // The last call was a no-op on a missing line.
        assert_eq!(*seen.borrow(), vec![1, 2, 0]);
    }

    #[test]
    fn test_totals_match_lines_after_mixed_operations() {
        let mut store = CartStore::open(MemoryStore::new(), "cart");
        let ops: [(i32, i64); 10] = [
            (1, 0),
            (2, 0),
            (1, 3),
            (3, 0),
            (2, -1),
            (3, 2),
            (1, -10),
            (4, 0),
            (3, -1),
            (4, 7),
        ];

        for (id, delta) in ops {
            let id = ProductId::new(id);
            if delta == 0 {
                store.add_item(id, "Dish", Price::from(5), "d.png");
            } else {
                store.change_quantity(id, delta);
            }

            let lines = store.snapshot();
            assert!(lines.iter().all(|l| l.quantity >= 1));
            let sum: u64 = lines.iter().map(|l| u64::from(l.quantity)).sum();
            assert_eq!(store.totals().items, sum);
        }

        let ids: Vec<i32> = store.snapshot().iter().map(|l| l.id.as_i32()).collect();
        assert_eq!(ids, vec![3, 4]);
        assert_eq!(store.totals().items, 10);
    }
}
