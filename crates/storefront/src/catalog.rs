//! Menu catalog.
//!
//! The menu is trusted input: each item carries exactly the four fields the
//! cart copies when the item is added. Nothing beyond JSON shape is checked.

use std::path::Path;

use serde::{Deserialize, Serialize};
use teztayor_core::{Price, ProductId};
use thiserror::Error;

/// Errors from loading a menu.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read menu: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse menu: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Menu has no item {0}")]
    NotFound(ProductId),
}

/// One orderable dish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(rename = "img", alias = "image")]
    pub image: String,
}

/// The restaurant's menu, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    #[must_use]
    pub const fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Parse a menu from a JSON array of items.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` if the JSON does not describe a menu.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a menu from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let menu = Self::from_json(&content)?;
        tracing::debug!(path = %path.display(), items = menu.items.len(), "Menu loaded");
        Ok(menu)
    }

    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter()
    }

    /// Look up an item by id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the menu has no such item.
    pub fn get(&self, id: ProductId) -> Result<&MenuItem, CatalogError> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or(CatalogError::NotFound(id))
    }
}
