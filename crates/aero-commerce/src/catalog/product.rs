//! Product as served by the menu.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::{self, Money};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Field names serialize in camelCase to match the menu feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Description shown on the menu card.
    #[serde(default)]
    pub description: String,
    /// Unit price.
    #[serde(with = "money::decimal")]
    pub price: Money,
    /// Image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Category this product is listed under.
    pub category: Category,
    /// Preparation time in minutes.
    #[serde(default)]
    pub preparation_time: u32,
    /// Whether the product can currently be ordered.
    #[serde(default = "default_available")]
    pub available: bool,
    /// Free-text ingredient list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    /// Highlighted on the menu.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_popular: Option<bool>,
    /// Average customer rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

fn default_available() -> bool {
    true
}

impl Product {
    /// Check if the product is available for ordering.
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Check if the product is flagged as popular.
    pub fn is_popular(&self) -> bool {
        self.is_popular.unwrap_or(false)
    }
}
