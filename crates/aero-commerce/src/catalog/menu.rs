//! The menu: an ordered list of products.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Products in menu order.
///
/// Serializes as a bare JSON array of [`Product`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Menu {
    products: Vec<Product>,
}

impl Menu {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse a menu from its JSON feed.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product that can be added to a cart right now.
    pub fn orderable(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        let product = self
            .get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))?;
        if !product.is_available() {
            return Err(CommerceError::ProductUnavailable(id.to_string()));
        }
        Ok(product)
    }

    /// Category names in the order they first appear.
    pub fn category_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for product in &self.products {
            let name = product.category.name.as_str();
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Products listed under the category named `name` (case-insensitive).
    pub fn in_category<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Product> + 'a {
        self.products
            .iter()
            .filter(move |p| p.category.name.eq_ignore_ascii_case(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
