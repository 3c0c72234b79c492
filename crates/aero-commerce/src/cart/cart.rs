//! Cart and line item types.

use crate::cart::{CartPricing, DeliveryMode, LineItemPricing};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{self, Money};
use serde::{Deserialize, Serialize, Serializer};

/// Name-only reference to the category a line item came from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryRef {
    pub name: String,
}

impl CategoryRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The product fields a cart needs when adding an item.
#[derive(Debug, Clone, PartialEq)]
pub struct CartProduct {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub image: Option<String>,
    pub category: CategoryRef,
    /// Minutes.
    pub preparation_time: u32,
}

impl From<&Product> for CartProduct {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            image: product.image.clone(),
            category: CategoryRef::new(product.category.name.clone()),
            preparation_time: product.preparation_time,
        }
    }
}

impl From<Product> for CartProduct {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            image: product.image,
            category: CategoryRef::new(product.category.name),
            preparation_time: product.preparation_time,
        }
    }
}

/// A product in the cart with its order-specific fields.
///
/// This is also the stored record shape, so fields serialize in camelCase
/// and the price as a decimal number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "money::decimal")]
    pub price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub category: CategoryRef,
    #[serde(default)]
    pub preparation_time: u32,
    /// Always >= 1 while the item is in a cart.
    pub quantity: u32,
    /// Customer note for the kitchen (e.g., "sem cebola").
    #[serde(default)]
    pub notes: String,
}

impl CartLineItem {
    /// Start a line item at quantity 1 with no notes.
    pub fn new(product: CartProduct) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            image: product.image,
            category: product.category,
            preparation_time: product.preparation_time,
            quantity: 1,
            notes: String::new(),
        }
    }

    /// price * quantity.
    pub fn line_total(&self) -> Money {
        self.price.multiply(i64::from(self.quantity))
    }
}

/// An ordered list of line items, at most one per product id.
///
/// Pure state with no I/O: see [`CartStore`](crate::cart::CartStore) for the
/// persisted version. Serializes as a bare JSON array and deserializes
/// through [`Cart::from_items`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(from = "Vec<CartLineItem>")]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl From<Vec<CartLineItem>> for Cart {
    fn from(items: Vec<CartLineItem>) -> Self {
        Self::from_items(items)
    }
}

impl Serialize for Cart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from stored items.
    ///
    /// Items with quantity 0 are dropped and repeated ids are folded into the
    /// first occurrence, so a hand-edited record cannot break the invariants.
    pub fn from_items(items: Vec<CartLineItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            if item.quantity == 0 {
                continue;
            }
            match cart.items.iter_mut().find(|i| i.id == item.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => cart.items.push(item),
            }
        }
        cart
    }

    /// Add one unit of a product.
    ///
    /// An existing line for the same id is incremented in place; otherwise a
    /// new line is appended with quantity 1 and empty notes.
    pub fn add(&mut self, product: impl Into<CartProduct>) -> &CartLineItem {
        let product = product.into();
        let index = match self.items.iter().position(|i| i.id == product.id) {
            Some(index) => {
                let existing = &mut self.items[index];
                existing.quantity = existing.quantity.saturating_add(1);
                index
            }
            None => {
                self.items.push(CartLineItem::new(product));
                self.items.len() - 1
            }
        };
        &self.items[index]
    }

    /// Change an item's quantity by `delta`.
    ///
    /// A resulting quantity <= 0 removes the line. Returns false for an
    /// unknown id.
    pub fn update_quantity(&mut self, id: &ProductId, delta: i64) -> bool {
        let Some(index) = self.items.iter().position(|i| &i.id == id) else {
            return false;
        };

        let new_quantity = i64::from(self.items[index].quantity).saturating_add(delta);
        if new_quantity > 0 {
            self.items[index].quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        } else {
            self.items.remove(index);
        }
        true
    }

    /// Replace an item's notes. Returns false for an unknown id.
    pub fn update_notes(&mut self, id: &ProductId, notes: impl Into<String>) -> bool {
        match self.items.iter_mut().find(|i| &i.id == id) {
            Some(item) => {
                item.notes = notes.into();
                true
            }
            None => false,
        }
    }

    /// Remove an item. Returns false for an unknown id.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        self.items.len() < len_before
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Sum of price * quantity over all lines.
    pub fn subtotal(&self) -> Money {
        Money::sum(self.items.iter().map(CartLineItem::line_total))
    }

    /// Subtotal plus the surcharge for `mode`.
    pub fn total_price(&self, mode: DeliveryMode) -> Money {
        self.subtotal().saturating_add(&mode.fee())
    }

    /// Full pricing breakdown for `mode`.
    pub fn calculate_pricing(&self, mode: DeliveryMode) -> CartPricing {
        let line_items = self
            .items
            .iter()
            .map(|item| LineItemPricing {
                product_id: item.id.clone(),
                unit_price: item.price,
                quantity: item.quantity,
                total: item.line_total(),
            })
            .collect();

        CartPricing {
            mode,
            subtotal: self.subtotal(),
            delivery_fee: mode.fee(),
            grand_total: self.total_price(mode),
            line_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn product(id: &str, price: f64) -> CartProduct {
        CartProduct {
            id: ProductId::new(id),
            name: format!("Pizza {}", id),
            description: String::new(),
            price: Money::from_decimal(price, Currency::BRL),
            image: None,
            category: CategoryRef::new("Pizzas"),
            preparation_time: 20,
        }
    }

    #[test]
    fn test_add_new_item() {
        let mut cart = Cart::new();
        let line = cart.add(product("p1", 30.0));
        assert_eq!(line.quantity, 1);
        assert_eq!(line.notes, "");
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::new();
        for _ in 0..3 {
            cart.add(product("p1", 30.0));
        }
        cart.add(product("p2", 10.0));

        assert_eq!(cart.unique_item_count(), 2);
        assert_eq!(cart.get(&ProductId::new("p1")).unwrap().quantity, 3);
        // Existing lines keep their position
        assert_eq!(cart.items()[0].id.as_str(), "p1");
        assert_eq!(cart.items()[1].id.as_str(), "p2");
    }

    #[test]
    fn test_update_quantity_in_place() {
        let mut cart = Cart::new();
        cart.add(product("p1", 30.0));
        assert!(cart.update_quantity(&ProductId::new("p1"), 4));
        assert_eq!(cart.item_count(), 5);
        assert!(cart.update_quantity(&ProductId::new("p1"), -2));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_update_quantity_to_zero_removes() {
        let mut cart = Cart::new();
        cart.add(product("p1", 30.0));
        cart.add(product("p1", 30.0));
        assert!(cart.update_quantity(&ProductId::new("p1"), -2));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_below_zero_removes() {
        let mut cart = Cart::new();
        cart.add(product("p1", 30.0));
        cart.add(product("p2", 30.0));
        assert!(cart.update_quantity(&ProductId::new("p1"), -10));
        assert!(cart.get(&ProductId::new("p1")).is_none());
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_update_quantity_extreme_delta() {
        let mut cart = Cart::new();
        cart.add(product("p1", 1.0));
        cart.update_quantity(&ProductId::new("p1"), i64::MAX);
        assert_eq!(cart.get(&ProductId::new("p1")).unwrap().quantity, u32::MAX);
        cart.update_quantity(&ProductId::new("p1"), i64::MIN);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(product("p1", 30.0));
        let before = cart.clone();

        let ghost = ProductId::new("ghost");
        assert!(!cart.update_quantity(&ghost, 1));
        assert!(!cart.update_notes(&ghost, "x"));
        assert!(!cart.remove(&ghost));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_update_notes() {
        let mut cart = Cart::new();
        cart.add(product("p1", 30.0));
        assert!(cart.update_notes(&ProductId::new("p1"), "<b>sem cebola</b>"));
        // Stored verbatim
        assert_eq!(cart.items()[0].notes, "<b>sem cebola</b>");
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.add(product("a", 10.0));
        cart.add(product("a", 10.0));
        cart.add(product("b", 5.0));

        assert_eq!(cart.total_price(DeliveryMode::Pickup).amount_cents, 2500);
        assert_eq!(cart.total_price(DeliveryMode::Delivery).amount_cents, 3300);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_empty_cart_delivery_total_is_fee() {
        let cart = Cart::new();
        assert_eq!(cart.total_price(DeliveryMode::Delivery).amount_cents, 800);
        assert!(cart.total_price(DeliveryMode::Pickup).is_zero());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_calculate_pricing() {
        let mut cart = Cart::new();
        cart.add(product("a", 12.5));
        cart.update_quantity(&ProductId::new("a"), 1);

        let pricing = cart.calculate_pricing(DeliveryMode::Delivery);
        assert_eq!(pricing.subtotal.amount_cents, 2500);
        assert_eq!(pricing.delivery_fee.amount_cents, 800);
        assert_eq!(pricing.grand_total.amount_cents, 3300);
        assert_eq!(pricing.line_items.len(), 1);
        assert_eq!(pricing.line_items[0].quantity, 2);
        assert_eq!(pricing.line_items[0].total.amount_cents, 2500);
    }

    #[test]
    fn test_from_items_restores_invariants() {
        let mut a = CartLineItem::new(product("a", 1.0));
        a.quantity = 2;
        let mut zero = CartLineItem::new(product("z", 1.0));
        zero.quantity = 0;
        let dup = CartLineItem::new(product("a", 1.0));

        let cart = Cart::from_items(vec![a, zero, dup]);
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
    }

    #[test]
    fn test_record_shape() {
        let mut cart = Cart::new();
        cart.add(product("p1", 42.0));
        cart.update_notes(&ProductId::new("p1"), "bem passada");

        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "id": "p1",
                "name": "Pizza p1",
                "description": "",
                "price": 42.0,
                "category": { "name": "Pizzas" },
                "preparationTime": 20,
                "quantity": 1,
                "notes": "bem passada"
            }])
        );
    }

    #[test]
    fn test_reads_record_written_by_web_frontend() {
        // Category carries an id there; notes may be missing on old records.
        let json = r#"[{"id":"p9","name":"Portuguesa","description":"Presunto e ovo",
            "price":44.9,"image":"/img/p9.png","category":{"id":"c1","name":"Pizzas"},
            "preparationTime":30,"quantity":2}]"#;

        let cart: Cart = serde_json::from_str(json).unwrap();
        let line = &cart.items()[0];
        assert_eq!(line.price.amount_cents, 4490);
        assert_eq!(line.image.as_deref(), Some("/img/p9.png"));
        assert_eq!(line.category.name, "Pizzas");
        assert_eq!(line.quantity, 2);
        assert_eq!(line.notes, "");
    }

    #[test]
    fn test_deserialized_cart_keeps_invariants() {
        let json = r#"[
            {"id":"a","name":"A","price":10.0,"category":{"name":"Pizzas"},"quantity":0},
            {"id":"b","name":"B","price":5.0,"category":{"name":"Pizzas"},"quantity":1},
            {"id":"a","name":"A","price":10.0,"category":{"name":"Pizzas"},"quantity":2},
            {"id":"b","name":"B","price":5.0,"category":{"name":"Pizzas"},"quantity":3}
        ]"#;

        let cart: Cart = serde_json::from_str(json).unwrap();
        assert_eq!(cart.unique_item_count(), 2);
        assert!(cart.items().iter().all(|i| i.quantity >= 1));
        assert_eq!(cart.items()[0].id.as_str(), "b");
        assert_eq!(cart.items()[0].quantity, 4);
        assert_eq!(cart.items()[1].id.as_str(), "a");
        assert_eq!(cart.items()[1].quantity, 2);
    }

    #[test]
    fn test_totals_count_every_line() {
        let mut cart = Cart::new();
        cart.add(product("a", 10.0));
        cart.add(product("b", 5.0));
        cart.add(product("c", 0.35));
        cart.update_quantity(&ProductId::new("c"), 2);

        let line_sum: i64 = cart
            .items()
            .iter()
            .map(|i| i.price.amount_cents * i64::from(i.quantity))
            .sum();
        assert_eq!(line_sum, 1605);
        assert_eq!(cart.total_price(DeliveryMode::Pickup).amount_cents, line_sum);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_saved_cart_reads_back_unchanged() {
        let mut cart = Cart::new();
        cart.add(product("a", 44.9));
        cart.add(product("b", 0.01));
        cart.add(product("b", 0.01));
        cart.update_notes(&ProductId::new("a"), "sem cebola");

        let json = serde_json::to_string(&cart).unwrap();
        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart);
        assert_eq!(back.total_price(DeliveryMode::Delivery), cart.total_price(DeliveryMode::Delivery));
    }
}
