//! Shopping cart module.
//!
//! Contains the cart, its line items, pricing, and the persisted store.

mod cart;
mod pricing;
mod store;

pub use cart::{Cart, CartLineItem, CartProduct, CategoryRef};
pub use pricing::{CartPricing, DeliveryMode, LineItemPricing, DELIVERY_FEE_CENTS};
pub use store::{CartStore, CART_STORAGE_KEY};
