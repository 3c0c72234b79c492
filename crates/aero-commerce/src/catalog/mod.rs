//! Product catalog module.
//!
//! Contains the menu feed types: products, categories and the menu itself.

mod category;
mod menu;
mod product;

pub use category::Category;
pub use menu::Menu;
pub use product::Product;
