pub mod category;
pub mod product_id;

pub use category::{Category, CategoryFilter, MENU_CATEGORIES};
pub use product_id::ProductId;
