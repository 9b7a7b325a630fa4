mod category;
mod product;

pub use category::CategoryTarget;
pub use product::{Product, PRODUCT_FIELDS};
