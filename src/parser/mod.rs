mod product_parser;
mod selectors;

#[cfg(test)]
mod tests;

pub use product_parser::{CardResult, ProductParser};
pub use selectors::ProductSelectors;
