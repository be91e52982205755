pub mod product;

pub use product::{CreateProductRequest, Product, ProductResponse, format_price};
