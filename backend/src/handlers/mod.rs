pub mod language;
pub mod product;
pub mod storefront;
