//! Server-rendered pages.
//!
//! Pages are plain structs that know how to render themselves into HTML in a
//! resolved locale bundle and implement `IntoResponse`.

mod context;
mod listing;

pub use context::RenderContext;
pub use listing::{CatalogStatus, ListingPage};
