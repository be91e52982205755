use axum::extract::State;
use std::sync::Arc;

use crate::AppState;
use crate::utils::resolve_bundle;
use crate::views::{CatalogStatus, ListingPage, RenderContext};

/// Display the product listing.
///
/// Always renders. A failed catalog read is logged and shown as an
/// "unavailable" notice with status 503 instead of an empty 200 page.
pub async fn index(State(state): State<Arc<AppState>>, context: RenderContext) -> ListingPage {
    let bundle = resolve_bundle(context.locality.as_deref(), &state.default_locale);
    tracing::debug!("Rendering listing: locality={:?}, bundle={}", context.locality, bundle);

    let (products, catalog) = match state.catalog.list_all().await {
        Ok(products) => {
            for product in &products {
                tracing::trace!("{}", product.describe());
            }
            tracing::debug!("Retrieved {} products", products.len());
            (products, CatalogStatus::Available)
        },
        Err(err) => {
            tracing::error!("Failed to read product catalog: {}", err);
            (Vec::new(), CatalogStatus::Unavailable)
        },
    };

    ListingPage { products, context, bundle, catalog }
}
