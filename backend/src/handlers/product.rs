use axum::{Json, extract::State};
use std::sync::Arc;

use crate::AppState;
use crate::models::ProductResponse;
use crate::utils::{LocalizedApiError, resolve_bundle};
use crate::views::RenderContext;

// List all products
#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "All products in the catalog", body = Vec<ProductResponse>),
        (status = 503, description = "Catalog unavailable")
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    context: RenderContext,
) -> Result<Json<Vec<ProductResponse>>, LocalizedApiError> {
    tracing::debug!("Listing all products");

    let bundle = resolve_bundle(context.locality.as_deref(), &state.default_locale);
    let products = state.catalog.list_all().await.map_err(|err| err.localized(bundle))?;

    tracing::debug!("Retrieved {} products", products.len());
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}
