//! Storefront: a small localized product listing.
//!
//! Requests pass through the locale middleware, which copies the `language`
//! cookie into a per-request [`views::RenderContext`], then reach handlers
//! that read the catalog through [`services::ProductCatalog`] and render a
//! page in the matching bundle.

use axum::{Router, middleware::from_fn, routing::get};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod cli;
pub mod config;
pub mod db;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod models;
pub mod seed;
pub mod server;
pub mod services;
pub mod utils;
pub mod views;

#[cfg(test)]
mod tests;

rust_i18n::i18n!("locales", fallback = "en");

use crate::config::StaticConfig;
use crate::services::ProductCatalog;

/// Shared state handed to every handler.
pub struct AppState {
    pub catalog: Arc<dyn ProductCatalog>,
    /// Bundle used when the request has no usable locality
    pub default_locale: String,
}

impl AppState {
    pub fn new(catalog: Arc<dyn ProductCatalog>, default_locale: impl Into<String>) -> Self {
        Self { catalog, default_locale: default_locale.into() }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(handlers::product::list_products),
    components(schemas(models::ProductResponse)),
    tags((name = "Products", description = "Product catalog"))
)]
pub struct ApiDoc;

/// Build the application router.
///
/// Static assets, when enabled, are the fallback for unmatched paths and sit
/// outside the locale middleware.
pub fn build_router(state: Arc<AppState>, static_config: &StaticConfig) -> Router {
    let app = Router::new()
        .route("/", get(handlers::storefront::index))
        .route("/setlanguage/:lang", get(handlers::language::set_language))
        .route("/api/products", get(handlers::product::list_products))
        .layer(from_fn(middleware::locale_middleware))
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if static_config.enabled {
        tracing::info!("Serving static assets from {}", static_config.web_root);
        app.fallback_service(ServeDir::new(&static_config.web_root))
    } else {
        app
    }
}
