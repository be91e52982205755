//! Catalog seeding from a JSON file.
//!
//! The file holds an array of `{ "name": ..., "price": ... }` objects.

use anyhow::Context;
use std::path::Path;

use crate::models::CreateProductRequest;
use crate::services::ProductService;

pub fn parse_seed(content: &str) -> Result<Vec<CreateProductRequest>, anyhow::Error> {
    serde_json::from_str(content).context("Seed file must be a JSON array of products")
}

/// Import every product in `path`. Nothing is written if any record is invalid.
pub async fn seed_from_file(service: &ProductService, path: &Path) -> Result<usize, anyhow::Error> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;

    let products = parse_seed(&content)?;
    tracing::info!("Seeding {} products from {}", products.len(), path.display());

    let imported = service
        .import_products(products)
        .await
        .with_context(|| format!("Failed to import {}", path.display()))?;

    Ok(imported)
}
