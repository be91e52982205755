use std::convert::Infallible;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

/// Per-request data for the view layer.
///
/// Lives in the request extensions. The locale middleware creates it on
/// demand; handlers that find none get an empty context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    /// Locality token copied verbatim from the `language` cookie
    pub locality: Option<String>,
}

#[async_trait]
impl<S> FromRequestParts<S> for RenderContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<RenderContext>().cloned().unwrap_or_default())
    }
}
