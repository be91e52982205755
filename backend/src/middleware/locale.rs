//! Locale resolution middleware
//!
//! Picks up the `language` cookie and publishes it into the request's
//! rendering context, where the view layer selects a bundle from it.

use axum::{extract::Request, http::Extensions, middleware::Next, response::Response};
use axum_extra::extract::CookieJar;

use crate::views::RenderContext;

/// Cookie carrying the visitor's language preference
pub const LANGUAGE_COOKIE: &str = "language";

/// Middleware to copy the language cookie into the rendering context
pub async fn locale_middleware(jar: CookieJar, mut req: Request, next: Next) -> Response {
    apply_language_cookie(&jar, req.extensions_mut());
    next.run(req).await
}

/// Set `RenderContext::locality` from the cookie, creating the context if
/// needed. A missing or empty cookie leaves the extensions untouched.
pub fn apply_language_cookie(jar: &CookieJar, extensions: &mut Extensions) {
    let Some(language) = jar.get(LANGUAGE_COOKIE).map(|cookie| cookie.value()) else {
        return;
    };
    if language.is_empty() {
        return;
    }

    tracing::trace!("Request locality from cookie: {}", language);

    match extensions.get_mut::<RenderContext>() {
        Some(context) => context.locality = Some(language.to_string()),
        None => {
            extensions.insert(RenderContext { locality: Some(language.to_string()) });
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_extra::extract::cookie::Cookie;

    fn jar_with(value: &str) -> CookieJar {
        CookieJar::new().add(Cookie::new(LANGUAGE_COOKIE, value.to_string()))
    }

    #[test]
    fn test_cookie_sets_locality() {
        for value in ["fr", "en-US", "zz", "not a locale!"] {
            let mut extensions = Extensions::new();
            apply_language_cookie(&jar_with(value), &mut extensions);

            let context = extensions.get::<RenderContext>().expect("context created");
            assert_eq!(context.locality.as_deref(), Some(value));
        }
    }

    #[test]
    fn test_missing_cookie_leaves_extensions_untouched() {
        let mut extensions = Extensions::new();
        apply_language_cookie(&CookieJar::new(), &mut extensions);
        assert!(extensions.get::<RenderContext>().is_none());

        let other = CookieJar::new().add(Cookie::new("session", "abc"));
        apply_language_cookie(&other, &mut extensions);
        assert!(extensions.get::<RenderContext>().is_none());
    }

    #[test]
    fn test_empty_cookie_is_ignored() {
        let mut extensions = Extensions::new();
        apply_language_cookie(&jar_with(""), &mut extensions);
        assert!(extensions.get::<RenderContext>().is_none());

        let mut extensions = Extensions::new();
        extensions.insert(RenderContext { locality: Some("de".to_string()) });
        apply_language_cookie(&jar_with(""), &mut extensions);
        assert_eq!(
            extensions.get::<RenderContext>().and_then(|c| c.locality.as_deref()),
            Some("de")
        );
    }

    #[test]
    fn test_existing_context_is_updated() {
        let mut extensions = Extensions::new();
        extensions.insert(RenderContext { locality: Some("de".to_string()) });

        apply_language_cookie(&jar_with("es"), &mut extensions);

        assert_eq!(
            extensions.get::<RenderContext>().and_then(|c| c.locality.as_deref()),
            Some("es")
        );
    }
}
