use axum::{
    extract::Path,
    http::{StatusCode, header},
    response::IntoResponse,
};
use axum_extra::extract::{CookieJar, cookie::Cookie};

use crate::middleware::LANGUAGE_COOKIE;

/// Remember the visitor's language and send them back to the listing.
///
/// The code is stored as given; bundle selection happens at render time.
pub async fn set_language(jar: CookieJar, Path(lang): Path<String>) -> impl IntoResponse {
    tracing::debug!("Switching language to {}", lang);

    let cookie = Cookie::build((LANGUAGE_COOKIE, lang)).path("/");

    (StatusCode::FOUND, jar.add(cookie), [(header::LOCATION, "/")])
}
