pub mod error;
pub mod html;
pub mod i18n;

pub use error::{ApiError, ApiResult, LocalizedApiError};
pub use html::escape_html;
pub use i18n::{DEFAULT_LOCALE, normalize_locale, resolve_bundle};
