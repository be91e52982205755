pub mod locale;

pub use locale::{LANGUAGE_COOKIE, locale_middleware};
