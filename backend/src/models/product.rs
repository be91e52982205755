use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Display price: `$` followed by the price rounded to two decimals.
    /// `None` when the record carries no price.
    pub fn formatted_price(&self) -> Option<String> {
        self.price.map(format_price)
    }

    /// Human-readable sentence for debug logging.
    pub fn describe(&self) -> String {
        match (&self.name, self.price) {
            (Some(name), Some(price)) => {
                format!("Hello, I'm a {} and I'm worth ${}", name, price)
            },
            (Some(name), None) => format!("Hello, I'm a {} and I don't have a price yet", name),
            (None, _) => "I don't have a name :(".to_string(),
        }
    }
}

/// `$` plus the price rounded to two decimals, ties rounding up.
pub fn format_price(price: f64) -> String {
    let Some(cents) = round_to_cents(price.abs()) else {
        return format!("${:.2}", price);
    };
    let sign = if price < 0.0 && cents > 0.0 { "-" } else { "" };
    format!("${}{:.2}", sign, cents / 100.0)
}

/// Round a non-negative amount to whole cents on its exact binary value.
/// `{:.2}` alone would send exact ties such as 0.125 to the even neighbour.
fn round_to_cents(value: f64) -> Option<f64> {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return None;
    }

    // scaled + residual is the exact product
    let residual = value.mul_add(100.0, -scaled);
    let whole = scaled.floor();
    let fraction = scaled - whole;

    let round_up = fraction > 0.5 || (fraction == 0.5 && residual >= 0.0);
    Some(if round_up { whole + 1.0 } else { whole })
}

/// Product as exposed by the JSON API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: i64,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub formatted_price: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let formatted_price = product.formatted_price();
        Self { id: product.id, name: product.name, price: product.price, formatted_price }
    }
}

/// Ingestion payload; the only way products enter the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: f64,
}
