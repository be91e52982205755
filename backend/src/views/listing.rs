use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use rust_i18n::t;

use crate::models::Product;
use crate::utils::escape_html;
use crate::utils::i18n::LOCALE_NAMES;
use crate::views::RenderContext;

/// Outcome of the catalog read behind a listing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogStatus {
    Available,
    Unavailable,
}

/// The product listing served at `/`
#[derive(Debug, Clone)]
pub struct ListingPage {
    pub products: Vec<Product>,
    pub context: RenderContext,
    /// Bundle the page is rendered in, already resolved from the locality
    pub bundle: &'static str,
    pub catalog: CatalogStatus,
}

impl ListingPage {
    pub fn status_code(&self) -> StatusCode {
        match self.catalog {
            CatalogStatus::Available => StatusCode::OK,
            CatalogStatus::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn render(&self) -> String {
        let locale = self.bundle;
        let mut html = String::with_capacity(2048);

        html.push_str("<!DOCTYPE html>\n");
        html.push_str(&format!("<html lang=\"{}\">\n", locale));
        html.push_str("<head>\n<meta charset=\"utf-8\">\n");
        html.push_str(&format!(
            "<title>{}</title>\n",
            escape_html(&t!("storefront.title", locale = locale))
        ));
        html.push_str("<link rel=\"stylesheet\" href=\"/css/app.css\">\n</head>\n");

        match &self.context.locality {
            Some(locality) => {
                html.push_str(&format!("<body data-locality=\"{}\">\n", escape_html(locality)))
            },
            None => html.push_str("<body>\n"),
        }

        html.push_str("<header>\n");
        html.push_str(&format!(
            "<h1>{}</h1>\n",
            escape_html(&t!("storefront.heading", locale = locale))
        ));
        html.push_str(&self.render_language_switcher());
        html.push_str("</header>\n<main>\n");

        match self.catalog {
            CatalogStatus::Unavailable => html.push_str(&format!(
                "<p class=\"notice notice-error\" role=\"alert\">{}</p>\n",
                escape_html(&t!("storefront.unavailable", locale = locale))
            )),
            CatalogStatus::Available if self.products.is_empty() => html.push_str(&format!(
                "<p class=\"notice\">{}</p>\n",
                escape_html(&t!("storefront.empty", locale = locale))
            )),
            CatalogStatus::Available => {
                html.push_str(&format!(
                    "<p class=\"count\">{}</p>\n",
                    escape_html(&t!("storefront.count", locale = locale, count = self.products.len()))
                ));
                html.push_str("<ul class=\"products\">\n");
                for product in &self.products {
                    html.push_str(&self.render_product(product));
                }
                html.push_str("</ul>\n");
            },
        }

        html.push_str("</main>\n</body>\n</html>\n");
        html
    }

    fn render_language_switcher(&self) -> String {
        let mut nav = format!(
            "<nav class=\"languages\"><span>{}:</span>",
            escape_html(&t!("storefront.language", locale = self.bundle))
        );
        for (code, name) in LOCALE_NAMES {
            let class = if *code == self.bundle { " class=\"active\"" } else { "" };
            nav.push_str(&format!(" <a href=\"/setlanguage/{}\"{}>{}</a>", code, class, name));
        }
        nav.push_str("</nav>\n");
        nav
    }

    fn render_product(&self, product: &Product) -> String {
        let name = match &product.name {
            Some(name) => escape_html(name),
            None => escape_html(&t!("storefront.unnamed", locale = self.bundle)),
        };
        let price = match product.formatted_price() {
            Some(price) => price,
            None => escape_html(&t!("storefront.no_price", locale = self.bundle)),
        };
        format!(
            "<li class=\"product\" data-id=\"{}\"><span class=\"product-name\">{}</span> <span class=\"product-price\">{}</span></li>\n",
            product.id, name, price
        )
    }
}

impl IntoResponse for ListingPage {
    fn into_response(self) -> Response {
        (self.status_code(), Html(self.render())).into_response()
    }
}
