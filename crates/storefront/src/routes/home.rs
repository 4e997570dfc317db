//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::catalog::Product;
use crate::filters;
use crate::state::AppState;

/// Product card display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: &'static str,
    pub name: &'static str,
    /// Raw price submitted by the add-to-cart form.
    pub price: u64,
    /// Formatted price shown on the card and stored as `priceDisplay`.
    pub price_label: String,
    pub image: &'static str,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price.amount(),
            price_label: product.price.to_string(),
            image: product.image,
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home/index.html")]
pub struct HomeTemplate {
    pub products: Vec<ProductCardView>,
}

/// Display the product grid.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    HomeTemplate {
        products: state
            .catalog()
            .all()
            .iter()
            .map(ProductCardView::from)
            .collect(),
    }
}
