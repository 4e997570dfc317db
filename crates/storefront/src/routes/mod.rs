//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                - Home page (product grid)
//! GET  /health          - Health check
//!
//! # Cart (HTMX fragments)
//! GET  /cart            - Cart page
//! GET  /cart/items      - Cart table fragment
//! POST /cart/add        - Add to cart (returns toast, triggers cart-updated)
//! POST /cart/update     - Set quantity (returns cart_items fragment)
//! POST /cart/remove     - Remove item (returns cart_items fragment)
//! POST /cart/clear      - Clear cart (returns cart_items fragment)
//! GET  /cart/count      - Cart count badge (fragment)
//!
//! # Checkout (HTMX fragments)
//! GET  /checkout        - Checkout modal with fresh order summary
//! POST /checkout        - Validate form; clear cart and toast on success
//! ```

pub mod cart;
pub mod checkout;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/items", get(cart::items))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout modal
        .route("/checkout", get(checkout::show).post(checkout::confirm))
}
