//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! Every mutation responds synchronously with the freshly rendered fragment
//! and a `cart-updated` trigger, so the count badge and any visible cart
//! table recompute before another control can fire - the rendered state
//! never drifts from the persisted slot.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    response::{AppendHeaders, IntoResponse},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use toko_core::{Cart, CartItem, Price};

use crate::cart::CartStore;
use crate::error::Result;
use crate::filters;

/// HTMX trigger emitted after every cart mutation.
pub const CART_UPDATED_TRIGGER: &str = "cart-updated";

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub image: Option<String>,
    pub price_label: String,
    pub quantity: u32,
    /// Target quantity for the decrement control, clamped to 1.
    pub dec_quantity: u32,
    /// Target quantity for the increment control.
    pub inc_quantity: u32,
    pub line_total: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total_label: String,
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_label: Price::ZERO.to_string(),
            item_count: 0,
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            total_label: cart.subtotal().to_string(),
            item_count: cart.total_items(),
        }
    }
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            image: item.image.clone(),
            price_label: item.price_label(),
            quantity: item.quantity,
            dec_quantity: item.quantity.saturating_sub(1).max(1),
            inc_quantity: item.quantity.saturating_add(1),
            line_total: item.line_total().to_string(),
        }
    }
}

// =============================================================================
// Form Types
// =============================================================================

/// Add to cart form data, carrying the product card's fields.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub id: String,
    pub name: String,
    pub price: u64,
    #[serde(default)]
    pub price_display: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub quantity: Option<u32>,
}

/// Update cart quantity form data.
///
/// Quantity arrives as raw text from the editable field; non-numeric input
/// parses to 0, which removes the item.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub id: String,
    pub quantity: String,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub id: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Transient notification fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/toast.html")]
pub struct ToastTemplate {
    pub message: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display cart page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> impl IntoResponse {
    let cart = CartStore::new(&session).load().await;
    CartShowTemplate {
        cart: CartView::from(&cart),
    }
}

/// Cart items fragment (HTMX), re-fetched on `cart-updated`.
#[instrument(skip(session))]
pub async fn items(session: Session) -> impl IntoResponse {
    let cart = CartStore::new(&session).load().await;
    CartItemsTemplate {
        cart: CartView::from(&cart),
    }
}

/// Add item to cart (HTMX).
///
/// Merges by product id into the persisted cart and responds with a toast;
/// the `cart-updated` trigger makes the badge recompute.
#[instrument(skip(session, form), fields(product_id = %form.id))]
pub async fn add(session: Session, Form(form): Form<AddToCartForm>) -> Result<impl IntoResponse> {
    let item = CartItem {
        id: form.id,
        name: form.name.clone(),
        price: Price::new(form.price),
        price_display: form.price_display,
        image: form.image,
        quantity: form.quantity.unwrap_or(1),
    };

    CartStore::new(&session).add(item).await?;

    Ok((
        AppendHeaders([("HX-Trigger", CART_UPDATED_TRIGGER)]),
        ToastTemplate {
            message: format!("{} ditambahkan ke keranjang", form.name),
        },
    ))
}

/// Update cart item quantity (HTMX).
///
/// Drives the stepper and the editable quantity field. A parsed quantity of
/// zero or below (including non-numeric input) removes the item.
#[instrument(skip(session, form), fields(product_id = %form.id))]
pub async fn update(
    session: Session,
    Form(form): Form<UpdateCartForm>,
) -> Result<impl IntoResponse> {
    let quantity = form.quantity.trim().parse::<i64>().unwrap_or(0);
    let cart = CartStore::new(&session)
        .set_quantity(&form.id, quantity)
        .await?;

    Ok((
        AppendHeaders([("HX-Trigger", CART_UPDATED_TRIGGER)]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    ))
}

/// Remove item from cart (HTMX). Confirmation happens client-side via
/// `hx-confirm` before the request is sent.
#[instrument(skip(session, form), fields(product_id = %form.id))]
pub async fn remove(
    session: Session,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<impl IntoResponse> {
    let cart = CartStore::new(&session).remove(&form.id).await?;

    Ok((
        AppendHeaders([("HX-Trigger", CART_UPDATED_TRIGGER)]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    ))
}

/// Clear the whole cart (HTMX), removing the persisted slot.
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Result<impl IntoResponse> {
    CartStore::new(&session).clear().await?;

    Ok((
        AppendHeaders([("HX-Trigger", CART_UPDATED_TRIGGER)]),
        CartItemsTemplate {
            cart: CartView::empty(),
        },
    ))
}

/// Cart count badge fragment (HTMX).
///
/// Safe to call at any time; the badge is a pure projection of the slot
/// and renders nothing at all when the count is zero.
#[instrument(skip(session))]
pub async fn count(session: Session) -> impl IntoResponse {
    let count = CartStore::new(&session).total_items().await;
    CartCountTemplate { count }
}
