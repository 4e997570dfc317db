//! Checkout route handlers.
//!
//! Opening checkout always rebuilds the order summary from a fresh cart
//! load, so the modal reflects the cart at the moment of opening. The
//! confirm form must validate before anything happens to the cart; on
//! success the cart slot is cleared, the badge recomputes via
//! `cart-updated`, and the modal is dismissed with a thank-you toast.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    http::StatusCode,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use toko_core::Cart;

use crate::cart::CartStore;
use crate::error::Result;
use crate::routes::cart::CART_UPDATED_TRIGGER;

/// Fallback customer name for the success message.
const GENERIC_CUSTOMER: &str = "Pelanggan";

/// One line of the read-only order summary.
#[derive(Clone)]
pub struct SummaryLineView {
    pub name: String,
    pub line_total: String,
}

/// The read-only order summary: (name, line total) pairs plus grand total.
///
/// Built only for non-empty carts; an empty cart renders the empty-cart
/// message instead and never reaches the confirm path.
#[derive(Clone)]
pub struct SummaryView {
    pub lines: Vec<SummaryLineView>,
    pub total_label: String,
}

impl SummaryView {
    /// Build the summary from a freshly loaded cart. `None` when empty.
    #[must_use]
    pub fn build(cart: &Cart) -> Option<Self> {
        if cart.is_empty() {
            return None;
        }
        Some(Self {
            lines: cart
                .items()
                .iter()
                .map(|item| SummaryLineView {
                    name: item.name.clone(),
                    line_total: item.line_total().to_string(),
                })
                .collect(),
            total_label: cart.subtotal().to_string(),
        })
    }
}

/// Checkout form data.
#[derive(Debug, Default, Deserialize)]
pub struct CheckoutForm {
    /// Customer name; optional, the success message falls back to a
    /// generic label.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
}

/// Per-field validation messages for the checkout form.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CheckoutErrors {
    pub email: Option<&'static str>,
    pub address: Option<&'static str>,
}

impl CheckoutErrors {
    /// Whether validation passed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.email.is_none() && self.address.is_none()
    }
}

/// Validate the checkout form. The cart is untouched on failure.
fn validate(form: &CheckoutForm) -> CheckoutErrors {
    let mut errors = CheckoutErrors::default();

    if !is_valid_email(form.email.trim()) {
        errors.email = Some("Masukkan alamat email yang valid.");
    }
    if form.address.trim().is_empty() {
        errors.address = Some("Alamat pengiriman wajib diisi.");
    }

    errors
}

/// Basic structural email validation.
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let Some(local) = parts.next() else {
        return false;
    };
    let Some(domain) = parts.next() else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && domain.contains('.')
}

// =============================================================================
// Templates
// =============================================================================

/// Checkout modal fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/checkout_modal.html")]
pub struct CheckoutModalTemplate {
    pub summary: Option<SummaryView>,
    pub form: CheckoutForm,
    pub errors: CheckoutErrors,
}

/// Checkout success fragment: dismisses the modal and swaps in the toast.
#[derive(Template, WebTemplate)]
#[template(path = "partials/checkout_success.html")]
pub struct CheckoutSuccessTemplate {
    pub message: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Open the checkout modal (HTMX).
#[instrument(skip(session))]
pub async fn show(session: Session) -> impl IntoResponse {
    let cart = CartStore::new(&session).load().await;
    CheckoutModalTemplate {
        summary: SummaryView::build(&cart),
        form: CheckoutForm::default(),
        errors: CheckoutErrors::default(),
    }
}

/// Confirm checkout (HTMX).
///
/// Validation failure re-renders the modal with inline feedback (422) and
/// leaves the cart unchanged. Success clears the cart slot, triggers the
/// badge refresh, and dismisses the modal with a success toast.
#[instrument(skip(session, form))]
pub async fn confirm(session: Session, Form(form): Form<CheckoutForm>) -> Result<Response> {
    let store = CartStore::new(&session);
    let cart = store.load().await;

    // An empty cart never enters the confirm path.
    if cart.is_empty() {
        return Ok(CheckoutModalTemplate {
            summary: None,
            form: CheckoutForm::default(),
            errors: CheckoutErrors::default(),
        }
        .into_response());
    }

    let errors = validate(&form);
    if !errors.is_empty() {
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            CheckoutModalTemplate {
                summary: SummaryView::build(&cart),
                form,
                errors,
            },
        )
            .into_response());
    }

    store.clear().await?;

    let name = form.name.trim();
    let name = if name.is_empty() { GENERIC_CUSTOMER } else { name };
    tracing::info!(customer = %name, "checkout confirmed, cart cleared");

    Ok((
        AppendHeaders([("HX-Trigger", CART_UPDATED_TRIGGER)]),
        CheckoutSuccessTemplate {
            message: format!("Terima kasih {name}, pesanan Anda berhasil."),
        },
    )
        .into_response())
}
