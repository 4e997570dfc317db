//! Session-backed cart persistence.
//!
//! The cart lives in one named slot of the browser's session record,
//! serialized as a JSON array of items. [`CartStore`] wraps the session and
//! owns the slot: loading (absent or malformed data reads as an empty
//! cart), overwriting, and clearing. The mutation drivers here all follow
//! the same discipline - reload the slot, apply one pure [`Cart`] operation,
//! re-save - so no handler ever mutates a cached copy.
//!
//! Handlers that save or clear must emit the `cart-updated` HTMX trigger so
//! the count badge recomputes; see `routes::cart`.

use tower_sessions::Session;
use tracing::instrument;

use toko_core::{Cart, CartItem};

/// Session key holding the serialized cart.
pub const CART_SLOT_KEY: &str = "cart";

/// Errors from the underlying session store (e.g. database unreachable).
pub type SlotError = tower_sessions::session::Error;

/// The persistent cart store for one browser session.
///
/// Constructed per request from the extracted [`Session`]; holds no cart
/// state of its own.
pub struct CartStore<'a> {
    session: &'a Session,
}

impl<'a> CartStore<'a> {
    /// Wrap a session.
    #[must_use]
    pub const fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Load the cart from the slot.
    ///
    /// Never fails: an absent slot reads as an empty cart, and a malformed
    /// stored value is logged and likewise treated as empty.
    pub async fn load(&self) -> Cart {
        match self.session.get::<Cart>(CART_SLOT_KEY).await {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "malformed cart slot, treating as empty");
                Cart::new()
            }
        }
    }

    /// Overwrite the slot with the given cart.
    ///
    /// # Errors
    ///
    /// Returns `SlotError` if the session store cannot be written.
    pub async fn save(&self, cart: &Cart) -> Result<(), SlotError> {
        self.session.insert(CART_SLOT_KEY, cart).await
    }

    /// Remove the slot entirely.
    ///
    /// Distinct from saving an empty cart at the storage level, though
    /// `load` treats both identically.
    ///
    /// # Errors
    ///
    /// Returns `SlotError` if the session store cannot be written.
    pub async fn clear(&self) -> Result<(), SlotError> {
        // Remove as a raw value: a malformed slot must still be clearable.
        self.session
            .remove::<serde_json::Value>(CART_SLOT_KEY)
            .await
            .map(|_| ())
    }

    /// Add an item (merging by product id) and persist.
    ///
    /// Returns the cart after the mutation.
    ///
    /// # Errors
    ///
    /// Returns `SlotError` if the session store cannot be written.
    #[instrument(skip(self, item), fields(product_id = %item.id))]
    pub async fn add(&self, item: CartItem) -> Result<Cart, SlotError> {
        let mut cart = self.load().await;
        cart.add(item);
        self.save(&cart).await?;
        Ok(cart)
    }

    /// Remove the item with the given product id and persist.
    ///
    /// An unknown id leaves the cart unchanged; the unchanged cart is still
    /// re-saved, which is a harmless no-op write.
    ///
    /// # Errors
    ///
    /// Returns `SlotError` if the session store cannot be written.
    #[instrument(skip(self))]
    pub async fn remove(&self, id: &str) -> Result<Cart, SlotError> {
        let mut cart = self.load().await;
        cart.remove(id);
        self.save(&cart).await?;
        Ok(cart)
    }

    /// Set the quantity of the item with the given product id and persist.
    ///
    /// A quantity of zero or below removes the item; an unknown id is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns `SlotError` if the session store cannot be written.
    #[instrument(skip(self))]
    pub async fn set_quantity(&self, id: &str, quantity: i64) -> Result<Cart, SlotError> {
        let mut cart = self.load().await;
        cart.set_quantity(id, quantity);
        self.save(&cart).await?;
        Ok(cart)
    }

    /// Total number of units in the cart. Zero for empty or absent.
    pub async fn total_items(&self) -> u32 {
        self.load().await.total_items()
    }
}
