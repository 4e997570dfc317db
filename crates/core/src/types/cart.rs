//! The cart collection and its mutation operations.
//!
//! A [`Cart`] is an ordered sequence of [`CartItem`]s, unique by product id,
//! with insertion order preserved (order is meaningful for display). All
//! mutations here are pure; the storefront drives them load-mutate-save
//! against the persisted session slot.
//!
//! # Invariants
//!
//! - No two items share an `id`.
//! - Every stored item has `quantity >= 1`; driving a quantity to zero or
//!   below removes the item instead.

use serde::{Deserialize, Serialize};

use super::price::Price;

/// A single entry in the cart.
///
/// Identity is the product `id`. The serialized field names match the
/// storefront's persisted layout (`priceDisplay`, not `price_display`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Stable product identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Unit price in whole Rupiah.
    pub price: Price,
    /// Pre-formatted price label; derived from `price` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_display: Option<String>,
    /// Product image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Units of this product in the cart. Always >= 1 while the item exists.
    pub quantity: u32,
}

impl CartItem {
    /// Unit price times quantity.
    #[must_use]
    pub const fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }

    /// The unit price label shown to the user.
    ///
    /// Uses the stored `price_display` when the product carried one,
    /// otherwise derives the `Rp`-formatted amount.
    #[must_use]
    pub fn price_label(&self) -> String {
        self.price_display
            .clone()
            .unwrap_or_else(|| self.price.to_string())
    }
}

/// The ordered cart collection.
///
/// Serializes transparently as a JSON array of items, which is also the
/// persisted representation in the session slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The items in display order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by product id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Add an item, merging by product id.
    ///
    /// If an item with the same `id` already exists its quantity increases
    /// by the incoming quantity (at least 1); every other field of the
    /// existing entry is left untouched - a duplicate add never refreshes
    /// name or price. New entries append, preserving insertion order, with
    /// quantity clamped to at least 1.
    pub fn add(&mut self, item: CartItem) {
        let quantity = item.quantity.max(1);
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(quantity),
            None => self.items.push(CartItem { quantity, ..item }),
        }
    }

    /// Remove the item with the given product id.
    ///
    /// An unknown id is a silent no-op. Returns whether an item was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Set the quantity of the item with the given product id.
    ///
    /// A quantity of zero or below removes the item; a non-positive
    /// quantity is never stored. An unknown id is a silent no-op. Returns
    /// whether the cart changed.
    pub fn set_quantity(&mut self, id: &str, quantity: i64) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        if quantity <= 0 {
            return self.remove(id);
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.quantity = quantity;
        }
        true
    }

    /// Total number of units across all items. Zero for an empty cart.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |sum, item| sum.saturating_add(item.quantity))
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn item(id: &str, price: u64, quantity: u32) -> CartItem {
        CartItem {
            id: id.to_owned(),
            name: format!("Produk {id}"),
            price: Price::new(price),
            price_display: None,
            image: None,
            quantity,
        }
    }

    #[test]
    fn test_add_merges_by_id() {
        let mut cart = Cart::new();
        cart.add(item("p1", 10_000, 1));
        cart.add(item("p1", 10_000, 2));

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.get("p1").unwrap().quantity, 3);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_duplicate_add_keeps_existing_fields() {
        let mut cart = Cart::new();
        cart.add(CartItem {
            price_display: Some("Rp10.000".to_owned()),
            ..item("p1", 10_000, 1)
        });

        // Same id, different price and name: the merge key is id only.
        let mut dup = item("p1", 99_999, 1);
        dup.name = "Produk lain".to_owned();
        cart.add(dup);

        let stored = cart.get("p1").unwrap();
        assert_eq!(stored.price, Price::new(10_000));
        assert_eq!(stored.name, "Produk p1");
        assert_eq!(stored.price_display.as_deref(), Some("Rp10.000"));
        assert_eq!(stored.quantity, 2);
    }

    #[test]
    fn test_add_defaults_zero_quantity_to_one() {
        let mut cart = Cart::new();
        cart.add(item("p1", 10_000, 0));
        assert_eq!(cart.get("p1").unwrap().quantity, 1);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add(item("b", 2_000, 1));
        cart.add(item("a", 1_000, 1));
        cart.add(item("b", 2_000, 1));

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn test_double_implicit_add_totals() {
        // Add {id:"p1", price:10000} twice with implicit quantity 1 each.
        let mut cart = Cart::new();
        cart.add(item("p1", 10_000, 1));
        cart.add(item("p1", 10_000, 1));

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.subtotal(), Price::new(20_000));
        assert_eq!(cart.subtotal().to_string(), "Rp20.000");
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(item("p1", 10_000, 2));

        let snapshot = cart.clone();
        assert!(!cart.remove("missing"));
        assert_eq!(cart, snapshot);
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add(item("p1", 10_000, 2));

        assert!(cart.set_quantity("p1", 0));
        assert!(cart.get("p1").is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_negative_removes() {
        let mut cart = Cart::new();
        cart.add(item("p1", 10_000, 2));

        assert!(cart.set_quantity("p1", -3));
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn test_set_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(item("p1", 10_000, 2));

        assert!(!cart.set_quantity("missing", 5));
        assert_eq!(cart.get("p1").unwrap().quantity, 2);
    }

    #[test]
    fn test_no_entry_ever_non_positive() {
        // Mixed operation sequence: total always equals the sum of
        // surviving quantities and no entry drops to zero or below.
        let mut cart = Cart::new();
        cart.add(item("a", 1_000, 1));
        cart.add(item("b", 2_000, 3));
        cart.set_quantity("a", 5);
        cart.add(item("a", 1_000, 1));
        cart.set_quantity("b", -1);
        cart.remove("missing");

        for entry in cart.items() {
            assert!(entry.quantity >= 1);
        }
        let expected: u32 = cart.items().iter().map(|i| i.quantity).sum();
        assert_eq!(cart.total_items(), expected);
        assert_eq!(cart.total_items(), 6);
    }

    #[test]
    fn test_line_total_and_price_label() {
        let mut entry = item("p1", 10_000, 3);
        assert_eq!(entry.line_total(), Price::new(30_000));
        assert_eq!(entry.price_label(), "Rp10.000");

        entry.price_display = Some("Rp 10rb".to_owned());
        assert_eq!(entry.price_label(), "Rp 10rb");
    }

    #[test]
    fn test_serde_round_trip_camel_case() {
        let mut cart = Cart::new();
        cart.add(CartItem {
            price_display: Some("Rp10.000".to_owned()),
            image: Some("/static/images/p1.jpg".to_owned()),
            ..item("p1", 10_000, 2)
        });

        let json = serde_json::to_string(&cart).unwrap();
        assert!(json.starts_with('['), "cart serializes as a bare array");
        assert!(json.contains("\"priceDisplay\":\"Rp10.000\""));

        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart);
    }

    #[test]
    fn test_deserialize_tolerates_missing_optionals() {
        let json = r#"[{"id":"p1","name":"Widget","price":10000,"quantity":1}]"#;
        let cart: Cart = serde_json::from_str(json).unwrap();
        assert_eq!(cart.get("p1").unwrap().price_label(), "Rp10.000");
        assert!(cart.get("p1").unwrap().image.is_none());
    }
}
