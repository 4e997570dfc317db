//! Built-in product catalog.
//!
//! The storefront sells a small fixed line-up, so the catalog is defined in
//! code and held on `AppState`. Each product carries exactly the fields the
//! add-to-cart form submits: id, name, price, and image.

use toko_core::Price;

/// A product available on the storefront.
#[derive(Debug, Clone, Copy)]
pub struct Product {
    /// Stable product identifier (also used as the cart merge key).
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Unit price in whole Rupiah.
    pub price: Price,
    /// Product image path under `/static`.
    pub image: &'static str,
}

const PRODUCTS: &[Product] = &[
    Product {
        id: "kopi-gayo",
        name: "Kopi Arabika Gayo 250g",
        price: Price::new(85_000),
        image: "/static/images/kopi-gayo.jpg",
    },
    Product {
        id: "batik-parang",
        name: "Kemeja Batik Parang",
        price: Price::new(250_000),
        image: "/static/images/batik-parang.jpg",
    },
    Product {
        id: "madu-hutan",
        name: "Madu Hutan Sumbawa 500ml",
        price: Price::new(120_000),
        image: "/static/images/madu-hutan.jpg",
    },
    Product {
        id: "keripik-singkong",
        name: "Keripik Singkong Balado",
        price: Price::new(15_000),
        image: "/static/images/keripik-singkong.jpg",
    },
    Product {
        id: "tas-rotan",
        name: "Tas Rotan Bali",
        price: Price::new(175_000),
        image: "/static/images/tas-rotan.jpg",
    },
    Product {
        id: "teh-melati",
        name: "Teh Melati Premium 100g",
        price: Price::new(45_000),
        image: "/static/images/teh-melati.jpg",
    },
];

/// The product catalog.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    products: &'static [Product],
}

impl Catalog {
    /// The built-in catalog.
    #[must_use]
    pub const fn builtin() -> Self {
        Self { products: PRODUCTS }
    }

    /// All products in display order.
    #[must_use]
    pub const fn all(&self) -> &'static [Product] {
        self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'static Product> {
        self.products.iter().find(|product| product.id == id)
    }
}
