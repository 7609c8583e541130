//! Static Product Catalog
//!
//! The catalog holds the immutable product set for the session and answers
//! lookups by identifier. It is seeded once at startup and never mutated.

use std::fmt;

use super::models::{Category, Product};

/// Catalog lookup failure. Never fatal; callers log and carry on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No product with the given identifier exists
    NotFound(u32),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NotFound(id) => write!(f, "no product with id {}", id),
        }
    }
}

impl std::error::Error for CatalogError {}

/// The session-scoped universe of purchasable products.
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from an ordered product sequence. Iteration order
    /// of `all()` is the order given here.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Builds the catalog from the built-in seed data.
    pub fn seeded() -> Self {
        Self::new(seed_products())
    }

    /// Looks up a product by identifier.
    pub fn get(&self, id: u32) -> Result<&Product, CatalogError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound(id))
    }

    /// The full product sequence in seed order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }
}

/// The fixed category selector list shown in the storefront filter bar.
pub const CATEGORY_NAMES: [&str; 4] = ["All", "Electronics", "Fashion", "Home"];

fn product(
    id: u32,
    name: &str,
    price: f64,
    original_price: Option<f64>,
    category: Category,
    rating: f64,
    reviews: u32,
    description: &str,
    in_stock: bool,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
        original_price,
        category,
        rating,
        reviews,
        description: description.to_string(),
        in_stock,
        is_new: false,
        is_trending: false,
        badge: None,
    }
}

/// The static seed data supplied at session start.
fn seed_products() -> Vec<Product> {
    vec![
        Product {
            is_new: true,
            badge: Some("Premium".to_string()),
            ..product(
                1,
                "AirPods Pro Max",
                549.99,
                Some(599.99),
                Category::Electronics,
                4.8,
                2847,
                "Wireless headphones with computational audio for immersive sound",
                true,
            )
        },
        Product {
            is_trending: true,
            badge: Some("Bestseller".to_string()),
            ..product(
                2,
                "Apple Watch Ultra",
                799.99,
                None,
                Category::Electronics,
                4.9,
                1923,
                "The most rugged and capable Apple Watch, designed for adventure",
                true,
            )
        },
        Product {
            badge: Some("Smart Home".to_string()),
            ..product(
                3,
                "Smart Coffee Machine",
                299.99,
                Some(349.99),
                Category::Home,
                4.6,
                756,
                "AI-powered brewing with app control and custom recipes",
                false,
            )
        },
        Product {
            is_new: true,
            is_trending: true,
            ..product(
                4,
                "Nike Air Zoom",
                179.99,
                None,
                Category::Fashion,
                4.7,
                3241,
                "Revolutionary running shoes with responsive Zoom Air technology",
                true,
            )
        },
        Product {
            badge: Some("Pro Series".to_string()),
            ..product(
                5,
                "Peak Design Backpack",
                259.99,
                None,
                Category::Fashion,
                4.8,
                892,
                "Professional camera backpack with modular organization",
                true,
            )
        },
        Product {
            badge: Some("Luxury".to_string()),
            ..product(
                6,
                "Bang & Olufsen Speaker",
                499.99,
                Some(599.99),
                Category::Electronics,
                4.9,
                1456,
                "Luxury wireless speaker with 360-degree sound and premium design",
                true,
            )
        },
        Product {
            is_new: true,
            badge: Some("Latest".to_string()),
            ..product(
                7,
                "MacBook Pro M3",
                1999.99,
                None,
                Category::Electronics,
                4.9,
                5632,
                "Supercharged by M3 chip for extraordinary performance",
                true,
            )
        },
        Product {
            is_trending: true,
            ..product(
                8,
                "Designer Sunglasses",
                299.99,
                Some(399.99),
                Category::Fashion,
                4.5,
                423,
                "Polarized lenses with titanium frame and UV protection",
                true,
            )
        },
    ]
}
