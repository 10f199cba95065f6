//! Menu Model

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of dishes shown in the home page "Featured Dishes" strip
pub const FEATURED_LIMIT: usize = 3;

/// Menu item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price in the restaurant's currency (dollars, not cents)
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Image reference (site-relative path)
    pub image: String,
    #[serde(default)]
    pub popular: bool,
    /// Dietary tags in display order ("Vegetarian", "Gluten-Free", ...)
    #[serde(default)]
    pub dietary: Vec<String>,
}

impl MenuItem {
    /// Price formatted for display, e.g. `$12.50`
    pub fn display_price(&self) -> String {
        let rounded = self
            .price
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("${:.2}", rounded)
    }

    pub fn has_dietary(&self, tag: &str) -> bool {
        self.dietary.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// Menu category entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Items in display order
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// The menu document (`menu.json`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    /// Categories in display order
    pub categories: Vec<MenuCategory>,
}

impl Menu {
    /// Every item across all categories, in catalog order
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.categories.iter().flat_map(|c| c.items.iter())
    }

    /// First `limit` popular items in catalog order
    ///
    /// Returns fewer than `limit` items when the catalog holds fewer popular ones.
    pub fn featured(&self, limit: usize) -> Vec<&MenuItem> {
        self.items().filter(|item| item.popular).take(limit).collect()
    }

    pub fn category(&self, id: &str) -> Option<&MenuCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn item(&self, id: &str) -> Option<&MenuItem> {
        self.items().find(|item| item.id == id)
    }
}
