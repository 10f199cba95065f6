//! Content catalog
//!
//! The menu, contact and about documents are parsed once at startup and shared
//! read-only by every page and JSON endpoint. A copy of `content/` is compiled
//! into the binary; `CONTENT_DIR` points the site at an on-disk copy instead.

use std::path::Path;

use include_dir::{Dir, include_dir};
use serde::de::DeserializeOwned;
use shared::models::{
    AboutContent, ContactDocument, ContactInfo, FEATURED_LIMIT, Menu, MenuCategory, MenuItem,
    Restaurant,
};
use shared::{AppError, AppResult};

static BUNDLED: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/content");

pub const MENU_DOCUMENT: &str = "menu.json";
pub const CONTACT_DOCUMENT: &str = "contact.json";
pub const ABOUT_DOCUMENT: &str = "about.json";

/// Immutable site content
#[derive(Debug, Clone)]
pub struct Catalog {
    menu: Menu,
    contact: ContactDocument,
    about: AboutContent,
}

impl Catalog {
    pub fn new(menu: Menu, contact: ContactDocument, about: AboutContent) -> Self {
        Self {
            menu,
            contact,
            about,
        }
    }

    /// Parse the content compiled into the binary
    pub fn bundled() -> AppResult<Self> {
        let read = |name: &str| -> AppResult<&'static str> {
            BUNDLED
                .get_file(name)
                .and_then(|f| f.contents_utf8())
                .ok_or_else(|| AppError::content_load(name, "missing from bundle"))
        };

        Ok(Self {
            menu: parse(MENU_DOCUMENT, read(MENU_DOCUMENT)?)?,
            contact: parse(CONTACT_DOCUMENT, read(CONTACT_DOCUMENT)?)?,
            about: parse(ABOUT_DOCUMENT, read(ABOUT_DOCUMENT)?)?,
        })
    }

    /// Load the three documents from a directory
    pub fn load_dir(dir: &Path) -> AppResult<Self> {
        let read = |name: &str| -> AppResult<String> {
            std::fs::read_to_string(dir.join(name))
                .map_err(|e| AppError::content_load(name, e))
        };

        Ok(Self {
            menu: parse(MENU_DOCUMENT, &read(MENU_DOCUMENT)?)?,
            contact: parse(CONTACT_DOCUMENT, &read(CONTACT_DOCUMENT)?)?,
            about: parse(ABOUT_DOCUMENT, &read(ABOUT_DOCUMENT)?)?,
        })
    }

    /// Bundled content unless a directory is given
    pub fn load(dir: Option<&Path>) -> AppResult<Self> {
        let catalog = match dir {
            Some(dir) => Self::load_dir(dir)?,
            None => Self::bundled()?,
        };
        let source = dir
            .map(|d| d.display().to_string())
            .unwrap_or_else(|| "bundled".into());
        tracing::info!(
            source = %source,
            categories = catalog.menu.categories.len(),
            items = catalog.menu.items().count(),
            "Content catalog loaded"
        );
        Ok(catalog)
    }

    // === Read-only accessors ===

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn categories(&self) -> &[MenuCategory] {
        &self.menu.categories
    }

    pub fn category(&self, id: &str) -> AppResult<&MenuCategory> {
        self.menu
            .category(id)
            .ok_or_else(|| AppError::category_not_found(id))
    }

    pub fn item(&self, id: &str) -> AppResult<&MenuItem> {
        self.menu
            .item(id)
            .ok_or_else(|| AppError::menu_item_not_found(id))
    }

    /// All items in catalog order
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.menu.items()
    }

    /// The home page selection: first three popular items in catalog order
    pub fn featured_items(&self) -> Vec<&MenuItem> {
        self.menu.featured(FEATURED_LIMIT)
    }

    pub fn contact_document(&self) -> &ContactDocument {
        &self.contact
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact.contact
    }

    pub fn restaurant(&self) -> &Restaurant {
        &self.contact.restaurant
    }

    pub fn about(&self) -> &AboutContent {
        &self.about
    }
}

fn parse<T: DeserializeOwned>(name: &str, raw: &str) -> AppResult<T> {
    serde_json::from_str(raw).map_err(|e| AppError::content_load(name, e))
}
