use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shop and category lists shipped with the app.
const BUILTIN_CATALOG: &str = include_str!("../catalog.json");

/// Identifier of a shop in the catalog, as emitted by the shop select box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopId(pub u32);

/// Identifier of a category in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u32);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    pub id: ShopId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// Errors from loading a catalog document.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog has no {0}")]
    Empty(&'static str),
    #[error("duplicate {list} id {id}")]
    DuplicateId { list: &'static str, id: u32 },
    #[error("{list} {id} has a blank name")]
    BlankName { list: &'static str, id: u32 },
}

/// The fixed set of shops and categories a product can be filed under.
///
/// Loaded once at start and never edited by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    shops: Vec<Shop>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Parse the catalog embedded in the binary.
    ///
    /// Callers load it once and share clones.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        check_entries("shop", self.shops.iter().map(|s| (s.id.0, s.name.as_str())))?;
        check_entries(
            "category",
            self.categories.iter().map(|c| (c.id.0, c.name.as_str())),
        )
    }

    pub fn shops(&self) -> &[Shop] {
        &self.shops
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn shop(&self, id: ShopId) -> Option<&Shop> {
        self.shops.iter().find(|s| s.id == id)
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn shop_name(&self, id: ShopId) -> Option<&str> {
        self.shop(id).map(|s| s.name.as_str())
    }

    pub fn category_name(&self, id: CategoryId) -> Option<&str> {
        self.category(id).map(|c| c.name.as_str())
    }
}

fn check_entries<'a>(
    list: &'static str,
    entries: impl Iterator<Item = (u32, &'a str)>,
) -> Result<(), CatalogError> {
    let mut seen = BTreeSet::new();
    for (id, name) in entries {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId { list, id });
        }
        if name.trim().is_empty() {
            return Err(CatalogError::BlankName { list, id });
        }
    }
    if seen.is_empty() {
        return Err(CatalogError::Empty(list));
    }
    Ok(())
}
