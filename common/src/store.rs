use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::product::{IdGenerator, Product, ProductDraft, ProductId};

/// Informational signals raised by list transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Every product on a non-empty list has just become bought.
    ShoppingComplete,
}

/// Result of a successful add.
#[derive(Debug, Clone)]
pub struct Added {
    pub list: ShoppingList,
    pub product: Product,
}

/// Result of a toggle. `notice` is set only on the transition into all-bought.
#[derive(Debug, Clone)]
pub struct Toggled {
    pub list: ShoppingList,
    pub notice: Option<Notice>,
}

/// Counts shown above the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListSummary {
    pub total: usize,
    pub bought: usize,
    pub remaining: usize,
}

/// Snapshot of the shopping list in display order.
///
/// Transitions never mutate a snapshot; they return the next one. Ids are
/// unique and insertion order is preserved by every transition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingList {
    products: Vec<Product>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == *id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    /// True when the list is non-empty and nothing is left to buy.
    pub fn all_bought(&self) -> bool {
        !self.products.is_empty() && self.products.iter().all(|p| p.is_bought)
    }

    pub fn summary(&self) -> ListSummary {
        let bought = self.products.iter().filter(|p| p.is_bought).count();
        ListSummary {
            total: self.products.len(),
            bought,
            remaining: self.products.len() - bought,
        }
    }

    /// Append a product built from the draft.
    ///
    /// Returns `None` and leaves the draft untouched when the name is blank or
    /// the shop or category is unset or unknown to the catalog. On success the
    /// draft is cleared.
    pub fn add(
        &self,
        draft: &mut ProductDraft,
        catalog: &Catalog,
        ids: &mut IdGenerator,
    ) -> Option<Added> {
        let name = draft.name.trim();
        if name.is_empty() {
            tracing::debug!("add ignored: blank product name");
            return None;
        }
        let Some(shop) = draft.shop.and_then(|id| catalog.shop_name(id)) else {
            tracing::debug!("add ignored: no shop selected ({:?})", draft.shop);
            return None;
        };
        let Some(category) = draft.category.and_then(|id| catalog.category_name(id)) else {
            tracing::debug!("add ignored: no category selected ({:?})", draft.category);
            return None;
        };

        let product = Product {
            id: ids.fresh_id(|candidate| self.contains(candidate)),
            name: name.to_string(),
            shop: shop.to_string(),
            category: category.to_string(),
            is_bought: false,
        };

        let mut products = self.products.clone();
        products.push(product.clone());
        draft.clear();

        Some(Added {
            list: ShoppingList { products },
            product,
        })
    }

    /// Flip the bought flag of `id`. Unknown ids leave the list unchanged.
    pub fn toggle_bought(&self, id: &ProductId) -> Toggled {
        if !self.contains(id) {
            tracing::debug!("toggle ignored: unknown product {id}");
            return Toggled {
                list: self.clone(),
                notice: None,
            };
        }

        let was_complete = self.all_bought();
        let products = self
            .products
            .iter()
            .map(|p| {
                if p.id == *id {
                    Product {
                        is_bought: !p.is_bought,
                        ..p.clone()
                    }
                } else {
                    p.clone()
                }
            })
            .collect();
        let list = ShoppingList { products };

        let notice = if !was_complete && list.all_bought() {
            tracing::info!("all {} products bought", list.len());
            Some(Notice::ShoppingComplete)
        } else {
            None
        };

        Toggled { list, notice }
    }

    /// Remove `id`. Unknown ids leave the list unchanged.
    pub fn delete(&self, id: &ProductId) -> ShoppingList {
        if !self.contains(id) {
            tracing::debug!("delete ignored: unknown product {id}");
        }
        ShoppingList {
            products: self
                .products
                .iter()
                .filter(|p| p.id != *id)
                .cloned()
                .collect(),
        }
    }
}
