use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::catalog::{CategoryId, ShopId};

/// URL-safe alphabet used for product ids (same as nanoid).
const ID_ALPHABET: &[u8; 64] = b"useandom-26T198340PX75pxJACKVERYMINDBUSHWOLF_GQZbfghjklqvwyzrict";
const ID_LEN: usize = 21;

/// Opaque product identifier. Stable for the product's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An item on the shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Shop name as listed in the catalog.
    pub shop: String,
    /// Category name as listed in the catalog.
    pub category: String,
    pub is_bought: bool,
}

/// Pending input of the add form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub shop: Option<ShopId>,
    pub category: Option<CategoryId>,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, shop: Option<ShopId>, category: Option<CategoryId>) -> Self {
        Self {
            name: name.into(),
            shop,
            category,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Random id source for new products.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    rng: StdRng,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator, for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw a 21-character id.
    pub fn next_id(&mut self) -> ProductId {
        let id = (0..ID_LEN)
            .map(|_| ID_ALPHABET[self.rng.gen_range(0..ID_ALPHABET.len())] as char)
            .collect();
        ProductId(id)
    }

    /// Draw ids until one is not `taken`.
    pub fn fresh_id(&mut self, taken: impl Fn(&ProductId) -> bool) -> ProductId {
        loop {
            let id = self.next_id();
            if !taken(&id) {
                return id;
            }
            tracing::debug!("product id collision on {id}, redrawing");
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
