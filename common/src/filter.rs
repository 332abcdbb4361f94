use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CategoryId, ShopId};
use crate::product::{Product, ProductId};
use crate::search::NameSearch;

/// Purchase-status filter, matching the radio values of the filter form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusFilter {
    #[default]
    All,
    Bought,
    NotBought,
}

impl StatusFilter {
    pub fn all() -> &'static [StatusFilter] {
        &[StatusFilter::All, StatusFilter::Bought, StatusFilter::NotBought]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Bought => "bought",
            StatusFilter::NotBought => "notBought",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "Tümü",
            StatusFilter::Bought => "Satın Alınanlar",
            StatusFilter::NotBought => "Satın Alınmayanlar",
        }
    }

    pub fn matches(self, is_bought: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Bought => is_bought,
            StatusFilter::NotBought => !is_bought,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown radio value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status filter {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for StatusFilter {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusFilter::all()
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// The four filter criteria. `name_query` is the already-debounced query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub shop: Option<ShopId>,
    pub category: Option<CategoryId>,
    pub status: StatusFilter,
    pub name_query: String,
}

impl FilterCriteria {
    /// True when no criterion narrows the list.
    pub fn is_unfiltered(&self) -> bool {
        self.shop.is_none()
            && self.category.is_none()
            && self.status == StatusFilter::All
            && self.name_query.trim().is_empty()
    }
}

/// Shop predicate. A filter id missing from the catalog matches nothing.
pub fn shop_matches(product: &Product, shop: Option<ShopId>, catalog: &Catalog) -> bool {
    match shop {
        None => true,
        Some(id) => catalog.shop_name(id) == Some(product.shop.as_str()),
    }
}

/// Category predicate. A filter id missing from the catalog matches nothing.
pub fn category_matches(product: &Product, category: Option<CategoryId>, catalog: &Catalog) -> bool {
    match category {
        None => true,
        Some(id) => catalog.category_name(id) == Some(product.category.as_str()),
    }
}

/// Ids of `products` matching the name query, or `None` when the query is
/// empty and every name passes.
///
/// The search always runs over the full list handed in, not over the subset
/// left by the other criteria.
pub fn name_matches(
    products: &[Product],
    query: &str,
    search: &dyn NameSearch,
) -> Option<HashSet<ProductId>> {
    if query.trim().is_empty() {
        None
    } else {
        Some(search.search_by_name(products, query))
    }
}

/// The visible subsequence of `products`: those passing all four predicates,
/// in their original order.
pub fn visible_products<'a>(
    products: &'a [Product],
    criteria: &FilterCriteria,
    catalog: &Catalog,
    search: &dyn NameSearch,
) -> Vec<&'a Product> {
    let named = name_matches(products, &criteria.name_query, search);
    products
        .iter()
        .filter(|p| shop_matches(p, criteria.shop, catalog))
        .filter(|p| category_matches(p, criteria.category, catalog))
        .filter(|p| criteria.status.matches(p.is_bought))
        .filter(|p| named.as_ref().is_none_or(|ids| ids.contains(&p.id)))
        .collect()
}
