use chrono::{DateTime, Duration, Utc};

use crate::catalog::{Catalog, CategoryId, ShopId};
use crate::debounce::{Debounced, Ticket, NAME_QUERY_QUIET_MS};
use crate::filter::{visible_products, FilterCriteria, StatusFilter};
use crate::product::Product;
use crate::search::{FuzzyNameSearch, NameSearch};
use crate::store::ShoppingList;

/// Filter state behind the product table.
///
/// Shop, category and status apply immediately. The name query goes through
/// a [`Debounced`] value: each `set_name_query` restarts the quiet period and
/// the previously settled query stays in effect until the timer fires.
#[derive(Debug, Clone)]
pub struct ViewFilter<S = FuzzyNameSearch> {
    catalog: Catalog,
    shop: Option<ShopId>,
    category: Option<CategoryId>,
    status: StatusFilter,
    name_query: Debounced<String>,
    search: S,
}

impl ViewFilter<FuzzyNameSearch> {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_search(catalog, FuzzyNameSearch::new())
    }
}

impl<S: NameSearch> ViewFilter<S> {
    pub fn with_search(catalog: Catalog, search: S) -> Self {
        Self {
            catalog,
            shop: None,
            category: None,
            status: StatusFilter::All,
            name_query: Debounced::new(
                String::new(),
                Duration::milliseconds(NAME_QUERY_QUIET_MS),
            ),
            search,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn search(&self) -> &S {
        &self.search
    }

    pub fn set_shop_filter(&mut self, shop: Option<ShopId>) {
        self.shop = shop;
    }

    pub fn set_category_filter(&mut self, category: Option<CategoryId>) {
        self.category = category;
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.status = status;
    }

    /// Record a keystroke in the name box. Any pending settle is cancelled;
    /// the returned ticket must be handed back to `on_timer` once it is due.
    pub fn set_name_query(&mut self, query: impl Into<String>, now: DateTime<Utc>) -> Ticket {
        self.name_query.schedule(query.into(), now)
    }

    /// Debounce timer expiry. Returns true if the effective query changed.
    pub fn on_timer(&mut self, ticket: Ticket) -> bool {
        self.name_query.fire(ticket)
    }

    /// Settle the name query if its quiet period has passed by `now`.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        self.name_query.poll(now)
    }

    /// Cancel any pending name query; called when the view goes away.
    pub fn teardown(&mut self) {
        self.name_query.cancel();
    }

    /// What the name box currently shows, settled or not.
    pub fn typed_query(&self) -> &str {
        self.name_query.latest()
    }

    pub fn pending_ticket(&self) -> Option<Ticket> {
        self.name_query.pending_ticket()
    }

    /// Criteria currently in effect, with the settled name query.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            shop: self.shop,
            category: self.category,
            status: self.status,
            name_query: self.name_query.settled().clone(),
        }
    }

    /// Products of `list` that pass every active criterion, in list order.
    pub fn visible<'a>(&self, list: &'a ShoppingList) -> Vec<&'a Product> {
        visible_products(list.products(), &self.criteria(), &self.catalog, &self.search)
    }
}
