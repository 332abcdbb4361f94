use dioxus::prelude::*;

use sepet_common::catalog::Catalog;
use sepet_common::product::{IdGenerator, ProductDraft, ProductId};
use sepet_common::store::{Notice, ShoppingList};

/// The shopping list plus the add form's pending input.
///
/// Each mutation swaps in the snapshot returned by the list transition.
#[derive(Clone, Debug)]
pub struct ListState {
    pub catalog: Catalog,
    pub list: ShoppingList,
    pub draft: ProductDraft,
    /// Latest unacknowledged notice, shown as a banner.
    pub notice: Option<Notice>,
    /// Bumped on every notice so the banner remounts and replays.
    pub notice_seq: u64,
    ids: IdGenerator,
}

impl ListState {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_ids(catalog, IdGenerator::new())
    }

    pub fn with_ids(catalog: Catalog, ids: IdGenerator) -> Self {
        Self {
            catalog,
            list: ShoppingList::new(),
            draft: ProductDraft::default(),
            notice: None,
            notice_seq: 0,
            ids,
        }
    }

    /// Add the drafted product. Incomplete drafts are ignored.
    pub fn add_product(&mut self) -> Option<ProductId> {
        let added = self
            .list
            .add(&mut self.draft, &self.catalog, &mut self.ids)?;
        self.list = added.list;
        self.drop_stale_notice();
        Some(added.product.id)
    }

    pub fn toggle_bought(&mut self, id: &ProductId) {
        let toggled = self.list.toggle_bought(id);
        self.list = toggled.list;
        match toggled.notice {
            Some(notice) => {
                self.notice = Some(notice);
                self.notice_seq += 1;
            }
            None => self.drop_stale_notice(),
        }
    }

    pub fn delete_product(&mut self, id: &ProductId) {
        self.list = self.list.delete(id);
        self.drop_stale_notice();
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// A completion notice only stands while everything is bought.
    fn drop_stale_notice(&mut self) {
        if matches!(self.notice, Some(Notice::ShoppingComplete)) && !self.list.all_bought() {
            self.notice = None;
        }
    }
}

/// Map a select box value to an id; the placeholder option (`""`) is unset.
pub fn parse_select_id(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

pub fn use_list_state() -> Signal<ListState> {
    use_context::<Signal<ListState>>()
}
