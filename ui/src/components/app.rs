use dioxus::prelude::*;

use sepet_common::catalog::Catalog;
use sepet_common::view::ViewFilter;

use super::completion_banner::CompletionBanner;
use super::filter_panel::FilterPanel;
use super::list_state::ListState;
use super::product_form::AddProductForm;
use super::product_table::ProductTable;

const STYLE: &str = include_str!("../../assets/main.css");

#[component]
pub fn App() -> Element {
    let catalog = use_hook(|| {
        Catalog::builtin().map_err(|err| {
            tracing::error!("failed to load catalog: {err}");
            err.to_string()
        })
    });

    match catalog {
        Ok(catalog) => rsx! {
            ShoppingApp { catalog }
        },
        Err(err) => rsx! {
            style { {STYLE} }
            div { class: "sepet-app load-error", role: "alert",
                "Katalog yüklenemedi: {err}"
            }
        },
    }
}

/// The list page, sharing one catalog between list and filter state.
#[component]
fn ShoppingApp(catalog: Catalog) -> Element {
    let list_catalog = catalog.clone();
    use_context_provider(move || Signal::new(ListState::new(list_catalog)));
    use_context_provider(move || Signal::new(ViewFilter::new(catalog)));

    rsx! {
        style { {STYLE} }
        div { class: "sepet-app",
            header { class: "app-header",
                h1 { "Alışveriş Listesi" }
            }
            main {
                AddProductForm {}
                CompletionBanner {}
                ProductTable {}
                FilterPanel {}
            }
        }
    }
}
