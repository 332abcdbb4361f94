use dioxus::prelude::*;

use sepet_common::product::Product;

use super::list_state::use_list_state;
use super::view_state::use_view_filter;

/// The filtered shopping list.
#[component]
pub fn ProductTable() -> Element {
    let list_state = use_list_state();
    let view = use_view_filter();

    let (visible, summary) = {
        let state = list_state.read();
        let view = view.read();
        let visible: Vec<Product> = view.visible(&state.list).into_iter().cloned().collect();
        (visible, state.list.summary())
    };

    rsx! {
        p { class: "list-summary",
            "{summary.bought} / {summary.total} alındı, {summary.remaining} kaldı"
        }
        table { class: "product-table",
            thead {
                tr {
                    th { "#id" }
                    th { "Ürün Adı" }
                    th { "Market" }
                    th { "Kategori" }
                    th { "Satın Alındı" }
                    th { "Sil" }
                }
            }
            tbody {
                for product in visible {
                    ProductRow { key: "{product.id}", product }
                }
            }
        }
    }
}

#[component]
fn ProductRow(product: Product) -> Element {
    let mut list_state = use_list_state();
    let toggle_id = product.id.clone();
    let delete_id = product.id.clone();
    let name_style = if product.is_bought {
        "text-decoration: line-through; cursor: pointer;"
    } else {
        "text-decoration: none; cursor: pointer;"
    };

    rsx! {
        tr { class: "align-middle",
            td { "{product.id}" }
            td {
                style: name_style,
                onclick: move |_| list_state.write().toggle_bought(&toggle_id),
                "{product.name}"
            }
            td { "{product.shop}" }
            td { "{product.category}" }
            td {
                if product.is_bought { "Evet" } else { "Hayır" }
            }
            td {
                button {
                    class: "icon-button",
                    title: "Sil",
                    onclick: move |_| list_state.write().delete_product(&delete_id),
                    "🗑"
                }
            }
        }
    }
}
