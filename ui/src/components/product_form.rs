use dioxus::prelude::*;

use sepet_common::catalog::{CategoryId, ShopId};

use super::list_state::{parse_select_id, use_list_state};

#[component]
pub fn AddProductForm() -> Element {
    let mut list_state = use_list_state();

    let state = list_state.read();
    let name = state.draft.name.clone();
    let shop_value = state
        .draft
        .shop
        .map(|id| id.0.to_string())
        .unwrap_or_default();
    let category_value = state
        .draft
        .category
        .map(|id| id.0.to_string())
        .unwrap_or_default();
    let shops = state.catalog.shops().to_vec();
    let categories = state.catalog.categories().to_vec();
    let can_submit = !state.draft.name.trim().is_empty()
        && state.draft.shop.is_some()
        && state.draft.category.is_some();
    drop(state);

    rsx! {
        div { class: "add-product-form",
            div { class: "form-group",
                input {
                    r#type: "text",
                    placeholder: "Ürün Adı",
                    value: "{name}",
                    oninput: move |evt| list_state.write().draft.name = evt.value(),
                }
            }
            div { class: "form-group",
                select {
                    value: "{shop_value}",
                    onchange: move |evt| {
                        list_state.write().draft.shop = parse_select_id(&evt.value()).map(ShopId);
                    },
                    option { value: "", "market seçiniz" }
                    for shop in shops {
                        option { key: "{shop.id.0}", value: "{shop.id.0}", "{shop.name}" }
                    }
                }
            }
            div { class: "form-group",
                select {
                    value: "{category_value}",
                    onchange: move |evt| {
                        list_state.write().draft.category =
                            parse_select_id(&evt.value()).map(CategoryId);
                    },
                    option { value: "", "kategori seçiniz" }
                    for category in categories {
                        option { key: "{category.id.0}", value: "{category.id.0}", "{category.name}" }
                    }
                }
            }
            button {
                class: "add-button",
                disabled: !can_submit,
                onclick: move |_| {
                    if let Some(id) = list_state.write().add_product() {
                        tracing::debug!("added product {id}");
                    }
                },
                "Ekle"
            }
        }
    }
}
