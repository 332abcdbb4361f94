use chrono::Utc;
use dioxus::prelude::*;

use sepet_common::catalog::{CategoryId, ShopId};
use sepet_common::filter::StatusFilter;

use super::list_state::parse_select_id;
use super::view_state::{sleep_ms, use_view_filter, PendingTimer};

#[component]
pub fn FilterPanel() -> Element {
    let mut view = use_view_filter();
    let mut debounce_task = use_signal(PendingTimer::<Task>::new);

    // Drop any pending name-query timer with the panel.
    use_drop(move || {
        if let Ok(mut pending) = debounce_task.try_write() {
            pending.cancel();
        }
        if let Ok(mut view) = view.try_write() {
            view.teardown();
        }
    });

    let on_name_input = move |evt: FormEvent| {
        let now = Utc::now();
        let ticket = view.write().set_name_query(evt.value(), now);
        let delay = ticket.delay_from(now).num_milliseconds().max(0) as u32;
        let task = spawn(async move {
            sleep_ms(delay).await;
            view.write().on_timer(ticket);
            debounce_task.write().finish();
        });
        debounce_task.write().arm(task);
    };

    let state = view.read();
    let shop_value = state
        .criteria()
        .shop
        .map(|id| id.0.to_string())
        .unwrap_or_default();
    let category_value = state
        .criteria()
        .category
        .map(|id| id.0.to_string())
        .unwrap_or_default();
    let current_status = state.criteria().status;
    let typed_query = state.typed_query().to_string();
    let shops = state.catalog().shops().to_vec();
    let categories = state.catalog().categories().to_vec();
    drop(state);

    let status_options: Vec<(StatusFilter, &'static str, &'static str)> = StatusFilter::all()
        .iter()
        .map(|status| (*status, status.as_str(), status.label()))
        .collect();

    rsx! {
        div { class: "filter-panel",
            div { class: "form-group",
                label { "Market" }
                select {
                    value: "{shop_value}",
                    onchange: move |evt| {
                        view.write().set_shop_filter(parse_select_id(&evt.value()).map(ShopId));
                    },
                    option { value: "", "Hepsi" }
                    for shop in shops {
                        option { key: "{shop.id.0}", value: "{shop.id.0}", "{shop.name}" }
                    }
                }
            }
            div { class: "form-group",
                label { "Kategori" }
                select {
                    value: "{category_value}",
                    onchange: move |evt| {
                        view.write()
                            .set_category_filter(parse_select_id(&evt.value()).map(CategoryId));
                    },
                    option { value: "", "Hepsi" }
                    for category in categories {
                        option { key: "{category.id.0}", value: "{category.id.0}", "{category.name}" }
                    }
                }
            }
            div { class: "form-group status-group",
                for (status, value, caption) in status_options {
                    label { key: "{value}",
                        input {
                            r#type: "radio",
                            name: "status",
                            value: "{value}",
                            checked: current_status == status,
                            onchange: move |_| view.write().set_status_filter(status),
                        }
                        " {caption}"
                    }
                }
            }
            div { class: "form-group",
                label { "Ürün Adı" }
                input {
                    r#type: "text",
                    placeholder: "Ürün adını girin",
                    value: "{typed_query}",
                    oninput: on_name_input,
                }
            }
        }
    }
}
