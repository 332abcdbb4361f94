use dioxus::prelude::*;

use sepet_common::store::Notice;

use super::list_state::use_list_state;

const CONFETTI_PIECES: usize = 24;

/// Celebration shown when the last item on the list is bought.
#[component]
pub fn CompletionBanner() -> Element {
    let mut list_state = use_list_state();
    let (notice, seq) = {
        let state = list_state.read();
        (state.notice, state.notice_seq)
    };
    let pieces: Vec<String> = (0..CONFETTI_PIECES)
        .map(|i| format!("confetti-piece piece-{}", i % 6))
        .collect();

    match notice {
        // Keyed on the notice seq so a repeat completion remounts the
        // banner and restarts the confetti animation.
        Some(Notice::ShoppingComplete) => rsx! {
            for seq in std::iter::once(seq) {
                div { key: "{seq}", class: "completion-banner", role: "alert",
                    div { class: "confetti",
                        for (i, class) in pieces.iter().enumerate() {
                            span { key: "{i}", class: "{class}" }
                        }
                    }
                    strong { "Alışveriş Tamamlandı" }
                    button {
                        onclick: move |_| list_state.write().dismiss_notice(),
                        "Tamam"
                    }
                }
            }
        },
        None => rsx! {},
    }
}
