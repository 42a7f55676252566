use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{AppState, HISTORY_CAPACITY},
    ui::{
        components::{
            history_table::{HistoryRow, HistoryTable},
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

#[component]
pub fn HistoryPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let nav = use_navigator();

    let currency = state.with(|st| st.currency());
    let rows: Vec<HistoryRow> = state.with(|st| st.history.entries().map(HistoryRow::from).collect());
    let (count, is_empty) = state.with(|st| (st.history.len(), st.history.is_empty()));

    let on_rerun = {
        let mut state = state;
        move |id: String| {
            let raw = state.with(|st| st.history.find(&id).map(|entry| entry.raw.clone()));
            let Some(raw) = raw else {
                push_toast(toasts, ToastKind::Warning, "That valuation is no longer in history.");
                return;
            };
            state.with_mut(|st| st.pending_inputs = Some(raw));
            nav.push(Route::Calculator {});
        }
    };

    let on_clear = {
        let mut state = state;
        move |_| {
            state.with_mut(|st| st.history.clear());
            info!("valuation history cleared");
            push_toast(toasts, ToastKind::Info, "Cleared valuation history.");
        }
    };

    rsx! {
        div { class: "page",
            section {
                class: theme::PANEL,
                h2 { class: theme::PANEL_TITLE, "Session History" }
                p { class: "muted", "{count} of {HISTORY_CAPACITY} most recent valuations. History is discarded when the window closes." }
                HistoryTable { rows, currency, on_rerun }
                div { class: "actions",
                    button {
                        class: theme::BTN_DANGER,
                        disabled: is_empty,
                        onclick: on_clear,
                        "Clear History"
                    }
                }
            }
        }
    }
}
