use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::{
    domain::{compute_income, format_price, AppState, HoldingEntry, IncomeSummary},
    ui::{
        components::{
            income_table::{IncomeRow, IncomeTable},
            kpi_card::KpiCard,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
    util::generate_id,
};

fn blank_holding() -> HoldingEntry {
    HoldingEntry {
        id: generate_id("holding"),
        ..HoldingEntry::default()
    }
}

/// Removes the row with `id` unless it is the last one left.
fn remove_holding(rows: &mut Vec<HoldingEntry>, id: &str) -> bool {
    if rows.len() <= 1 {
        return false;
    }
    let before = rows.len();
    rows.retain(|row| row.id != id);
    rows.len() != before
}

#[component]
pub fn IncomePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut holdings = use_signal(|| vec![blank_holding()]);
    let mut summary = use_signal(|| None::<IncomeSummary>);
    let mut error_message = use_signal(String::new);

    let currency = state.with(|st| st.currency());
    let entries = holdings();
    let can_remove = entries.len() > 1;

    let on_calculate = move |_| {
        summary.set(None);
        error_message.set(String::new());

        match compute_income(&holdings()) {
            Ok(computed) => {
                debug!(
                    holdings = computed.holdings.len(),
                    total = computed.grand_total,
                    "dividend income computed"
                );
                summary.set(Some(computed));
            }
            Err(err) => {
                debug!(%err, "dividend income rejected");
                error_message.set(err.to_string());
            }
        }
    };

    let on_add = move |_| {
        holdings.with_mut(|rows| rows.push(blank_holding()));
    };

    let on_change = move |updated: HoldingEntry| {
        holdings.with_mut(|rows| {
            if let Some(row) = rows.iter_mut().find(|row| row.id == updated.id) {
                *row = updated;
            }
        });
    };

    let on_remove = move |id: String| {
        if holdings.with_mut(|rows| remove_holding(rows, &id)) {
            push_toast(toasts, ToastKind::Info, "Holding removed.");
        }
    };

    let result_rows: Vec<IncomeRow> = summary()
        .map(|s| s.holdings.iter().map(IncomeRow::from).collect())
        .unwrap_or_default();
    let grand_total = summary().map(|s| s.grand_total);
    let holding_count = result_rows.len();

    rsx! {
        div { class: "page",
            section {
                class: theme::PANEL,
                h2 { class: theme::PANEL_TITLE, "Dividend Income" }
                p { class: "muted", "Enter per-share dividend payments separated by commas. Dates are optional (YYYY-MM-DD)." }
                for entry in entries {
                    HoldingEditor {
                        key: "{entry.id}",
                        entry: entry.clone(),
                        can_remove,
                        on_change,
                        on_remove,
                    }
                }
                div { class: "actions",
                    button { class: theme::BTN_SECONDARY, onclick: on_add, "Add Another Stock" }
                    button { class: theme::BTN_PRIMARY, onclick: on_calculate, "Calculate Dividends" }
                }
                if !error_message().is_empty() {
                    p { class: "error-text", "{error_message}" }
                }
            }

            if let Some(total) = grand_total {
                section {
                    class: "kpi-grid",
                    KpiCard {
                        title: "Total Dividends".to_string(),
                        value: format_price(total, currency),
                        description: Some(format!("Across {holding_count} holding(s)")),
                    }
                }
            }

            section {
                class: theme::PANEL,
                h2 { class: theme::PANEL_TITLE, "Results" }
                IncomeTable { rows: result_rows, currency }
            }
        }
    }
}

#[component]
fn HoldingEditor(
    entry: HoldingEntry,
    can_remove: bool,
    on_change: EventHandler<HoldingEntry>,
    on_remove: EventHandler<String>,
) -> Element {
    let field = |label: &'static str,
                 placeholder: &'static str,
                 value: String,
                 apply: fn(&mut HoldingEntry, String)| {
        let entry = entry.clone();
        let on_change = on_change;
        rsx! {
            div {
                label { class: theme::FIELD_LABEL, "{label}" }
                input {
                    class: theme::FIELD_INPUT,
                    value,
                    placeholder,
                    oninput: move |evt: FormEvent| {
                        let mut updated = entry.clone();
                        apply(&mut updated, evt.value());
                        on_change.call(updated);
                    },
                }
            }
        }
    };

    let remove_id = entry.id.clone();
    rsx! {
        div { class: "holding-row",
            {field("Stock Symbol", "KO", entry.symbol.clone(), |e, v| e.symbol = v)}
            {field("Start Date", "2024-01-01", entry.start_date.clone(), |e, v| e.start_date = v)}
            {field("End Date", "2024-12-31", entry.end_date.clone(), |e, v| e.end_date = v)}
            {field("Number of Shares", "100", entry.shares.clone(), |e, v| e.shares = v)}
            {field("Payments per Share", "0.48, 0.48, 0.51", entry.payments.clone(), |e, v| e.payments = v)}
            button {
                class: theme::BTN_DANGER_SMALL,
                disabled: !can_remove,
                onclick: move |_| on_remove.call(remove_id.clone()),
                "Remove"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_a_matching_row() {
        let mut rows = vec![blank_holding(), blank_holding()];
        let target = rows[0].id.clone();
        assert!(remove_holding(&mut rows, &target));
        assert_eq!(rows.len(), 1);
        assert!(rows.iter().all(|row| row.id != target));
    }

    #[test]
    fn keeps_the_last_row() {
        let mut rows = vec![blank_holding()];
        let only = rows[0].id.clone();
        assert!(!remove_holding(&mut rows, &only));
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn unknown_ids_remove_nothing() {
        let mut rows = vec![blank_holding(), blank_holding()];
        assert!(!remove_holding(&mut rows, "holding-unknown"));
        assert_eq!(rows.len(), 2);
    }
}
