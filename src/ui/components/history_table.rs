use dioxus::prelude::*;

use crate::domain::{format_price, Currency, HistoryEntry};
use crate::ui::theme;

#[derive(Clone, PartialEq)]
pub struct HistoryRow {
    pub id: String,
    pub recorded_at: String,
    pub dividend: f64,
    pub required_return_pct: f64,
    pub growth_rate_pct: f64,
    pub price: f64,
}

impl From<&HistoryEntry> for HistoryRow {
    fn from(entry: &HistoryEntry) -> Self {
        let input = entry.valuation.input;
        Self {
            id: entry.id.clone(),
            recorded_at: entry.timestamp_label(),
            dividend: input.expected_dividend,
            required_return_pct: input.required_return * 100.0,
            growth_rate_pct: input.growth_rate * 100.0,
            price: entry.valuation.price,
        }
    }
}

#[component]
pub fn HistoryTable(
    rows: Vec<HistoryRow>,
    currency: Currency,
    on_rerun: EventHandler<String>,
) -> Element {
    let is_empty = rows.is_empty();
    rsx! {
        table {
            class: "data-table",
            thead {
                tr {
                    th { "When" }
                    th { class: "numeric", "D1" }
                    th { class: "numeric", "r %" }
                    th { class: "numeric", "g %" }
                    th { class: "numeric", "Price" }
                    th {}
                }
            }
            tbody {
                for row in rows {
                    HistoryRowView { key: "{row.id}", row: row.clone(), currency, on_rerun }
                }
                if is_empty {
                    tr {
                        td {
                            class: "table-empty",
                            colspan: "6",
                            "No valuations yet this session."
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn HistoryRowView(row: HistoryRow, currency: Currency, on_rerun: EventHandler<String>) -> Element {
    let rerun_id = row.id.clone();
    rsx! {
        tr {
            td { class: "muted", "{row.recorded_at}" }
            td { class: "numeric", {format_price(row.dividend, currency)} }
            td { class: "numeric", {format!("{:.2}", row.required_return_pct)} }
            td { class: "numeric", {format!("{:.2}", row.growth_rate_pct)} }
            td { class: "numeric", {format_price(row.price, currency)} }
            td {
                class: "numeric",
                button {
                    class: theme::BTN_SECONDARY_SMALL,
                    onclick: move |_| on_rerun.call(rerun_id.clone()),
                    "Load"
                }
            }
        }
    }
}
