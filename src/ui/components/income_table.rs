use dioxus::prelude::*;

use crate::domain::{format_price, Currency, HoldingIncome};

#[derive(Clone, PartialEq)]
pub struct IncomeRow {
    pub symbol: String,
    pub period: String,
    pub shares: f64,
    pub payment_count: usize,
    pub per_share: f64,
    pub total_dividends: f64,
}

impl From<&HoldingIncome> for IncomeRow {
    fn from(income: &HoldingIncome) -> Self {
        Self {
            symbol: income.symbol.clone(),
            period: income.period_label(),
            shares: income.shares,
            payment_count: income.payments.len(),
            per_share: income.per_share(),
            total_dividends: income.total_dividends,
        }
    }
}

#[component]
pub fn IncomeTable(rows: Vec<IncomeRow>, currency: Currency) -> Element {
    let is_empty = rows.is_empty();
    rsx! {
        table {
            class: "data-table",
            thead {
                tr {
                    th { "Stock" }
                    th { "Date Range" }
                    th { class: "numeric", "Shares" }
                    th { class: "numeric", "Payments" }
                    th { class: "numeric", "Per Share" }
                    th { class: "numeric", "Total Dividends" }
                }
            }
            tbody {
                for row in rows {
                    tr {
                        key: "{row.symbol}-{row.period}",
                        td { "{row.symbol}" }
                        td { class: "muted", "{row.period}" }
                        td { class: "numeric", {format_shares(row.shares)} }
                        td { class: "numeric", "{row.payment_count}" }
                        td { class: "numeric", {format_price(row.per_share, currency)} }
                        td { class: "numeric", {format_price(row.total_dividends, currency)} }
                    }
                }
                if is_empty {
                    tr {
                        td {
                            class: "table-empty",
                            colspan: "6",
                            "Add holdings and press Calculate Dividends."
                        }
                    }
                }
            }
        }
    }
}

fn format_shares(shares: f64) -> String {
    if shares.fract() == 0.0 {
        format!("{shares:.0}")
    } else {
        format!("{shares:.4}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
