use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::{
    domain::{evaluate, format_price, AppState, RawValuationInput, Valuation},
    ui::{
        components::{
            error_dialog::{DialogMessage, ErrorDialog},
            kpi_card::KpiCard,
        },
        theme,
    },
};

#[component]
pub fn CalculatorPage() -> Element {
    let state = use_context::<Signal<AppState>>();

    // Inputs queued by the history page seed the form on mount and are
    // cleared after the first render.
    let pending = use_hook(|| state.peek().pending_inputs.clone());
    use_effect({
        let mut state = state;
        move || {
            state.with_mut(|st| {
                st.take_pending_inputs();
            });
        }
    });
    let initial = pending.clone().unwrap_or_default();

    let mut dividend_input = use_signal(|| initial.dividend.clone());
    let mut rate_input = use_signal(|| initial.required_return_pct.clone());
    let mut growth_input = use_signal(|| initial.growth_rate_pct.clone());
    let mut result = use_signal(|| pending.as_ref().and_then(|raw| evaluate(raw).ok()));
    let mut dialog = use_signal(|| None::<DialogMessage>);

    let currency = state.with(|st| st.currency());
    let price_label = result()
        .map(|valuation| valuation.display(currency))
        .unwrap_or_else(|| format_price(0.0, currency));

    let on_submit = {
        let mut state = state;
        move |evt: FormEvent| {
            evt.prevent_default();
            let raw = RawValuationInput::new(dividend_input(), rate_input(), growth_input());
            let outcome = state.with_mut(|st| st.submit_valuation(raw, OffsetDateTime::now_utc()));
            match outcome {
                Ok(valuation) => {
                    debug!(price = valuation.price, "valuation computed");
                    result.set(Some(valuation));
                }
                Err(err) => {
                    debug!(%err, "valuation rejected");
                    dialog.set(Some(DialogMessage::new(err.title(), err.to_string())));
                }
            }
        }
    };

    let on_clear = move |_| {
        dividend_input.set(String::new());
        rate_input.set(String::new());
        growth_input.set(String::new());
        result.set(None);
    };

    rsx! {
        div { class: "page",
            section {
                class: theme::PANEL,
                h2 { class: theme::PANEL_TITLE, "Dividend Discount Model" }
                form {
                    onsubmit: on_submit,
                    div { class: "form-grid",
                        div {
                            label { class: theme::FIELD_LABEL, r#for: "ddm-dividend", "Expected Dividend (D1):" }
                            input {
                                id: "ddm-dividend",
                                class: theme::FIELD_INPUT,
                                inputmode: "decimal",
                                value: dividend_input(),
                                oninput: move |evt| dividend_input.set(evt.value()),
                                placeholder: "2.00",
                            }
                        }
                        div {
                            label { class: theme::FIELD_LABEL, r#for: "ddm-rate", "Required Rate of Return (r %):" }
                            input {
                                id: "ddm-rate",
                                class: theme::FIELD_INPUT,
                                inputmode: "decimal",
                                value: rate_input(),
                                oninput: move |evt| rate_input.set(evt.value()),
                                placeholder: "10",
                            }
                        }
                        div {
                            label { class: theme::FIELD_LABEL, r#for: "ddm-growth", "Dividend Growth Rate (g %):" }
                            input {
                                id: "ddm-growth",
                                class: theme::FIELD_INPUT,
                                inputmode: "decimal",
                                value: growth_input(),
                                oninput: move |evt| growth_input.set(evt.value()),
                                placeholder: "4",
                            }
                        }
                    }
                    div { class: "actions",
                        button { class: theme::BTN_PRIMARY, r#type: "submit", "Calculate Stock Price" }
                        button { class: theme::BTN_SECONDARY, r#type: "button", onclick: on_clear, "Clear" }
                    }
                }
                p { class: "result-label", "Stock Price: {price_label}" }
            }

            if let Some(valuation) = result() {
                ValuationBreakdown { valuation }
            }

            ErrorDialog { message: dialog }
        }
    }
}

#[component]
fn ValuationBreakdown(valuation: Valuation) -> Element {
    let spread = valuation.input.spread();
    rsx! {
        section {
            class: "kpi-grid",
            KpiCard {
                title: "Spread (r − g)".to_string(),
                value: format!("{:.2}%", spread * 100.0),
                description: Some("Required return minus growth".to_string()),
            }
            KpiCard {
                title: "Price / Dividend".to_string(),
                value: format!("{:.2}×", 1.0 / spread),
                description: Some("Multiple of next year's dividend".to_string()),
            }
            KpiCard {
                title: "Implied Yield".to_string(),
                value: format!("{:.2}%", dividend_yield(&valuation) * 100.0),
                description: Some("D1 divided by price".to_string()),
            }
        }
    }
}

fn dividend_yield(valuation: &Valuation) -> f64 {
    if valuation.price == 0.0 {
        0.0
    } else {
        valuation.input.expected_dividend / valuation.price
    }
}
