use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::{
    domain::{format_price, AppSettings, AppState, Currency},
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
    util::version::{version_label, APP_NAME},
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let initial = state.with(|st| st.settings.clone());
    let mut currency_input = use_signal(|| initial.currency.code().to_string());

    let preview = Currency::from_code(&currency_input())
        .map(|currency| format_price(33.333, currency))
        .unwrap_or_default();

    let on_apply = {
        let mut state = state;
        move |_| match parse_settings(&currency_input()) {
            Ok(settings) => {
                info!(currency = settings.currency.code(), "settings applied");
                state.with_mut(|st| st.settings = settings);
                push_toast(toasts, ToastKind::Success, "Updated display settings.");
            }
            Err(message) => push_toast(toasts, ToastKind::Error, message),
        }
    };

    let on_reset = {
        let mut state = state;
        move |_| {
            state.with_mut(|st| st.reset_settings());
            currency_input.set(AppSettings::default().currency.code().to_string());
            push_toast(toasts, ToastKind::Info, "Restored default settings.");
        }
    };

    rsx! {
        div { class: "page",
            section {
                class: theme::PANEL,
                h2 { class: theme::PANEL_TITLE, "Display" }
                div { class: "form-grid",
                    div {
                        label { class: theme::FIELD_LABEL, "Currency" }
                        select {
                            class: theme::FIELD_SELECT,
                            value: currency_input(),
                            onchange: move |evt| currency_input.set(evt.value()),
                            for currency in Currency::ALL {
                                option {
                                    value: currency.code(),
                                    selected: currency.code() == currency_input(),
                                    "{currency.label()}"
                                }
                            }
                        }
                    }
                    div {
                        label { class: theme::FIELD_LABEL, "Preview" }
                        p { class: "kpi-value", "{preview}" }
                    }
                }
                p { class: "muted", "Settings last for this session only." }
                div { class: "actions",
                    button { class: theme::BTN_PRIMARY, onclick: on_apply, "Apply" }
                    button { class: theme::BTN_SECONDARY, onclick: on_reset, "Reset Defaults" }
                }
            }

            section {
                class: theme::PANEL,
                h2 { class: theme::PANEL_TITLE, "About" }
                p { "{APP_NAME} {version_label()}" }
                p { class: "muted", "Price = D1 / (r − g), the Gordon Growth Model. Rates are entered as percentages." }
            }
        }
    }
}

fn parse_settings(currency_code: &str) -> Result<AppSettings, String> {
    let currency = Currency::from_code(currency_code)
        .ok_or_else(|| format!("Unknown currency '{currency_code}'"))?;
    Ok(AppSettings { currency })
}
