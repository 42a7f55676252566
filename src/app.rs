use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::{
    domain::AppState,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{CalculatorPage, HistoryPage, IncomePage, SettingsPage},
        shell::Shell,
    },
    util::{
        assets,
        version::{version_label, APP_NAME},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Calculator {},
    #[route("/income")]
    Income {},
    #[route("/history")]
    History {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    use_hook(|| info!("starting {APP_NAME} {}", version_label()));

    let state = use_signal(AppState::default);
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Calculator() -> Element {
    rsx! { Shell { CalculatorPage {} } }
}

#[component]
pub fn Income() -> Element {
    rsx! { Shell { IncomePage {} } }
}

#[component]
pub fn History() -> Element {
    rsx! { Shell { HistoryPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
