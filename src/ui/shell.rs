use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::theme;
use crate::util::version::APP_NAME;

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "app-shell",
            header {
                class: "app-header",
                div {
                    h1 { class: "app-title", "{APP_NAME}" }
                    p { class: "app-subtitle", "Gordon Growth Model" }
                }
                nav { class: "app-nav",
                    NavButton { active: matches!(current_route, Route::Calculator {}), onclick: move |_| { nav.push(Route::Calculator {}); }, label: "📈 Price" }
                    NavButton { active: matches!(current_route, Route::Income {}), onclick: move |_| { nav.push(Route::Income {}); }, label: "💵 Income" }
                    NavButton { active: matches!(current_route, Route::History {}), onclick: move |_| { nav.push(Route::History {}); }, label: "🕘 History" }
                    NavButton { active: matches!(current_route, Route::Settings {}), onclick: move |_| { nav.push(Route::Settings {}); }, label: "⚙️" }
                }
            }
            main {
                {children}
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: theme::nav_button(active),
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
