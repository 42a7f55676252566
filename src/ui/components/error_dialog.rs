use dioxus::prelude::*;

use crate::ui::theme;

/// Title and message for a blocking error dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogMessage {
    pub title: String,
    pub body: String,
}

impl DialogMessage {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Modal that stays open until dismissed. Renders nothing when `message` is `None`.
#[component]
pub fn ErrorDialog(message: Signal<Option<DialogMessage>>) -> Element {
    let Some(current) = message() else {
        return rsx! { Fragment {} };
    };

    let mut message = message;
    rsx! {
        div {
            class: "modal-backdrop",
            role: "presentation",
            div {
                class: "modal",
                role: "alertdialog",
                "aria-modal": "true",
                h2 { class: "modal-title", "⛔ {current.title}" }
                p { class: "modal-body", "{current.body}" }
                div { class: "actions",
                    button {
                        class: theme::BTN_PRIMARY,
                        autofocus: true,
                        onclick: move |_| message.set(None),
                        "OK"
                    }
                }
            }
        }
    }
}
