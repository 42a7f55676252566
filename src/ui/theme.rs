//! Shared class names so pages stay consistent with `assets/main.css`.

use crate::ui::components::toast::ToastKind;

pub const PANEL: &str = "panel";
pub const PANEL_TITLE: &str = "panel-title";
pub const FIELD_LABEL: &str = "field-label";
pub const FIELD_INPUT: &str = "field-input";
pub const FIELD_SELECT: &str = "field-select";
pub const BTN_PRIMARY: &str = "btn btn-primary";
pub const BTN_SECONDARY: &str = "btn btn-secondary";
pub const BTN_DANGER: &str = "btn btn-danger";
pub const BTN_DANGER_SMALL: &str = "btn btn-danger btn-small";
pub const BTN_SECONDARY_SMALL: &str = "btn btn-secondary btn-small";

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "nav-btn nav-btn--active"
    } else {
        "nav-btn"
    }
}

pub fn toast(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Info => "toast toast--info",
        ToastKind::Success => "toast toast--success",
        ToastKind::Warning => "toast toast--warning",
        ToastKind::Error => "toast toast--error",
    }
}
