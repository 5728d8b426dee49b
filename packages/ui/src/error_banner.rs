//! Inline error message shown above a form.

use dioxus::prelude::*;

use crate::icons::FaCircleExclamation;
use crate::Icon;

#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div {
            class: "error-banner",
            role: "alert",
            Icon { icon: FaCircleExclamation, width: 14, height: 14 }
            span { "{message}" }
        }
    }
}
