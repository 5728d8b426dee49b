//! Login page. Sign-in itself is served elsewhere; this view is the landing
//! point for the "Login here" link.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Login() -> Element {
    rsx! {
        div {
            class: "signup",
            div {
                h1 { class: "signup-title", "Sign in" }
                p {
                    class: "signup-footer",
                    "New here? "
                    Link { class: "link", to: Route::Register {}, "Create an account" }
                }
            }
        }
    }
}
