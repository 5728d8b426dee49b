use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

/// Post-registration landing page.
#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let state = auth();

    rsx! {
        div {
            class: "signup",
            match state.user {
                Some(user) => rsx! {
                    h1 { class: "signup-title", "Welcome, {user.display_name()}" }
                },
                None => rsx! {
                    p {
                        class: "signup-footer",
                        "You are not signed in. "
                        Link { class: "link", to: Route::Register {}, "Create an account" }
                    }
                },
            }
        }
    }
}
