//! Registration page view with name/email/password form.

use std::rc::Rc;

use api::HttpAuthApi;
use dioxus::prelude::*;
use ui::{
    make_token_store, use_auth, Destination, ErrorBanner, Field, FormHandle, FormState, Registrar,
    PASSWORD_MIN_LENGTH,
};

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let form = use_signal(FormState::default);
    let client = use_hook(|| HttpAuthApi::from_env().map(Rc::new));
    let tokens = use_hook(make_token_store);

    let edit = move |field: Field, value: String| {
        form.with_form(|state| state.set_field(field, value));
    };

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let tokens = tokens.clone();
        spawn(async move {
            let client = match client {
                Ok(client) => client,
                Err(err) => {
                    tracing::error!(error = ?err, "Registration client unavailable");
                    form.with_form(|state| state.fail(&err));
                    return;
                }
            };
            let registrar = Registrar::new(
                &*client,
                auth,
                tokens,
                move |to: Destination| {
                    nav.push(Route::from(to));
                },
            );
            registrar.submit(&form).await;
        });
    };

    let state = form();
    let submitting = state.is_submitting;

    rsx! {
        div {
            class: "signup",

            div {
                h1 { class: "signup-title", "Create Account" }

                if let Some(err) = state.error_message.clone() {
                    ErrorBanner { message: err }
                }

                form {
                    onsubmit: handle_register,

                    h3 { class: "field-label", "What's your name" }
                    div {
                        class: "field-row",
                        input {
                            class: "field",
                            r#type: "text",
                            placeholder: "First name",
                            required: true,
                            disabled: submitting,
                            value: "{state.first_name}",
                            oninput: move |evt: FormEvent| edit(Field::FirstName, evt.value()),
                        }
                        input {
                            class: "field",
                            r#type: "text",
                            placeholder: "Last name",
                            required: true,
                            disabled: submitting,
                            value: "{state.last_name}",
                            oninput: move |evt: FormEvent| edit(Field::LastName, evt.value()),
                        }
                    }

                    h3 { class: "field-label", "What's your email" }
                    input {
                        class: "field field-wide",
                        r#type: "email",
                        placeholder: "email@example.com",
                        required: true,
                        disabled: submitting,
                        value: "{state.email}",
                        oninput: move |evt: FormEvent| edit(Field::Email, evt.value()),
                    }

                    h3 { class: "field-label", "Enter Password" }
                    input {
                        class: "field field-wide",
                        r#type: "password",
                        placeholder: "password",
                        required: true,
                        minlength: "{PASSWORD_MIN_LENGTH}",
                        disabled: submitting,
                        value: "{state.password}",
                        oninput: move |evt: FormEvent| edit(Field::Password, evt.value()),
                    }

                    button {
                        class: "submit",
                        r#type: "submit",
                        disabled: submitting,
                        if submitting { "Creating Account..." } else { "Create Account" }
                    }
                }

                p {
                    class: "signup-footer",
                    "Already have an account? "
                    Link { class: "link", to: Route::Login {}, "Login here" }
                }
            }

            p {
                class: "fine-print",
                "This site is protected by reCAPTCHA and the Google Privacy Policy and Terms of Service apply."
            }
        }
    }
}
