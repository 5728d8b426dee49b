//! This crate contains the shared registration UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, SessionStore};

pub mod registration;
pub use registration::{
    Destination, Field, FormHandle, FormState, Navigate, Registrar, SubmitOutcome,
    PASSWORD_MIN_LENGTH,
};

mod token;
pub use token::make_token_store;

mod error_banner;
pub use error_banner::ErrorBanner;
