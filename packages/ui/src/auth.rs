//! Authentication context and hooks for the UI.

use api::UserInfo;
use dioxus::prelude::*;

/// Authentication state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
}

/// Writer side of the application-wide identity.
///
/// The registration form only ever sets the user; other parts of the app may
/// read or replace it through the same context.
pub trait SessionStore {
    fn set_user(&self, user: UserInfo);
}

impl SessionStore for Signal<AuthState> {
    fn set_user(&self, user: UserInfo) {
        let mut signal = *self;
        if let Err(e) = signal.try_write().map(|mut state| state.user = Some(user)) {
            tracing::warn!(error = ?e, "Auth context gone, user not stored");
        }
    }
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn set_user(&self, user: UserInfo) {
        (**self).set_user(user)
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when a user signs up.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that owns the authentication state.
/// Wrap your app with this component so views can call [`use_auth`].
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_signal(AuthState::default);

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}
