//! # Registration form state and submit flow
//!
//! [`FormState`] holds the four editable fields plus the submission flag and
//! error banner text. [`Registrar`] runs one submission against its injected
//! collaborators:
//!
//! | Collaborator | Trait | Receives |
//! |--------------|-------|----------|
//! | Backend | [`AuthApi`] | the [`RegistrationRequest`] |
//! | Shared identity | [`SessionStore`] | the registered [`UserInfo`](api::UserInfo) |
//! | Persisted token slot | [`TokenStore`] over any [`KeyValueStore`] | the bearer token |
//! | Router | [`Navigate`] | [`Destination::Home`] on success |
//!
//! The form is reached through [`FormHandle`] rather than `&mut FormState` so
//! the state stays observable (and editable by other handlers) while the
//! request is in flight. `is_submitting` is the only lock: a second submit
//! while it is set is ignored, and a drop guard clears it on every exit path,
//! including the future being dropped mid-request.

use std::cell::RefCell;
use std::rc::Rc;

use api::{AuthApi, RegisterError, RegistrationRequest, Session};
use dioxus::prelude::*;
use store::{KeyValueStore, TokenStore};

use crate::auth::SessionStore;

/// Shortest password the password input accepts.
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// The editable inputs of the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
}

/// Local state of one registration form instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub is_submitting: bool,
    pub error_message: Option<String>,
}

impl FormState {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    /// Update one field. Returns `false` (and changes nothing) while a
    /// submission is in flight.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.is_submitting {
            return false;
        }
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        };
        *slot = value.into();
        true
    }

    /// Snapshot the fields into a fresh request.
    pub fn request(&self) -> RegistrationRequest {
        RegistrationRequest::new(
            self.first_name.clone(),
            self.last_name.clone(),
            self.email.clone(),
            self.password.clone(),
        )
    }

    /// Start a submission: clear the error, raise `is_submitting` and build
    /// the request. `None` if one is already running.
    pub fn begin_submit(&mut self) -> Option<RegistrationRequest> {
        if self.is_submitting {
            return None;
        }
        self.error_message = None;
        self.is_submitting = true;
        Some(self.request())
    }

    /// Record a failed attempt; the form stays editable once the flag drops.
    pub fn fail(&mut self, err: &RegisterError) {
        self.error_message = Some(err.user_message());
    }

    /// Empty the four text fields.
    pub fn reset_fields(&mut self) {
        self.first_name.clear();
        self.last_name.clear();
        self.email.clear();
        self.password.clear();
    }

    pub fn end_submit(&mut self) {
        self.is_submitting = false;
    }
}

/// Shared, mutable access to a [`FormState`].
///
/// Returns `None` when the state no longer exists (the owning component
/// unmounted while a request was in flight).
pub trait FormHandle {
    fn with_form<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R>;
}

impl FormHandle for Signal<FormState> {
    fn with_form<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R> {
        let mut signal = *self;
        let mut state = signal.try_write().ok()?;
        Some(f(&mut *state))
    }
}

impl FormHandle for Rc<RefCell<FormState>> {
    fn with_form<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R> {
        let mut state = self.try_borrow_mut().ok()?;
        Some(f(&mut *state))
    }
}

/// Named places the form can send the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Home,
    Login,
}

impl Destination {
    pub fn path(self) -> &'static str {
        match self {
            Destination::Home => "/home",
            Destination::Login => "/login",
        }
    }
}

/// Capability to change the displayed view.
pub trait Navigate {
    fn navigate(&self, to: Destination);
}

impl<F: Fn(Destination)> Navigate for F {
    fn navigate(&self, to: Destination) {
        self(to)
    }
}

/// How a call to [`Registrar::submit`] ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Registered,
    Failed(RegisterError),
    /// A submission was already in flight (or the form is gone).
    Ignored,
}

/// Clears `is_submitting` when dropped.
struct SubmittingGuard<'a, F: FormHandle> {
    form: &'a F,
}

impl<F: FormHandle> Drop for SubmittingGuard<'_, F> {
    fn drop(&mut self) {
        self.form.with_form(FormState::end_submit);
    }
}

/// Runs registration submissions against injected collaborators.
pub struct Registrar<A, S, K, N> {
    api: A,
    session: S,
    tokens: TokenStore<K>,
    navigator: N,
}

impl<A, S, K, N> Registrar<A, S, K, N>
where
    A: AuthApi,
    S: SessionStore,
    K: KeyValueStore,
    N: Navigate,
{
    pub fn new(api: A, session: S, tokens: TokenStore<K>, navigator: N) -> Self {
        Self {
            api,
            session,
            tokens,
            navigator,
        }
    }

    /// Submit the form's current contents.
    ///
    /// On success the user goes to the session store, the token is persisted,
    /// the router moves to `/home` and the fields are emptied, in that order.
    /// On failure only the error message changes.
    pub async fn submit<F: FormHandle>(&self, form: &F) -> SubmitOutcome {
        let Some(Some(request)) = form.with_form(FormState::begin_submit) else {
            tracing::debug!("Registration submit ignored, already in flight");
            return SubmitOutcome::Ignored;
        };
        let _guard = SubmittingGuard { form };

        tracing::info!(email = %request.email, "Submitting registration");
        match self.api.register(&request).await {
            Ok(Session { user, token }) => {
                tracing::info!(
                    email = %user.email,
                    destination = Destination::Home.path(),
                    "Registration succeeded"
                );
                self.session.set_user(user);
                self.tokens.save(&token);
                self.navigator.navigate(Destination::Home);
                form.with_form(FormState::reset_fields);
                SubmitOutcome::Registered
            }
            Err(err) => {
                match &err {
                    RegisterError::ServerRejected { status, message } => {
                        tracing::warn!(kind = err.kind(), status, %message, "Registration rejected by server");
                    }
                    RegisterError::NoResponse => {
                        tracing::warn!(kind = err.kind(), "Registration got no response");
                    }
                    RegisterError::ClientFault { detail } => {
                        tracing::error!(kind = err.kind(), %detail, "Registration failed before a response");
                    }
                }
                form.with_form(|state| state.fail(&err));
                SubmitOutcome::Failed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::error::{NETWORK_ERROR_MESSAGE, REGISTRATION_FAILED_MESSAGE};
    use api::{FullName, UserInfo};
    use store::MemoryStore;

    /// Scripted backend that records what it was sent and what the form
    /// looked like while the call was pending.
    struct FakeApi {
        form: Rc<RefCell<FormState>>,
        responses: RefCell<Vec<Result<Session, RegisterError>>>,
        requests: RefCell<Vec<RegistrationRequest>>,
        seen_during_call: RefCell<Vec<FormState>>,
    }

    impl FakeApi {
        fn new(form: &Rc<RefCell<FormState>>, responses: Vec<Result<Session, RegisterError>>) -> Self {
            Self {
                form: form.clone(),
                responses: RefCell::new(responses),
                requests: RefCell::new(Vec::new()),
                seen_during_call: RefCell::new(Vec::new()),
            }
        }
    }

    impl AuthApi for FakeApi {
        async fn register(&self, request: &RegistrationRequest) -> Result<Session, RegisterError> {
            self.requests.borrow_mut().push(request.clone());
            self.seen_during_call
                .borrow_mut()
                .push(self.form.borrow().clone());
            self.responses.borrow_mut().remove(0)
        }
    }

    #[derive(Default)]
    struct RecordingSession {
        users: RefCell<Vec<UserInfo>>,
    }

    impl SessionStore for RecordingSession {
        fn set_user(&self, user: UserInfo) {
            self.users.borrow_mut().push(user);
        }
    }

    fn ada() -> UserInfo {
        UserInfo {
            id: Some("u-1".to_string()),
            fullname: FullName::new("Ada", "Lovelace"),
            email: "ada@example.com".to_string(),
        }
    }

    fn created() -> Result<Session, RegisterError> {
        Ok(Session {
            user: ada(),
            token: "jwt-abc".to_string(),
        })
    }

    fn conflict() -> Result<Session, RegisterError> {
        Err(RegisterError::rejected(
            409,
            br#"{"message":"Email already exists"}"#,
        ))
    }

    fn filled_state() -> FormState {
        let mut state = FormState::default();
        state.set_field(Field::FirstName, "Ada");
        state.set_field(Field::LastName, "Lovelace");
        state.set_field(Field::Email, "ada@example.com");
        state.set_field(Field::Password, "secret1");
        state
    }

    fn filled_form() -> Rc<RefCell<FormState>> {
        Rc::new(RefCell::new(filled_state()))
    }

    struct Harness {
        form: Rc<RefCell<FormState>>,
        api: FakeApi,
        session: RecordingSession,
        kv: MemoryStore,
        visits: Rc<RefCell<Vec<Destination>>>,
    }

    impl Harness {
        fn new(responses: Vec<Result<Session, RegisterError>>) -> Self {
            let form = filled_form();
            Self {
                api: FakeApi::new(&form, responses),
                form,
                session: RecordingSession::default(),
                kv: MemoryStore::new(),
                visits: Rc::new(RefCell::new(Vec::new())),
            }
        }

        async fn submit(&self) -> SubmitOutcome {
            let visits = self.visits.clone();
            let registrar = Registrar::new(
                &self.api,
                &self.session,
                TokenStore::new(self.kv.clone()),
                move |to: Destination| visits.borrow_mut().push(to),
            );
            registrar.submit(&self.form).await
        }
    }

    #[tokio::test]
    async fn test_request_mirrors_name_fields() {
        let h = Harness::new(vec![created()]);
        h.submit().await;

        let requests = h.api.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].fullname.firstname, "Ada");
        assert_eq!(requests[0].fullname.lastname, "Lovelace");
        assert_eq!(requests[0].email, "ada@example.com");
        assert_eq!(requests[0].password, "secret1");
    }

    #[tokio::test]
    async fn test_success_updates_session_token_and_route() {
        let h = Harness::new(vec![created()]);
        assert_eq!(h.submit().await, SubmitOutcome::Registered);

        let state = h.form.borrow();
        assert!(state.first_name.is_empty());
        assert!(state.last_name.is_empty());
        assert!(state.email.is_empty());
        assert!(state.password.is_empty());
        assert!(state.error_message.is_none());
        assert!(!state.is_submitting);

        assert_eq!(*h.session.users.borrow(), vec![ada()]);
        assert_eq!(h.kv.get(store::TOKEN_KEY).as_deref(), Some("jwt-abc"));
        assert_eq!(*h.visits.borrow(), vec![Destination::Home]);
    }

    #[tokio::test]
    async fn test_conflict_shows_server_message_only() {
        let h = Harness::new(vec![conflict()]);
        let outcome = h.submit().await;
        assert!(matches!(outcome, SubmitOutcome::Failed(RegisterError::ServerRejected { status: 409, .. })));

        let state = h.form.borrow();
        assert_eq!(state.error_message.as_deref(), Some("Email already exists"));
        assert!(!state.is_submitting);
        // Fields are kept so the user can fix the email
        assert_eq!(state.email, "ada@example.com");

        assert!(h.session.users.borrow().is_empty());
        assert!(h.visits.borrow().is_empty());
        assert!(h.kv.is_empty());
    }

    #[tokio::test]
    async fn test_dropped_connection_shows_network_message() {
        let h = Harness::new(vec![Err(RegisterError::NoResponse)]);
        h.submit().await;

        let state = h.form.borrow();
        assert_eq!(state.error_message.as_deref(), Some(NETWORK_ERROR_MESSAGE));
        assert!(!state.is_submitting);
    }

    #[tokio::test]
    async fn test_submitting_flag_held_during_call_on_every_path() {
        let h = Harness::new(vec![
            conflict(),
            Err(RegisterError::NoResponse),
            Err(RegisterError::client_fault("bad url")),
            Err(RegisterError::rejected(200, b"")),
            created(),
        ]);
        for _ in 0..5 {
            h.submit().await;
            assert!(!h.form.borrow().is_submitting);
            // Refill after the success path empties the fields
            h.form.borrow_mut().set_field(Field::Email, "ada@example.com");
        }

        let seen = h.api.seen_during_call.borrow();
        assert_eq!(seen.len(), 5);
        assert!(seen.iter().all(|state| state.is_submitting));
    }

    #[tokio::test]
    async fn test_resubmit_clears_previous_error() {
        let h = Harness::new(vec![Err(RegisterError::NoResponse), created()]);
        h.submit().await;
        assert!(h.form.borrow().error_message.is_some());

        assert_eq!(h.submit().await, SubmitOutcome::Registered);

        let seen = h.api.seen_during_call.borrow();
        assert!(seen[1].error_message.is_none());
        assert!(h.form.borrow().error_message.is_none());
    }

    #[tokio::test]
    async fn test_submit_while_in_flight_is_ignored() {
        let h = Harness::new(vec![created()]);
        h.form.borrow_mut().is_submitting = true;

        assert_eq!(h.submit().await, SubmitOutcome::Ignored);
        assert!(h.api.requests.borrow().is_empty());
        // The in-flight owner still holds the flag
        assert!(h.form.borrow().is_submitting);
    }

    #[tokio::test]
    async fn test_non_created_success_status_reports_error() {
        let h = Harness::new(vec![Err(RegisterError::rejected(200, b"{}"))]);
        h.submit().await;

        assert_eq!(
            h.form.borrow().error_message.as_deref(),
            Some(REGISTRATION_FAILED_MESSAGE)
        );
        assert!(h.visits.borrow().is_empty());
    }

    #[test]
    fn test_fields_locked_while_submitting() {
        let mut state = FormState::default();
        assert!(state.set_field(Field::Email, "a@b.c"));
        assert!(state.begin_submit().is_some());

        assert!(!state.set_field(Field::Email, "other@b.c"));
        assert_eq!(state.value(Field::Email), "a@b.c");
        assert!(state.begin_submit().is_none());

        state.end_submit();
        assert!(state.set_field(Field::Email, "other@b.c"));
    }

    #[test]
    fn test_destination_paths() {
        assert_eq!(Destination::Home.path(), "/home");
        assert_eq!(Destination::Login.path(), "/login");
    }

    mod signal_backed {
        use super::*;
        use crate::auth::AuthState;
        use dioxus::dioxus_core::{ScopeId, VirtualDom};
        use std::future::Future;
        use std::task::Context;

        fn app() -> Element {
            rsx! {}
        }

        struct InstantApi;

        impl AuthApi for InstantApi {
            async fn register(&self, _request: &RegistrationRequest) -> Result<Session, RegisterError> {
                created()
            }
        }

        /// Never answers, like a request still on the wire.
        struct StalledApi;

        impl AuthApi for StalledApi {
            async fn register(&self, _request: &RegistrationRequest) -> Result<Session, RegisterError> {
                std::future::pending::<Result<Session, RegisterError>>().await
            }
        }

        #[test]
        fn test_signal_form_and_auth_context_on_success() {
            let mut dom = VirtualDom::new(app);
            dom.rebuild_in_place();
            let kv = MemoryStore::new();
            let visits = Rc::new(RefCell::new(Vec::new()));

            let (outcome, state, auth_state) = dom.in_scope(ScopeId::ROOT, || {
                let form = Signal::new(filled_state());
                let auth = Signal::new(AuthState::default());
                let recorded = visits.clone();
                let registrar = Registrar::new(
                    InstantApi,
                    auth,
                    TokenStore::new(kv.clone()),
                    move |to: Destination| recorded.borrow_mut().push(to),
                );
                let outcome = futures::executor::block_on(registrar.submit(&form));
                let result = (
                    outcome,
                    FormState::clone(&form.peek()),
                    AuthState::clone(&auth.peek()),
                );
                result
            });

            assert_eq!(outcome, SubmitOutcome::Registered);
            assert_eq!(state, FormState::default());
            assert_eq!(auth_state.user, Some(ada()));
            assert_eq!(kv.get(store::TOKEN_KEY).as_deref(), Some("jwt-abc"));
            assert_eq!(*visits.borrow(), vec![Destination::Home]);
        }

        #[test]
        fn test_unmount_mid_request_releases_quietly() {
            let mut dom = VirtualDom::new(app);
            dom.rebuild_in_place();

            let (form, auth) = dom.in_scope(ScopeId::ROOT, || {
                (
                    Signal::new(filled_state()),
                    Signal::new(AuthState::default()),
                )
            });
            let registrar = Registrar::new(
                StalledApi,
                auth,
                TokenStore::new(MemoryStore::new()),
                |_: Destination| {},
            );
            let mut pending = Box::pin(registrar.submit(&form));
            let waker = futures::task::noop_waker();
            let mut cx = Context::from_waker(&waker);

            dom.in_scope(ScopeId::ROOT, || {
                assert!(pending.as_mut().poll(&mut cx).is_pending());
                assert!(form.peek().is_submitting);
            });

            // Unmount: the scope owning both signals goes away
            drop(dom);
            assert!(form.with_form(|state| state.is_submitting).is_none());

            // The guard runs against a dead signal and must not panic
            drop(pending);
        }
    }
}
