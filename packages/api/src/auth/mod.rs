//! Registration against the backend auth service.
//!
//! [`AuthApi`] is the seam the form talks through; [`HttpAuthApi`] is the
//! production implementation. Tests substitute their own.

mod http;
mod session;

pub use http::{session_from_response, HttpAuthApi};
pub use session::Session;

use crate::error::RegisterError;
use crate::models::RegistrationRequest;

/// Async interface to the registration backend.
///
/// No `Send` bound: on wasm the future wraps a browser `fetch` and lives on the
/// single UI thread.
pub trait AuthApi {
    fn register(
        &self,
        request: &RegistrationRequest,
    ) -> impl std::future::Future<Output = Result<Session, RegisterError>>;
}

impl<A: AuthApi + ?Sized> AuthApi for &A {
    fn register(
        &self,
        request: &RegistrationRequest,
    ) -> impl std::future::Future<Output = Result<Session, RegisterError>> {
        (**self).register(request)
    }
}
