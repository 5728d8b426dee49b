//! Outgoing registration payload.

use serde::{Deserialize, Serialize};

use super::user::FullName;

/// Body of `POST /users/register`.
///
/// ```json
/// { "fullname": { "firstname": "..", "lastname": ".." }, "email": "..", "password": ".." }
/// ```
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationRequest {
    pub fullname: FullName,
    pub email: String,
    pub password: String,
}

impl RegistrationRequest {
    pub fn new(
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            fullname: FullName::new(firstname, lastname),
            email: email.into(),
            password: password.into(),
        }
    }
}

// Hand-written so the password never reaches a log line.
impl std::fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("fullname", &self.fullname)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
