//! Session data returned by a successful registration.

use serde::{Deserialize, Serialize};

use crate::models::UserInfo;

/// The authenticated identity plus the bearer token for later requests.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub user: UserInfo,
    pub token: String,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("user", &self.user)
            .field("token", &"<redacted>")
            .finish()
    }
}
