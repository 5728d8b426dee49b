//! # User model as the backend returns it
//!
//! [`UserInfo`] is the client-side projection of a registered user. The
//! backend serialises its primary key as `_id`; `id` is accepted as well so the
//! type also reads payloads from services that use the plain name. Unknown
//! fields are ignored.
//!
//! [`FullName`] is shared with the outgoing registration request, which nests
//! the two name parts under `fullname` in exactly the same shape.

use serde::{Deserialize, Serialize};

/// First and last name, nested as `fullname` on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FullName {
    pub firstname: String,
    pub lastname: String,
}

impl FullName {
    pub fn new(firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
        }
    }
}

/// User information returned by the registration endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub fullname: FullName,
    pub email: String,
}

impl UserInfo {
    /// "First Last", falling back to the email when both name parts are blank.
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.fullname.firstname, self.fullname.lastname);
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_string()
        }
    }
}
