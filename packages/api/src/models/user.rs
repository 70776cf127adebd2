//! # User record as seen by the client
//!
//! [`UserInfo`] is the client-safe projection of an authenticated principal,
//! exactly as the backend returns it from `/auth/profile`, `/auth/login` and
//! `/auth/register`. The `role` field is kept as the raw string the backend
//! sent (its casing is not trustworthy); [`UserInfo::role`] runs it through
//! the validated parsing boundary.

use serde::{Deserialize, Serialize};

use super::role::UserRole;

/// An authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Raw role string; normalize through [`UserInfo::role`] before use.
    #[serde(alias = "userType")]
    pub role: String,
    #[serde(default)]
    pub email_verified: bool,
}

impl UserInfo {
    /// The canonical role, if the raw string parses to one.
    pub fn role(&self) -> Option<UserRole> {
        UserRole::parse(&self.role)
    }

    /// Display name, falling back to the email address.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}
