//! Session and observable auth state.

use api::{UserInfo, UserRole};
use store::TokenPair;

/// A logged-in browser context: both tokens and a hydrated user.
///
/// Either the whole session exists or none of it does — there is no valid
/// partial state, which is why the fields live in one struct.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub tokens: TokenPair,
    pub user: UserInfo,
}

/// What the rest of the application sees.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// True while the startup session restore is still in flight.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// The settled logged-out state.
    pub fn logged_out() -> Self {
        Self {
            session: None,
            loading: false,
        }
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.session.as_ref().map(|session| &session.user)
    }

    /// The current user's canonical role, when present and recognized.
    pub fn role(&self) -> Option<UserRole> {
        self.user().and_then(UserInfo::role)
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }
}
