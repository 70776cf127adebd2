//! Route guard for protected views.
//!
//! [`guard_decision`] is the whole policy as a pure function so it can be
//! tested without a renderer; [`RouteGuard`] binds it to the auth signal and
//! the navigator. The decision is recomputed on every change of the session,
//! the loading flag, or the declared role set.

use api::UserRole;
use auth::AuthState;
use dioxus::prelude::*;

use crate::nav::{dashboard_path, LANDING_PATH, LOGIN_PATH};
use crate::provider::use_auth;

/// What the guard should do for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session restore still in flight: show a neutral indicator, no redirect.
    Wait,
    /// Nobody is logged in: go to the login page.
    RedirectLogin,
    /// The user may see this view.
    Render,
    /// Logged in but not allowed here: go to the given path, render nothing.
    Redirect(&'static str),
}

/// Decide what to do with a protected view.
///
/// `allowed` of `None` means the view is open to any logged-in user. A user
/// whose role is outside the allowed set is sent to their own dashboard; a
/// user whose role does not parse at all is sent to the landing page.
pub fn guard_decision(state: &AuthState, allowed: Option<&[UserRole]>) -> GuardDecision {
    if state.loading {
        return GuardDecision::Wait;
    }
    let Some(user) = state.user() else {
        return GuardDecision::RedirectLogin;
    };
    let Some(allowed) = allowed else {
        return GuardDecision::Render;
    };
    match user.role() {
        Some(role) if allowed.contains(&role) => GuardDecision::Render,
        Some(role) => GuardDecision::Redirect(dashboard_path(Some(role))),
        None => {
            tracing::warn!(raw = %user.role, "unrecognized role on a protected view");
            GuardDecision::Redirect(LANDING_PATH)
        }
    }
}

/// Wrapper that only renders its children for sessions whose role is in the
/// allowed set.
#[component]
pub fn RouteGuard(
    /// Roles that may view the children; omit to allow any logged-in user.
    #[props(default)]
    allowed_roles: Option<Vec<UserRole>>,
    children: Element,
) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let decision = guard_decision(&auth(), allowed_roles.as_deref());

    // Redirects run as an effect, re-evaluated when the session or the
    // declared role set changes.
    use_effect(use_reactive!(|(allowed_roles,)| {
        match guard_decision(&auth(), allowed_roles.as_deref()) {
            GuardDecision::RedirectLogin => {
                nav.replace(LOGIN_PATH);
            }
            GuardDecision::Redirect(path) => {
                nav.replace(path);
            }
            GuardDecision::Wait | GuardDecision::Render => {}
        }
    }));

    match decision {
        GuardDecision::Wait => rsx! {
            div { class: "guard-loading", "Loading..." }
        },
        GuardDecision::Render => rsx! {
            {children}
        },
        // Redirect pending; render nothing.
        GuardDecision::RedirectLogin | GuardDecision::Redirect(_) => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use api::UserInfo;
    use auth::Session;
    use store::TokenPair;

    use super::*;

    fn logged_in(role: &str) -> AuthState {
        AuthState {
            session: Some(Session {
                tokens: TokenPair::new("acc", "ref"),
                user: UserInfo {
                    id: "u-1".to_string(),
                    email: "u@example.com".to_string(),
                    name: None,
                    role: role.to_string(),
                    email_verified: true,
                },
            }),
            loading: false,
        }
    }

    #[test]
    fn test_waits_while_loading() {
        let state = AuthState::default();
        assert_eq!(
            guard_decision(&state, Some(&[UserRole::Student])),
            GuardDecision::Wait
        );
    }

    #[test]
    fn test_redirects_unauthenticated_to_login() {
        let state = AuthState::logged_out();
        assert_eq!(guard_decision(&state, None), GuardDecision::RedirectLogin);
    }

    #[test]
    fn test_renders_when_no_role_restriction_declared() {
        let state = logged_in("Student");
        assert_eq!(guard_decision(&state, None), GuardDecision::Render);
    }

    #[test]
    fn test_renders_iff_role_in_allowed_set() {
        let state = logged_in("Student");
        assert_eq!(
            guard_decision(&state, Some(&[UserRole::Student, UserRole::Recruiter])),
            GuardDecision::Render
        );
        assert_eq!(
            guard_decision(&state, Some(&[UserRole::Recruiter])),
            GuardDecision::Redirect("/dashboard/student")
        );
    }

    #[test]
    fn test_university_admin_spelling_mismatch_still_authorizes() {
        // Role arrives as "UniversityAdmin"; the view's role set was written
        // as "universityadmin". Both parse to the same canonical role.
        let state = logged_in("UniversityAdmin");
        let allowed = [UserRole::parse("universityadmin").unwrap()];
        assert_eq!(guard_decision(&state, Some(&allowed)), GuardDecision::Render);
    }

    #[test]
    fn test_wrong_role_is_sent_to_its_own_dashboard() {
        let state = logged_in("PlatformAdmin");
        assert_eq!(
            guard_decision(&state, Some(&[UserRole::Student])),
            GuardDecision::Redirect("/dashboard/admin")
        );
    }

    #[test]
    fn test_unrecognized_role_is_sent_to_landing() {
        let state = logged_in("Wizard");
        assert_eq!(
            guard_decision(&state, Some(&[UserRole::Student])),
            GuardDecision::Redirect(LANDING_PATH)
        );
    }
}
