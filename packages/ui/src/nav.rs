//! Role-aware navigation: where each role lives and which links it sees.
//!
//! This is the navigation policy layer, kept apart from the auth operations
//! on purpose: the session core returns a user, and this module decides what
//! that means for routing. Both functions are pure and total over the role
//! sum type.

use api::UserRole;
use dioxus::prelude::*;

use crate::icons::{
    FaBriefcase, FaBuildingColumns, FaCircleUser, FaGear, FaGraduationCap, FaHouse,
    FaRightToBracket, FaUserPlus,
};
use crate::provider::{use_auth, LogoutButton};
use crate::Icon;

/// Public landing page.
pub const LANDING_PATH: &str = "/";
/// Login page, where the guard sends unauthenticated visitors.
pub const LOGIN_PATH: &str = "/login";
/// Generic dashboard router; also the post-registration landing.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// The canonical dashboard for a role.
///
/// `None` (logged in but the role did not parse to a canonical value) falls
/// back to the generic dashboard router rather than failing.
pub fn dashboard_path(role: Option<UserRole>) -> &'static str {
    match role {
        Some(UserRole::Student) => "/dashboard/student",
        Some(UserRole::Recruiter) => "/dashboard/recruiter",
        Some(UserRole::UniversityAdmin) => "/dashboard/university",
        Some(UserRole::PlatformAdmin) => "/dashboard/admin",
        None => DASHBOARD_PATH,
    }
}

/// One entry in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
    /// Icon identifier, resolved by [`Navbar`].
    pub icon: &'static str,
}

const fn link(path: &'static str, label: &'static str, icon: &'static str) -> NavLink {
    NavLink { path, label, icon }
}

/// The ordered link set for a role; `None` (logged out, or a role that did
/// not parse) gets the public set.
pub fn nav_links(role: Option<UserRole>) -> Vec<NavLink> {
    match role {
        None => vec![
            link(LANDING_PATH, "Home", "house"),
            link(LOGIN_PATH, "Log in", "right-to-bracket"),
            link("/register", "Sign up", "user-plus"),
        ],
        Some(UserRole::Student) => vec![
            link("/dashboard/student", "My Dashboard", "graduation-cap"),
            link(LANDING_PATH, "Home", "house"),
        ],
        Some(UserRole::Recruiter) => vec![
            link("/dashboard/recruiter", "Recruiting", "briefcase"),
            link(LANDING_PATH, "Home", "house"),
        ],
        Some(UserRole::UniversityAdmin) => vec![
            link("/dashboard/university", "University", "building-columns"),
            link(LANDING_PATH, "Home", "house"),
        ],
        Some(UserRole::PlatformAdmin) => vec![
            link("/dashboard/admin", "Administration", "gear"),
            link(LANDING_PATH, "Home", "house"),
        ],
    }
}

/// Top navigation bar: brand, the role's link set, and the user chip.
#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let state = auth();
    let links = nav_links(state.role());

    rsx! {
        nav { class: "navbar",
            span { class: "navbar-brand", "CampusHire" }
            div { class: "navbar-links",
                for entry in links {
                    Link {
                        to: entry.path,
                        class: "navbar-link",
                        NavIcon { name: entry.icon }
                        span { "{entry.label}" }
                    }
                }
            }
            if let Some(user) = state.user() {
                div { class: "navbar-user",
                    span { class: "navbar-user-name", "{user.display_name()}" }
                    LogoutButton { class: "navbar-logout" }
                }
            }
        }
    }
}

#[component]
fn NavIcon(name: String) -> Element {
    match name.as_str() {
        "house" => rsx! { Icon { icon: FaHouse, width: 14, height: 14 } },
        "right-to-bracket" => rsx! { Icon { icon: FaRightToBracket, width: 14, height: 14 } },
        "user-plus" => rsx! { Icon { icon: FaUserPlus, width: 14, height: 14 } },
        "graduation-cap" => rsx! { Icon { icon: FaGraduationCap, width: 14, height: 14 } },
        "briefcase" => rsx! { Icon { icon: FaBriefcase, width: 14, height: 14 } },
        "building-columns" => rsx! { Icon { icon: FaBuildingColumns, width: 14, height: 14 } },
        "gear" => rsx! { Icon { icon: FaGear, width: 14, height: 14 } },
        _ => rsx! { Icon { icon: FaCircleUser, width: 14, height: 14 } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_has_a_distinct_dashboard() {
        let paths: Vec<&str> = UserRole::ALL
            .iter()
            .map(|role| dashboard_path(Some(*role)))
            .collect();
        for (i, a) in paths.iter().enumerate() {
            for b in &paths[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_unrecognized_role_falls_back_to_generic_dashboard() {
        assert_eq!(dashboard_path(None), DASHBOARD_PATH);
    }

    #[test]
    fn test_public_links_for_logged_out() {
        let links = nav_links(None);
        assert_eq!(links[0].path, LANDING_PATH);
        assert!(links.iter().any(|l| l.path == LOGIN_PATH));
        assert!(links.iter().any(|l| l.path == "/register"));
    }

    #[test]
    fn test_each_role_leads_with_its_own_dashboard() {
        for role in UserRole::ALL {
            let links = nav_links(Some(role));
            assert_eq!(links[0].path, dashboard_path(Some(role)), "role {role}");
        }
    }
}
