//! This crate contains the shared auth and navigation UI for the workspace.

pub mod guard;
pub mod nav;
mod provider;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub use guard::{guard_decision, GuardDecision, RouteGuard};
pub use nav::{
    dashboard_path, nav_links, NavLink, Navbar, DASHBOARD_PATH, LANDING_PATH, LOGIN_PATH,
};
pub use provider::{
    make_auth_client, use_auth, use_auth_client, AppAuthClient, AuthProvider, LogoutButton,
};

pub use auth::AuthState;
