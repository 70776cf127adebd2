//! Generic dashboard router.
//!
//! `/dashboard` is where login-adjacent flows land when they do not know the
//! role-specific path (registration, unrecognized roles). A logged-in user
//! with a canonical role is forwarded to their own dashboard; anyone else
//! with a session sees a neutral page.

use dioxus::prelude::*;
use ui::{dashboard_path, use_auth, RouteGuard};

#[component]
pub fn DashboardHome() -> Element {
    rsx! {
        RouteGuard {
            DashboardRedirect {}
        }
    }
}

#[component]
fn DashboardRedirect() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let state = auth();
    if let Some(role) = state.role() {
        nav.replace(dashboard_path(Some(role)));
        return rsx! {};
    }

    rsx! {
        section { class: "dashboard",
            h1 { "Welcome" }
            p { "Your account has no dashboard assigned yet. Contact your administrator." }
        }
    }
}
