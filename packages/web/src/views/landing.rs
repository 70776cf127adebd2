//! Public landing page.

use dioxus::prelude::*;
use ui::{dashboard_path, use_auth};

#[component]
pub fn Landing() -> Element {
    let auth = use_auth();
    let state = auth();

    rsx! {
        section { class: "landing",
            h1 { "CampusHire" }
            p { class: "landing-tagline",
                "One place for students, recruiters and universities to run campus placements."
            }
            div { class: "landing-actions",
                if state.is_logged_in() {
                    Link { to: dashboard_path(state.role()), class: "button button-primary",
                        "Go to your dashboard"
                    }
                } else {
                    Link { to: "/login", class: "button button-primary", "Log in" }
                    Link { to: "/register", class: "button button-outline", "Create an account" }
                }
            }
        }
    }
}
