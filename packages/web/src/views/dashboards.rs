//! The four role dashboards.
//!
//! Each is wrapped in a [`RouteGuard`] restricted to its own role; a
//! logged-in user of another role who types the URL is bounced to their own
//! dashboard. The content itself is thin — the widgets behind these panels
//! ship separately.

use api::UserRole;
use dioxus::prelude::*;
use ui::{use_auth, RouteGuard};

#[component]
pub fn StudentDashboard() -> Element {
    rsx! {
        RouteGuard { allowed_roles: vec![UserRole::Student],
            DashboardPage {
                title: "Student Dashboard",
                cards: vec![
                    ("Open positions", "Jobs matching your profile"),
                    ("Applications", "Track your submissions"),
                    ("Interviews", "Your upcoming schedule"),
                ],
            }
        }
    }
}

#[component]
pub fn RecruiterDashboard() -> Element {
    rsx! {
        RouteGuard { allowed_roles: vec![UserRole::Recruiter],
            DashboardPage {
                title: "Recruiter Dashboard",
                cards: vec![
                    ("Active postings", "Positions you are hiring for"),
                    ("Candidates", "Applicants in your pipeline"),
                    ("Universities", "Campuses you recruit from"),
                ],
            }
        }
    }
}

#[component]
pub fn UniversityDashboard() -> Element {
    rsx! {
        RouteGuard { allowed_roles: vec![UserRole::UniversityAdmin],
            DashboardPage {
                title: "University Dashboard",
                cards: vec![
                    ("Students", "Registered students on the platform"),
                    ("Placements", "Offers and acceptances this season"),
                    ("Recruiters", "Companies hiring on campus"),
                ],
            }
        }
    }
}

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        RouteGuard { allowed_roles: vec![UserRole::PlatformAdmin],
            DashboardPage {
                title: "Platform Administration",
                cards: vec![
                    ("Universities", "Tenant institutions"),
                    ("Recruiters", "Registered companies"),
                    ("Accounts", "Users across all tenants"),
                ],
            }
        }
    }
}

#[component]
fn DashboardPage(title: String, cards: Vec<(&'static str, &'static str)>) -> Element {
    let auth = use_auth();
    let greeting = auth()
        .user()
        .map(|user| format!("Signed in as {}", user.display_name()));

    rsx! {
        section { class: "dashboard",
            h1 { "{title}" }
            if let Some(greeting) = greeting {
                p { class: "dashboard-greeting", "{greeting}" }
            }
            div { class: "dashboard-cards",
                for (card_title, hint) in cards {
                    div { class: "dashboard-card",
                        h2 { "{card_title}" }
                        p { "{hint}" }
                    }
                }
            }
        }
    }
}
