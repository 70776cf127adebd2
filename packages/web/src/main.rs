use dioxus::prelude::*;

use ui::{AuthProvider, Navbar};
use views::{
    AdminDashboard, DashboardHome, Landing, Login, RecruiterDashboard, Register,
    StudentDashboard, UniversityDashboard,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppShell)]
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/dashboard")]
    DashboardHome {},
    #[route("/dashboard/student")]
    StudentDashboard {},
    #[route("/dashboard/recruiter")]
    RecruiterDashboard {},
    #[route("/dashboard/university")]
    UniversityDashboard {},
    #[route("/dashboard/admin")]
    AdminDashboard {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Shared chrome: navbar on top, the routed view below.
#[component]
fn AppShell() -> Element {
    rsx! {
        Navbar {}
        main { class: "app-main",
            Outlet::<Route> {}
        }
    }
}
