//! Login page view with the email/password form.

use dioxus::prelude::*;
use ui::{dashboard_path, use_auth, use_auth_client};

/// Login page component.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let client = use_auth_client();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already logged in: straight to the role's dashboard.
    let state = auth();
    if !state.loading && state.is_logged_in() {
        nav.replace(dashboard_path(state.role()));
        return rsx! {};
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() || p.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            loading.set(true);
            match client.login(e, p).await {
                Ok(user) => {
                    nav.push(dashboard_path(user.role()));
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.display_message()));
                }
            }
        });
    };

    rsx! {
        section { class: "auth-page",
            h1 { "Welcome back" }
            p { class: "auth-subtitle", "Log in to CampusHire" }

            form { class: "auth-form", onsubmit: handle_login,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    class: "form-input",
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    class: "form-input",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "button button-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Logging in..." } else { "Log in" }
                }
            }

            p { class: "auth-switch",
                "New to CampusHire? "
                Link { to: "/register", "Create an account" }
            }
        }
    }
}
