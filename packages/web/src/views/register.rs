//! Registration page view.
//!
//! The form is a discriminated union: the role selector decides which
//! identifier fields are rendered and which [`RoleProfile`] variant is
//! submitted. Platform admins are provisioned server-side and do not appear
//! here.

use api::{RegisterForm, RoleProfile, UserRole};
use dioxus::prelude::*;
use ui::{dashboard_path, use_auth, use_auth_client, DASHBOARD_PATH};

/// Roles that can sign themselves up; platform admins are provisioned
/// server-side.
const SELF_SERVICE_ROLES: [UserRole; 3] = [
    UserRole::Student,
    UserRole::Recruiter,
    UserRole::UniversityAdmin,
];

/// Register page component.
#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let client = use_auth_client();
    let nav = use_navigator();

    let mut role = use_signal(|| "student".to_string());
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut student_id = use_signal(String::new);
    let mut university_id = use_signal(String::new);
    let mut company_id = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already logged in: straight to the role's dashboard.
    let state = auth();
    if !state.loading && state.is_logged_in() {
        nav.replace(dashboard_path(state.role()));
        return rsx! {};
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();
            let cp = confirm_password();

            if n.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }
            if p != cp {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            let profile = match role().as_str() {
                "recruiter" => RoleProfile::Recruiter {
                    company_id: company_id().trim().to_string(),
                },
                "university_admin" => RoleProfile::UniversityAdmin {
                    university_id: university_id().trim().to_string(),
                },
                _ => RoleProfile::Student {
                    student_id: student_id().trim().to_string(),
                    university_id: university_id().trim().to_string(),
                },
            };

            loading.set(true);
            let form = RegisterForm {
                name: n,
                email: e,
                password: p,
                profile,
            };
            match client.register(form).await {
                Ok(_user) => {
                    // TODO: confirm with product whether registration should
                    // route per role the way login does; today it always
                    // lands on the generic dashboard.
                    nav.push(DASHBOARD_PATH);
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
            h1 { "Create account" }
            p { class: "auth-subtitle", "Join CampusHire" }

            form { class: "auth-form", onsubmit: handle_register,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                select {
                    class: "form-input",
                    value: role(),
                    onchange: move |evt: FormEvent| role.set(evt.value()),
                    for option_role in SELF_SERVICE_ROLES {
                        option { value: option_role.as_str(), "{option_role.label()}" }
                    }
                }

                input {
                    class: "form-input",
                    r#type: "text",
                    placeholder: "Full name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
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
                    placeholder: "Password (min 8 characters)",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                input {
                    class: "form-input",
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                // Role-specific identifiers.
                if role() == "student" {
                    input {
                        class: "form-input",
                        r#type: "text",
                        placeholder: "Student ID",
                        value: student_id(),
                        oninput: move |evt: FormEvent| student_id.set(evt.value()),
                    }
                }
                if role() == "student" || role() == "university_admin" {
                    input {
                        class: "form-input",
                        r#type: "text",
                        placeholder: "University ID",
                        value: university_id(),
                        oninput: move |evt: FormEvent| university_id.set(evt.value()),
                    }
                }
                if role() == "recruiter" {
                    input {
                        class: "form-input",
                        r#type: "text",
                        placeholder: "Company ID",
                        value: company_id(),
                        oninput: move |evt: FormEvent| company_id.set(evt.value()),
                    }
                }

                button {
                    class: "button button-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p { class: "auth-switch",
                "Already have an account? "
                Link { to: "/login", "Log in" }
            }
        }
    }
}
