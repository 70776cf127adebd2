//! Authentication context and hooks for the UI.

use std::rc::Rc;

use auth::{AuthClient, AuthState};
use dioxus::prelude::*;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
type PlatformTokens = store::WebTokens;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
type PlatformTokens = store::MemoryTokens;

/// The concrete session client the app runs on: HTTP backend plus the
/// platform-appropriate token store (localStorage on web, in-memory
/// elsewhere).
pub type AppAuthClient = AuthClient<api::HttpAuthApi, PlatformTokens>;

/// Build a session client for this platform.
pub fn make_auth_client(config: api::ApiConfig) -> AppAuthClient {
    AuthClient::new(api::HttpAuthApi::new(config), PlatformTokens::new())
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Get the session client for performing login/register/logout.
pub fn use_auth_client() -> Rc<AppAuthClient> {
    use_context::<Rc<AppAuthClient>>()
}

/// How often the profile is re-checked against the backend on web.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
const PROFILE_REFRESH_SECS: u64 = 300;

/// Provider component that owns the session client and mirrors its state
/// into a signal. Wrap the app with this component to enable authentication.
#[component]
pub fn AuthProvider(#[props(default)] config: api::ApiConfig, children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    let client = use_context_provider(|| {
        let client = Rc::new(make_auth_client(config.clone()));
        client.subscribe(move |state| auth_state.set(state.clone()));
        client
    });
    use_context_provider(|| auth_state);

    // Settle the session once on mount.
    let restore_client = client.clone();
    let _ = use_resource(move || {
        let client = restore_client.clone();
        async move {
            client.restore().await;
        }
    });

    // Periodic profile re-check so a revoked account drops out without a
    // reload (web only).
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        let refresh_client = client.clone();
        use_effect(move || {
            let client = refresh_client.clone();
            spawn(async move {
                loop {
                    gloo_timers::future::sleep(std::time::Duration::from_secs(
                        PROFILE_REFRESH_SECS,
                    ))
                    .await;
                    if client.state().is_logged_in() {
                        client.refresh_profile().await;
                    }
                }
            });
        });
    }

    rsx! {
        {children}
    }
}

/// Button that drops the session and returns to the landing page.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let client = use_auth_client();
    let nav = use_navigator();

    let onclick = move |_| {
        client.logout();
        nav.replace("/");
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
