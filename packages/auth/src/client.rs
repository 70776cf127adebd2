//! The session store and the operations that mutate it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use api::{ApiError, AuthApi, AuthResponse, LoginRequest, RegisterForm, UserInfo};
use store::{TokenPair, TokenStore};

use crate::session::{AuthState, Session};

type Subscriber = Box<dyn FnMut(&AuthState)>;

/// Single source of truth for the current session.
///
/// Mutations go through exactly one path ([`AuthClient::set_state`]) so the
/// session is never observable half-populated. Every operation that settles
/// the session advances a generation counter; `restore` and
/// `refresh_profile` capture the counter before their network call and drop
/// the response if another operation moved it in the meantime — a stale
/// restore must not resurrect a session after logout.
pub struct AuthClient<A, T> {
    api: A,
    tokens: T,
    state: Mutex<AuthState>,
    generation: AtomicU64,
    subscribers: Mutex<Vec<Subscriber>>,
}

impl<A: AuthApi, T: TokenStore> AuthClient<A, T> {
    /// A fresh client in the `loading` state; call [`AuthClient::restore`]
    /// once at application start to settle it.
    pub fn new(api: A, tokens: T) -> Self {
        Self {
            api,
            tokens,
            state: Mutex::new(AuthState::default()),
            generation: AtomicU64::new(0),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AuthState {
        self.state.lock().unwrap().clone()
    }

    /// Register a callback invoked with every state change. Callbacks may
    /// mutate their captured state (a UI signal, a counter).
    pub fn subscribe(&self, subscriber: impl FnMut(&AuthState) + 'static) {
        self.subscribers.lock().unwrap().push(Box::new(subscriber));
    }

    fn set_state(&self, next: AuthState) {
        *self.state.lock().unwrap() = next.clone();
        for subscriber in self.subscribers.lock().unwrap().iter_mut() {
            subscriber(&next);
        }
    }

    fn generation_now(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn advance_generation(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Exchange the persisted access token for a hydrated session.
    ///
    /// Invoked once at application start. Never fails: any problem (no
    /// stored tokens, network error, rejected token) degrades to the
    /// logged-out state, clearing whatever was persisted.
    pub async fn restore(&self) {
        let generation = self.generation_now();

        let Some(tokens) = self.tokens.load() else {
            // Nothing (or only half a pair) stored; settle without a
            // network call and drop any stray leftover value.
            if generation == self.generation_now() {
                self.tokens.clear();
                self.set_state(AuthState::logged_out());
            }
            return;
        };

        match self.api.profile(&tokens.access).await {
            Ok(user) => {
                if generation != self.generation_now() {
                    tracing::debug!("discarding stale session restore");
                    return;
                }
                tracing::debug!(user = %user.id, "session restored");
                self.set_state(AuthState {
                    session: Some(Session { tokens, user }),
                    loading: false,
                });
            }
            Err(error) => {
                if generation != self.generation_now() {
                    tracing::debug!("discarding stale session restore");
                    return;
                }
                tracing::debug!(%error, "session restore failed, logging out");
                self.tokens.clear();
                self.set_state(AuthState::logged_out());
            }
        }
    }

    /// Sign in with email and password.
    ///
    /// On success the tokens are persisted and the session is set in one
    /// step; the returned [`UserInfo`] lets the caller pick a redirect
    /// target. On failure the session is left exactly as it was.
    pub async fn login(&self, email: String, password: String) -> Result<UserInfo, ApiError> {
        let request = LoginRequest { email, password };
        let response = self.api.login(&request).await?;
        Ok(self.install_session(response))
    }

    /// Create an account and sign in with the returned credentials.
    pub async fn register(&self, form: RegisterForm) -> Result<UserInfo, ApiError> {
        let request = form.into_request();
        let response = self.api.register(&request).await?;
        Ok(self.install_session(response))
    }

    fn install_session(&self, response: AuthResponse) -> UserInfo {
        self.advance_generation();
        let tokens = TokenPair::new(response.access_token, response.refresh_token);
        self.tokens.save(&tokens);
        let user = response.user;
        tracing::info!(user = %user.id, role = %user.role, "signed in");
        self.set_state(AuthState {
            session: Some(Session {
                tokens,
                user: user.clone(),
            }),
            loading: false,
        });
        user
    }

    /// Drop the session and the persisted tokens, synchronously.
    pub fn logout(&self) {
        self.advance_generation();
        self.tokens.clear();
        self.set_state(AuthState::logged_out());
        tracing::info!("signed out");
    }

    /// Re-fetch the profile for the current session.
    ///
    /// A rejected credential logs the user out like a failed restore; a
    /// transient failure keeps the session untouched.
    pub async fn refresh_profile(&self) {
        let generation = self.generation_now();
        let Some(tokens) = self.tokens.load() else {
            return;
        };

        match self.api.profile(&tokens.access).await {
            Ok(user) => {
                if generation != self.generation_now() {
                    return;
                }
                self.set_state(AuthState {
                    session: Some(Session { tokens, user }),
                    loading: false,
                });
            }
            Err(error) if error.is_auth_failure() => {
                if generation != self.generation_now() {
                    return;
                }
                tracing::debug!(%error, "credential rejected on refresh, logging out");
                self.tokens.clear();
                self.set_state(AuthState::logged_out());
            }
            Err(error) => {
                tracing::debug!(%error, "profile refresh failed, keeping session");
            }
        }
    }
}
