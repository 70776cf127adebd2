//! # Auth crate — the session core
//!
//! Owns "who is logged in". [`AuthClient`] is a dependency-injected session
//! store: it is generic over the backend ([`api::AuthApi`]) and the token
//! persistence ([`store::TokenStore`]), holds the single [`AuthState`], and
//! notifies subscribers on every change. The UI layer wraps it in a Dioxus
//! signal; tests drive it against a scripted backend and in-memory tokens.
//!
//! All session mutations are atomic from the caller's perspective: tokens
//! and user are written together or not at all, and a generation counter
//! discards in-flight responses that were overtaken by a later operation
//! (a logout during a slow restore wins).

mod client;
mod session;

pub use client::AuthClient;
pub use session::{AuthState, Session};
