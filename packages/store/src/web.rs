//! # localStorage-backed token store — browser-side persistence
//!
//! [`WebTokens`] is the [`TokenStore`] implementation used on the **web
//! platform**. It keeps the two credentials under the well-known keys
//! `accessToken` / `refreshToken` in `window.localStorage`.
//!
//! All methods silently swallow storage errors (returning `None` for reads,
//! doing nothing for writes). A browser with storage disabled or full
//! degrades to "no stored session" rather than crashing — the authoritative
//! session state always lives on the backend.

use crate::tokens::{TokenPair, TokenStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};

/// localStorage-backed TokenStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebTokens;

impl WebTokens {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStore for WebTokens {
    fn load(&self) -> Option<TokenPair> {
        let storage = Self::storage()?;
        let access = storage.get_item(ACCESS_TOKEN_KEY).ok()??;
        let refresh = storage.get_item(REFRESH_TOKEN_KEY).ok()??;
        Some(TokenPair { access, refresh })
    }

    fn save(&self, tokens: &TokenPair) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(ACCESS_TOKEN_KEY, &tokens.access);
            let _ = storage.set_item(REFRESH_TOKEN_KEY, &tokens.refresh);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
            let _ = storage.remove_item(REFRESH_TOKEN_KEY);
        }
    }
}
