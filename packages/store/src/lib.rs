//! # Store crate — persisted credentials
//!
//! The browser keeps exactly two strings across page loads: the access token
//! and the refresh token. [`TokenStore`] abstracts over where they live so
//! the session core can be tested natively:
//!
//! - [`WebTokens`] — browser `localStorage` (web platform, `web` feature)
//! - [`MemoryTokens`] — in-memory, for tests and non-web builds

pub mod tokens;

mod memory;
pub use memory::MemoryTokens;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web::WebTokens;

pub use tokens::{TokenPair, TokenStore};
