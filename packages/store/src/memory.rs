use std::sync::{Arc, Mutex};

use crate::tokens::{TokenPair, TokenStore};

/// In-memory TokenStore for testing and non-web builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokens {
    tokens: Arc<Mutex<Option<TokenPair>>>,
}

impl MemoryTokens {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokens {
    fn load(&self) -> Option<TokenPair> {
        self.tokens.lock().unwrap().clone()
    }

    fn save(&self, tokens: &TokenPair) {
        *self.tokens.lock().unwrap() = Some(tokens.clone());
    }

    fn clear(&self) {
        *self.tokens.lock().unwrap() = None;
    }
}
