//! The persisted credential pair and the storage trait behind it.

/// Storage key for the access token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Storage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// The two credentials a logged-in browser context holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    /// Short-lived bearer credential sent with authenticated requests.
    pub access: String,
    /// Long-lived renewal credential.
    pub refresh: String,
}

impl TokenPair {
    pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            access: access.into(),
            refresh: refresh.into(),
        }
    }
}

/// Where the token pair persists across page loads.
///
/// `load` yields a pair only when **both** values are present — a lone token
/// is not a valid session and is treated as no data. Implementations swallow
/// storage failures and degrade to "nothing stored"; the session core then
/// lands in the logged-out state rather than crashing.
pub trait TokenStore {
    fn load(&self) -> Option<TokenPair>;
    fn save(&self, tokens: &TokenPair);
    fn clear(&self);
}
