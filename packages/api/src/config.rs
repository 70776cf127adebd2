//! Client configuration.

use serde::{Deserialize, Serialize};

/// Where the REST backend lives.
///
/// The default (empty base URL) targets the origin the app was served from,
/// which is what every deployed environment uses; a non-empty value such as
/// `"http://localhost:4000"` points a dev build at a local backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub base_url: String,
}

impl ApiConfig {
    /// Config targeting an explicit backend origin.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        // Endpoint paths already start with a slash.
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }
}
