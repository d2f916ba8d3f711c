use serde::Deserialize;

use crate::error::{Error, Result};

/// Body returned by the OAuth2 token endpoint.
///
/// Only `access_token` is used; the rest is logged at debug level.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl TokenResponse {
    pub fn access_token(&self) -> Result<&str> {
        self.access_token
            .as_deref()
            .ok_or(Error::MissingField("access_token"))
    }
}
