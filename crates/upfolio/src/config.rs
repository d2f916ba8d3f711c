//! Runtime configuration.
//!
//! Credentials come from the environment (optionally via a `.env` file) and are
//! collected once into a [`Config`] that gets passed to every call.

use std::time::Duration;

use crate::error::{Error, Result};

pub const AUTHORIZE_URL: &str = "https://www.upwork.com/ab/account-security/oauth2/authorize";
pub const TOKEN_URL: &str = "https://www.upwork.com/api/v3/oauth2/token";
pub const GRAPHQL_URL: &str = "https://api.upwork.com/graphql";

pub const PROFILE_URL: &str = "https://www.upwork.com/freelancers/badarm19";
pub const SOURCE: &str = "upwork";

pub const DEFAULT_STATE: &str = "xyz";
pub const DEFAULT_OUTPUT: &str = "src/data/portfolio.json";

pub const TENANT_HEADER: &str = "X-Upwork-API-TenantId";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const CLIENT_ID_VAR: &str = "UPWORK_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "UPWORK_CLIENT_SECRET";
pub const REDIRECT_URI_VAR: &str = "UPWORK_REDIRECT_URI";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub authorize_url: String,
    pub token_url: String,
    pub graphql_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            authorize_url: AUTHORIZE_URL.to_string(),
            token_url: TOKEN_URL.to_string(),
            graphql_url: GRAPHQL_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub endpoints: Endpoints,
}

impl Config {
    pub fn new(client_id: &str, client_secret: &str, redirect_uri: &str) -> Self {
        Self {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            redirect_uri: redirect_uri.to_string(),
            endpoints: Endpoints::default(),
        }
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Read configuration from the process environment, loading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenv::dotenv() {
            log::debug!("loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// Blank values count as unset. All missing required variables are
    /// reported together.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let client_id = get(CLIENT_ID_VAR);
        let client_secret = get(CLIENT_SECRET_VAR);
        let redirect_uri = get(REDIRECT_URI_VAR);

        let (Some(client_id), Some(client_secret), Some(redirect_uri)) =
            (&client_id, &client_secret, &redirect_uri)
        else {
            let missing = [
                (CLIENT_ID_VAR, client_id.is_none()),
                (CLIENT_SECRET_VAR, client_secret.is_none()),
                (REDIRECT_URI_VAR, redirect_uri.is_none()),
            ]
            .into_iter()
            .filter_map(|(name, absent)| absent.then_some(name))
            .collect();
            return Err(Error::MissingConfig(missing));
        };

        let defaults = Endpoints::default();
        let endpoints = Endpoints {
            authorize_url: get("UPWORK_AUTHORIZE_URL").unwrap_or(defaults.authorize_url),
            token_url: get("UPWORK_TOKEN_URL").unwrap_or(defaults.token_url),
            graphql_url: get("UPWORK_GRAPHQL_URL").unwrap_or(defaults.graphql_url),
        };

        Ok(Self::new(client_id, client_secret, redirect_uri).with_endpoints(endpoints))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn reads_required_credentials() {
        let config = Config::from_lookup(lookup_from(&[
            (CLIENT_ID_VAR, "id"),
            (CLIENT_SECRET_VAR, "secret"),
            (REDIRECT_URI_VAR, "https://example.com/cb"),
        ]))
        .unwrap();
        assert_eq!(config.client_id, "id");
        assert_eq!(config.client_secret, "secret");
        assert_eq!(config.redirect_uri, "https://example.com/cb");
        assert_eq!(config.endpoints, Endpoints::default());
    }

    #[test]
    fn reports_every_missing_variable() {
        let err = Config::from_lookup(lookup_from(&[
            (CLIENT_ID_VAR, "id"),
            (CLIENT_SECRET_VAR, "   "),
        ]))
        .unwrap_err();
        match err {
            Error::MissingConfig(missing) => {
                assert_eq!(missing, vec![CLIENT_SECRET_VAR, REDIRECT_URI_VAR]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn endpoint_overrides_replace_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            (CLIENT_ID_VAR, "id"),
            (CLIENT_SECRET_VAR, "secret"),
            (REDIRECT_URI_VAR, "https://example.com/cb"),
            ("UPWORK_GRAPHQL_URL", "http://127.0.0.1:9000/graphql"),
            ("UPWORK_TOKEN_URL", ""),
        ]))
        .unwrap();
        assert_eq!(config.endpoints.graphql_url, "http://127.0.0.1:9000/graphql");
        assert_eq!(config.endpoints.token_url, TOKEN_URL);
        assert_eq!(config.endpoints.authorize_url, AUTHORIZE_URL);
    }
}
