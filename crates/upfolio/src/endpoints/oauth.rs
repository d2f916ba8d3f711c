//! OAuth2 authorization-code flow against Upwork.
//!
//! The authorize URL is opened by a human in a browser; only the token
//! exchange is performed by this program.

use reqwest::{Client as ReqwestClient, Url};

use super::setup::ensure_success;
use crate::config::Config;
use crate::error::Result;
use crate::models::TokenResponse;

/// Build the provider authorize URL for `state`.
pub fn build_authorize_url(config: &Config, state: &str) -> Result<Url> {
    let params = [
        ("response_type", "code"),
        ("client_id", config.client_id.as_str()),
        ("redirect_uri", config.redirect_uri.as_str()),
        ("state", state),
    ];
    Ok(Url::parse_with_params(&config.endpoints.authorize_url, &params)?)
}

/// Exchange an authorization code for tokens. Any non-2xx status is an error.
pub async fn exchange_code(
    client: &ReqwestClient,
    config: &Config,
    code: &str,
) -> Result<TokenResponse> {
    let form = [
        ("grant_type", "authorization_code"),
        ("client_id", config.client_id.as_str()),
        ("client_secret", config.client_secret.as_str()),
        ("code", code.trim()),
        ("redirect_uri", config.redirect_uri.as_str()),
    ];
    log::info!("exchanging authorization code at {}", config.endpoints.token_url);
    let response = client
        .post(&config.endpoints.token_url)
        .form(&form)
        .send()
        .await?;
    let tokens: TokenResponse = ensure_success(response).await?.json().await?;
    log::debug!(
        "token response: type={:?} expires_in={:?} refresh_token={}",
        tokens.token_type,
        tokens.expires_in,
        tokens.refresh_token.is_some()
    );
    Ok(tokens)
}
