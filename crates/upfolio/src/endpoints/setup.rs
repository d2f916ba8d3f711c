use reqwest::{Client as ReqwestClient, Response};

use crate::config::REQUEST_TIMEOUT;
use crate::error::{Error, Result};

/// Build the HTTP client used for every request of a run.
pub fn httpclient() -> Result<ReqwestClient> {
    let client = ReqwestClient::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Pass 2xx responses through; turn anything else into [`Error::Status`].
pub async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    log::debug!("{} -> {}", response.url(), status);
    if status.is_success() {
        return Ok(response);
    }
    let url = response.url().to_string();
    let body = response.text().await.unwrap_or_default();
    Err(Error::Status { url, status, body })
}
