use reqwest::Client as ReqwestClient;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::setup::ensure_success;
use crate::config::{Config, TENANT_HEADER};
use crate::error::Result;
use crate::models::{GraphqlPayload, GraphqlResponse};

/// POST a GraphQL query with bearer auth and an optional tenant header.
///
/// Errors reported inside the GraphQL envelope are logged, not raised; the
/// caller decides what a missing `data` means.
pub async fn graphql_request<T>(
    client: &ReqwestClient,
    config: &Config,
    access_token: &str,
    query: &str,
    variables: Option<Value>,
    tenant_id: Option<&str>,
) -> Result<GraphqlResponse<T>>
where
    T: DeserializeOwned,
{
    let payload = GraphqlPayload {
        query,
        variables: variables.unwrap_or_else(|| Value::Object(Default::default())),
    };
    let mut request = client
        .post(&config.endpoints.graphql_url)
        .bearer_auth(access_token)
        .json(&payload);
    if let Some(tenant_id) = tenant_id.filter(|t| !t.is_empty()) {
        request = request.header(TENANT_HEADER, tenant_id);
    }
    let response = ensure_success(request.send().await?).await?;
    let res: GraphqlResponse<T> = response.json().await?;
    for err in res.errors.iter().flatten() {
        log::warn!("graphql error: {} (path: {:?})", err.message, err.path);
    }
    Ok(res)
}
