use reqwest::Client as ReqwestClient;

use super::graphql::graphql_request;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{CompanySelector, CompanySelectorData};

const COMPANY_SELECTOR_QUERY: &str = r#"
    query {
      companySelector {
        items { title organizationId }
      }
    }
"#;

/// Resolve the tenant (organization) id to scope later queries with.
///
/// The first organization returned wins. No organizations is not an error.
pub async fn tenant_id(
    client: &ReqwestClient,
    config: &Config,
    access_token: &str,
) -> Result<Option<String>> {
    let res = graphql_request::<CompanySelectorData>(
        client,
        config,
        access_token,
        COMPANY_SELECTOR_QUERY,
        None,
        None,
    )
    .await?;
    let selector = res.data.and_then(|d| d.company_selector);
    first_organization_id(selector)
}

fn first_organization_id(selector: Option<CompanySelector>) -> Result<Option<String>> {
    let Some(first) = selector
        .and_then(|s| s.items)
        .and_then(|items| items.into_iter().next())
    else {
        log::info!("no organizations on this account, continuing without tenant");
        return Ok(None);
    };
    let id = first
        .organization_id()
        .ok_or(Error::MissingField("organizationId"))?;
    log::info!(
        "using tenant {} ({})",
        id,
        first.title.as_deref().unwrap_or("untitled")
    );
    Ok(Some(id))
}
