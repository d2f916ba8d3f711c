use reqwest::Client as ReqwestClient;

use super::graphql::graphql_request;
use crate::config::Config;
use crate::error::Result;
use crate::models::{PortfolioData, RawProjectList};

const PORTFOLIO_QUERY: &str = r#"
    query {
      user {
        talentProfile {
          projectList {
            totalProjects
            projects {
              id
              title
              description
              thumbnail
              thumbnailOriginal
              projectUrl
              attachments {
                id
                type
                title
                description
                imageSmall
                imageMiddle
                imageLarge
                link
              }
            }
          }
        }
      }
    }
"#;

/// Fetch the authenticated user's portfolio project list.
///
/// Any missing level of the response yields an empty list rather than an error.
pub async fn portfolio_raw(
    client: &ReqwestClient,
    config: &Config,
    access_token: &str,
    tenant_id: Option<&str>,
) -> Result<RawProjectList> {
    let res = graphql_request::<PortfolioData>(
        client,
        config,
        access_token,
        PORTFOLIO_QUERY,
        None,
        tenant_id,
    )
    .await?;
    Ok(project_list(res.data))
}

fn project_list(data: Option<PortfolioData>) -> RawProjectList {
    data.and_then(|d| d.user)
        .and_then(|u| u.talent_profile)
        .and_then(|t| t.project_list)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn data(value: serde_json::Value) -> Option<PortfolioData> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn missing_levels_yield_empty_list() {
        for value in [
            json!(null),
            json!({}),
            json!({"user": null}),
            json!({"user": {"talentProfile": null}}),
            json!({"user": {"talentProfile": {"projectList": null}}}),
        ] {
            let list = project_list(data(value));
            assert!(list.projects.is_none());
            assert!(list.total_projects.is_none());
        }
    }

    #[test]
    fn extracts_project_list() {
        let list = project_list(data(json!({"user": {"talentProfile": {"projectList": {
            "totalProjects": 2,
            "projects": [{"id": "1", "title": "One"}, {"id": "2", "attachments": null}]
        }}}})));
        assert_eq!(list.total_projects, Some(2));
        assert_eq!(list.projects.unwrap().len(), 2);
    }
}
