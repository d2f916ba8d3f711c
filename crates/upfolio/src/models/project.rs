//! Raw project shapes as returned by the talent profile query.
//!
//! Every field is optional: the API omits or nulls fields freely and none of
//! that should fail deserialization.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    #[serde(default)]
    pub user: Option<UserNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserNode {
    #[serde(default)]
    pub talent_profile: Option<TalentProfile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentProfile {
    #[serde(default)]
    pub project_list: Option<RawProjectList>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProjectList {
    #[serde(default)]
    pub total_projects: Option<u64>,
    #[serde(default)]
    pub projects: Option<Vec<RawProject>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProject {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub thumbnail_original: Option<String>,
    #[serde(default)]
    pub project_url: Option<String>,
    #[serde(default)]
    pub attachments: Option<Vec<RawAttachment>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAttachment {
    #[serde(default)]
    pub id: Value,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_small: Option<String>,
    #[serde(default)]
    pub image_middle: Option<String>,
    #[serde(default)]
    pub image_large: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}
