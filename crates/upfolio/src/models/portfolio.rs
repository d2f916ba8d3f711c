use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A project as written to the website's data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Value,
    pub title: String,
    pub description: String,
    pub project_url: String,
    pub images: Vec<String>,
}

/// The output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub source: String,
    pub profile_url: String,
    pub fetched_at: String,
    pub total_projects: u64,
    pub projects: Vec<Project>,
}
