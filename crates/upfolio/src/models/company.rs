use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySelectorData {
    #[serde(default)]
    pub company_selector: Option<CompanySelector>,
}

#[derive(Debug, Deserialize)]
pub struct CompanySelector {
    #[serde(default)]
    pub items: Option<Vec<Company>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(default)]
    pub title: Option<String>,
    // string in practice, but numeric ids have been seen
    #[serde(default)]
    pub organization_id: Option<Value>,
}

impl Company {
    pub fn organization_id(&self) -> Option<String> {
        match self.organization_id.as_ref()? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}
