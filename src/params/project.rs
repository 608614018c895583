use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum ProjectType {
    #[serde(rename = "API")]
    Api,
    #[serde(rename = "API Product")]
    ApiProduct,
    #[serde(rename = "Application")]
    Application,
    #[default]
    #[serde(rename = "None")]
    None,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Api => "API",
            ProjectType::ApiProduct => "API Product",
            ProjectType::Application => "Application",
            ProjectType::None => "None",
        }
    }
}

/// Working-copy project tracked for deployment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectParams {
    #[serde(rename = "type", default)]
    pub project_type: ProjectType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub absolute_path: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub relative_path: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub nick_name: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub failed_during_previous_deploy: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub deleted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<ProjectMetaData>,
}

impl ProjectParams {
    /// Failed projects that still exist are retried on the next deploy.
    pub fn needs_redeploy(&self) -> bool {
        self.failed_during_previous_deploy && !self.deleted
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct ProjectMetaData {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
}

/// Owner, name and version of a project artifact.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct ProjectInfo {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub owner: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
}

fn is_false(value: &bool) -> bool {
    !*value
}
