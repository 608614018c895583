use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;

use super::endpoint::EndpointData;
use super::error::ParamsError;

const ENDPOINTS_KEY: &str = "endpoints";

/// One deployment target named in a params file.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Environment {
    #[serde(default)]
    pub name: String,
    #[serde(
        rename = "configs",
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub config: BTreeMap<String, Value>,
}

impl Environment {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: BTreeMap::new(),
        }
    }

    /// Typed view of the `endpoints` entry in this environment's configs.
    pub fn endpoints(&self) -> Result<Option<EndpointData>, ParamsError> {
        let Some(raw) = self.config.get(ENDPOINTS_KEY) else {
            return Ok(None);
        };
        if raw.is_null() {
            return Ok(None);
        }
        serde_yaml::from_value(raw.clone())
            .map(Some)
            .map_err(|err| ParamsError::parse("environment endpoints", err))
    }
}

/// Params for a single API: its environments and import behaviour.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ApiParams {
    #[serde(default)]
    pub environments: Vec<Environment>,
    #[serde(default)]
    pub deploy: ApiVcsParams,
}

impl ApiParams {
    /// First environment whose name matches exactly. An empty name never
    /// matches, even against an entry that omits `name`.
    pub fn get_env(&self, name: &str) -> Option<&Environment> {
        if name.is_empty() {
            return None;
        }
        self.environments.iter().find(|env| env.name == name)
    }

    pub fn get_env_mut(&mut self, name: &str) -> Option<&mut Environment> {
        if name.is_empty() {
            return None;
        }
        self.environments.iter_mut().find(|env| env.name == name)
    }

    pub fn env_names(&self) -> impl Iterator<Item = &str> {
        self.environments.iter().map(|env| env.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ApiProductParams {
    #[serde(default)]
    pub deploy: ApiProductVcsParams,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ApplicationParams {
    #[serde(default)]
    pub deploy: ApplicationVcsParams,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ApiVcsParams {
    #[serde(default)]
    pub import: ApiImportParams,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ApiProductVcsParams {
    #[serde(default)]
    pub import: ApiProductImportParams,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ApplicationVcsParams {
    #[serde(default)]
    pub import: ApplicationImportParams,
}

// Import flag blocks reject unknown keys so that one artifact kind's params
// never load as another's.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ApiImportParams {
    pub update: bool,
    pub preserve_provider: bool,
    pub rotate_revision: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ApiProductImportParams {
    pub import_apis: bool,
    pub update_apis: bool,
    pub update_api_product: bool,
    pub preserve_provider: bool,
    pub rotate_revision: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ApplicationImportParams {
    pub update: bool,
    pub target_owner: String,
    pub preserve_owner: bool,
    pub skip_keys: bool,
    pub skip_subscriptions: bool,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}
