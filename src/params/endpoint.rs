use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::ParamsError;

/// Retry policy attached to an endpoint. Unset fields stay `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_time_out: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_delay: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factor: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    #[serde(default, alias = "endpoint_type", skip_serializing_if = "String::is_empty")]
    pub endpoint_type: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Configuration>,
}

/// Production and sandbox endpoints of an API.
///
/// Accepts both the params-file spelling (`production`, `sandbox`) and the
/// API definition spelling (`production_endpoints`, `sandbox_endpoints`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointData {
    #[serde(default, alias = "endpoint_type", skip_serializing_if = "String::is_empty")]
    pub endpoint_type: String,
    #[serde(default, alias = "production_endpoints", skip_serializing_if = "Option::is_none")]
    pub production: Option<Endpoint>,
    #[serde(default, alias = "sandbox_endpoints", skip_serializing_if = "Option::is_none")]
    pub sandbox: Option<Endpoint>,
}

impl EndpointData {
    /// Parses the nested JSON returned by [`extract_endpoint_config`].
    pub fn from_endpoint_config(json: &str) -> Result<Self, ParamsError> {
        serde_json::from_str(json).map_err(|err| ParamsError::parse("endpoint config", err))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiIdentifier {
    pub provider_name: String,
    pub api_name: String,
    pub version: String,
}

impl fmt::Display for ApiIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.provider_name, self.api_name, self.version)
    }
}

#[derive(Debug, Deserialize)]
struct ApiEndpointConfig {
    #[serde(rename = "endpointConfig")]
    endpoint_config: String,
}

/// Pulls the raw `endpointConfig` string out of an API definition document.
///
/// The value is itself JSON and is returned without being opened.
pub fn extract_endpoint_config(bytes: &[u8]) -> Result<String, ParamsError> {
    let parsed: ApiEndpointConfig = serde_json::from_slice(bytes)
        .map_err(|err| ParamsError::parse("API endpoint config", err))?;
    Ok(parsed.endpoint_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const API_JSON: &str = r#"{
        "name": "PizzaShack",
        "endpointConfig": "{\"endpoint_type\":\"http\",\"production_endpoints\":{\"url\":\"https://prod.example.com\"},\"sandbox_endpoints\":{\"url\":\"https://sb.example.com\",\"config\":{\"retryDelay\":500,\"factor\":2}}}"
    }"#;

    #[test]
    fn extracts_raw_endpoint_config() {
        let raw = extract_endpoint_config(API_JSON.as_bytes()).expect("extract");
        assert!(raw.starts_with("{\"endpoint_type\":\"http\""));
    }

    #[test]
    fn missing_field_is_parse_error() {
        let err = extract_endpoint_config(br#"{"name": "PizzaShack"}"#).unwrap_err();
        assert!(matches!(err, ParamsError::Parse { .. }));
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let err = extract_endpoint_config(b"endpointConfig: {").unwrap_err();
        assert!(matches!(err, ParamsError::Parse { .. }));
    }

    #[test]
    fn nested_config_parses_into_endpoint_data() {
        let raw = extract_endpoint_config(API_JSON.as_bytes()).expect("extract");
        let data = EndpointData::from_endpoint_config(&raw).expect("parse");
        assert_eq!(data.endpoint_type, "http");
        assert_eq!(
            data.production.as_ref().and_then(|e| e.url.as_deref()),
            Some("https://prod.example.com")
        );
        let sandbox_config = data.sandbox.and_then(|e| e.config).expect("config");
        assert_eq!(sandbox_config.retry_time_out, None);
        assert_eq!(sandbox_config.retry_delay, Some(500));
        assert_eq!(sandbox_config.factor, Some(2));
    }

    #[test]
    fn unset_retry_fields_are_not_serialized() {
        let config = Configuration {
            retry_delay: Some(0),
            ..Configuration::default()
        };
        let yaml = serde_yaml::to_string(&config).expect("serialize");
        assert_eq!(yaml.trim(), "retryDelay: 0");
    }

    #[test]
    fn identifier_displays_provider_name_version() {
        let id: ApiIdentifier = serde_json::from_str(
            r#"{"providerName": "admin", "apiName": "PizzaShack", "version": "1.0.0"}"#,
        )
        .expect("parse");
        assert_eq!(id.to_string(), "admin-PizzaShack-1.0.0");
    }
}
