use serde::Serialize;
use serde_json::json;

use crate::params::Environment;

pub fn emit_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}

pub fn emit_json_value(value: &serde_json::Value, pretty: bool) -> anyhow::Result<String> {
    emit_json(value, pretty)
}

pub fn error_json(message: &str, kind: &str) -> serde_json::Value {
    json!({
        "error": {
            "message": message,
            "kind": kind,
        }
    })
}

pub fn environment_to_json(env: &Environment) -> anyhow::Result<serde_json::Value> {
    Ok(json!({
        "name": env.name,
        "configs": serde_json::to_value(&env.config)?,
    }))
}
