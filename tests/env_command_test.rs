mod common;

use predicates::prelude::*;
use tempfile::TempDir;

use common::{API_PARAMS, paramctl, stdout_json, write};

#[test]
fn env_prints_configs_of_named_environment() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "api_params.yaml", API_PARAMS);

    let mut cmd = paramctl(dir.path());
    cmd.args(["env", "dev", "--json"])
        .arg(&path)
        .env("BASE_URL", "https://api.example.com");
    let value = stdout_json(&mut cmd);

    assert_eq!(value["name"], "dev");
    assert_eq!(
        value["configs"]["endpoints"]["production"]["config"]["retryTimeOut"],
        3
    );
}

#[test]
fn env_with_empty_configs() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "api_params.yaml", API_PARAMS);

    let mut cmd = paramctl(dir.path());
    cmd.args(["env", "prod", "--json"])
        .arg(&path)
        .env("BASE_URL", "https://api.example.com");
    let value = stdout_json(&mut cmd);

    assert_eq!(value["name"], "prod");
    assert!(value["configs"].as_object().unwrap().is_empty());
}

#[test]
fn env_table_flattens_config_paths() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "api_params.yaml", API_PARAMS);

    paramctl(dir.path())
        .args(["env", "dev", "--markdown"])
        .arg(&path)
        .env("BASE_URL", "https://api.example.com")
        .assert()
        .success()
        .stdout(predicate::str::contains("endpoints.production.url"))
        .stdout(predicate::str::contains("https://api.example.com/apis"));
}

#[test]
fn unknown_environment_is_not_found() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "api_params.yaml", API_PARAMS);

    for name in ["staging", "Prod"] {
        let output = paramctl(dir.path())
            .args(["env", name, "--json"])
            .arg(&path)
            .env("BASE_URL", "https://api.example.com")
            .assert()
            .failure()
            .get_output()
            .stderr
            .clone();
        let value: serde_json::Value = serde_json::from_slice(&output).expect("json");
        assert_eq!(value["error"]["kind"], "NotFound");
        assert!(
            value["error"]["message"]
                .as_str()
                .unwrap()
                .contains("available: dev, prod")
        );
    }
}

#[test]
fn env_requires_a_path() {
    let dir = TempDir::new().unwrap();

    paramctl(dir.path())
        .args(["env", "dev"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PATH is required"));
}
