#![allow(dead_code)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};

pub const API_PARAMS: &str = "\
environments:
  - name: dev
    configs:
      endpoints:
        production:
          url: ${BASE_URL}/apis
          config:
            retryTimeOut: 3
  - name: prod
    configs: {}
deploy:
  import:
    update: true
";

pub const APP_PARAMS: &str = "\
deploy:
  import:
    update: true
    targetOwner: $APP_OWNER
    skipKeys: true
";

/// Command running in `dir` so no stray `.env` is picked up.
pub fn paramctl(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("paramctl");
    cmd.current_dir(dir).env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

pub fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(&path, content).expect("write fixture");
    path
}

pub fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("json")
}

pub fn stderr_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().failure().get_output().stderr.clone();
    serde_json::from_slice(&output).expect("json")
}
