use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde_json::json;

use crate::cli::{CliArgs, InitArgs};
use crate::commands::common;
use crate::error::{AppError, ErrorKind};
use crate::output::{OutputFormat, json as json_out};
use crate::params::PARAMS_FILE;

const DEFAULT_ENVIRONMENTS: [&str; 2] = ["dev", "prod"];

pub fn run(args: &CliArgs, cmd: &InitArgs) -> Result<()> {
    let format = common::output_format(args);

    let environments = if cmd.environments.is_empty() {
        DEFAULT_ENVIRONMENTS.iter().map(|s| s.to_string()).collect()
    } else {
        cmd.environments.clone()
    };
    for name in &environments {
        validate_env_name(name)?;
    }

    let target = resolve_target_path(cmd.path.as_ref());

    if target.exists() && !cmd.force {
        return Err(AppError::new(
            ErrorKind::Usage,
            format!(
                "Params file already exists: {} (use --force to overwrite)",
                target.display()
            ),
        )
        .into());
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    let template = render_params_template(&environments);
    fs::write(&target, template)?;
    tracing::info!("Wrote params template to {}", target.display());

    if args.quiet {
        return Ok(());
    }

    if matches!(format, OutputFormat::Json) {
        let payload = json!({
            "path": target.display().to_string(),
            "created": true,
            "overwritten": cmd.force,
            "environments": environments,
        });
        let body = json_out::emit_json_value(&payload, true)?;
        println!("{}", body);
    } else {
        println!("Wrote params to {}", target.display());
    }

    Ok(())
}

fn resolve_target_path(path: Option<&PathBuf>) -> PathBuf {
    if let Some(path) = path {
        if path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| matches!(ext, "yaml" | "yml"))
        {
            return path.clone();
        }
        return path.join(PARAMS_FILE);
    }

    Path::new(PARAMS_FILE).to_path_buf()
}

fn validate_env_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        return Ok(());
    }
    Err(AppError::new(
        ErrorKind::Usage,
        format!(
            "Invalid environment name '{}': use letters, digits, '-', '_' or '.'",
            name
        ),
    )
    .into())
}

/// Variable prefix for an environment, e.g. `dev-eu` -> `DEV_EU`.
fn var_prefix(name: &str) -> String {
    let prefix: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    if prefix.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", prefix)
    } else {
        prefix
    }
}

fn render_environment(name: &str) -> String {
    let prefix = var_prefix(name);
    format!(
        r#"  - name: "{name}"
    configs:
      endpoints:
        production:
          url: ${{{prefix}_PRODUCTION_URL}}
          config:
            # Retry policy; omit a key to leave it unset.
            retryTimeOut: 3
            retryDelay: 1000
            factor: 2
        sandbox:
          url: ${{{prefix}_SANDBOX_URL}}
"#
    )
}

fn render_params_template(environments: &[String]) -> String {
    let envs = environments
        .iter()
        .map(|name| render_environment(name))
        .collect::<String>();
    format!(
        r#"# paramctl deployment params
# Environment variable references in braces are resolved when the file is
# loaded; an unset variable fails the load.

environments:
{envs}
deploy:
  import:
    # update replaces an existing API instead of failing.
    update: true
    # preserveProvider keeps the provider recorded in the artifact.
    preserveProvider: true
    # rotateRevision deletes the oldest revision when the limit is reached.
    rotateRevision: false
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Env, load_api_params};

    #[test]
    fn var_prefix_is_shell_safe() {
        assert_eq!(var_prefix("dev"), "DEV");
        assert_eq!(var_prefix("dev-eu.1"), "DEV_EU_1");
        assert_eq!(var_prefix("1st"), "_1ST");
    }

    #[test]
    fn rejects_names_that_break_yaml() {
        assert!(validate_env_name("prod").is_ok());
        assert!(validate_env_name("").is_err());
        assert!(validate_env_name("a: b").is_err());
    }

    #[test]
    fn target_path_defaults_to_params_file() {
        assert_eq!(resolve_target_path(None), PathBuf::from(PARAMS_FILE));
        let explicit = PathBuf::from("deploy/params.yml");
        assert_eq!(resolve_target_path(Some(&explicit)), explicit);
        let dir = PathBuf::from("project");
        assert_eq!(
            resolve_target_path(Some(&dir)),
            PathBuf::from("project").join(PARAMS_FILE)
        );
    }

    #[test]
    fn template_loads_with_variables_set() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(PARAMS_FILE);
        let envs = vec!["dev".to_string(), "qa".to_string()];
        fs::write(&path, render_params_template(&envs)).expect("write");

        let env = Env::from_pairs(&[
            ("DEV_PRODUCTION_URL", "https://dev.example.com"),
            ("DEV_SANDBOX_URL", "https://dev-sb.example.com"),
            ("QA_PRODUCTION_URL", "https://qa.example.com"),
            ("QA_SANDBOX_URL", "https://qa-sb.example.com"),
        ]);
        let params = load_api_params(&path, &env).expect("load template");
        assert_eq!(params.env_names().collect::<Vec<_>>(), ["dev", "qa"]);
        assert!(params.deploy.import.update);

        let qa = params.get_env("qa").expect("qa");
        let endpoints = qa.endpoints().expect("endpoints").expect("present");
        assert_eq!(
            endpoints.sandbox.and_then(|e| e.url).as_deref(),
            Some("https://qa-sb.example.com")
        );
    }

    #[test]
    fn template_without_variables_fails_substitution() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(PARAMS_FILE);
        fs::write(&path, render_params_template(&["dev".to_string()])).expect("write");
        let err = load_api_params(&path, &Env::default()).unwrap_err();
        assert!(err.to_string().contains("DEV_PRODUCTION_URL"));
    }
}
