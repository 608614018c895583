use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use super::env::Env;
use super::error::ParamsError;
use super::schema::{ApiParams, ApiProductParams, ApplicationParams};
use super::substitute::substitute;

/// File name looked up when API params are loaded from a project directory.
pub const PARAMS_FILE: &str = "api_params.yaml";

/// Reads `path` and substitutes `${VAR}` / `$VAR` references from `env`.
pub fn load_substituted(path: &Path, env: &Env) -> Result<String, ParamsError> {
    tracing::debug!(path = %path.display(), "reading params file");
    let content = read_file(path)?;
    substitute(&content, |name| env.get(name))
}

fn read_file(path: &Path) -> Result<String, ParamsError> {
    let mut file = File::open(path).map_err(|err| ParamsError::io(path, err))?;
    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|err| ParamsError::io(path, err))?;
    Ok(content)
}

pub fn load_api_params(path: &Path, env: &Env) -> Result<ApiParams, ParamsError> {
    parse_file(path, env, "API params")
}

/// Loads [`PARAMS_FILE`] from a project root directory.
pub fn load_api_params_from_dir(dir: &Path, env: &Env) -> Result<ApiParams, ParamsError> {
    let path = params_file_in(dir);
    tracing::info!("Loading params from {}", path.display());
    load_api_params(&path, env)
}

pub fn load_api_product_params(path: &Path, env: &Env) -> Result<ApiProductParams, ParamsError> {
    parse_file(path, env, "API Product params")
}

pub fn load_application_params(
    path: &Path,
    env: &Env,
) -> Result<ApplicationParams, ParamsError> {
    parse_file(path, env, "Application params")
}

pub fn params_file_in(dir: &Path) -> PathBuf {
    dir.join(PARAMS_FILE)
}

fn parse_file<T: DeserializeOwned>(
    path: &Path,
    env: &Env,
    target: &'static str,
) -> Result<T, ParamsError> {
    let content = load_substituted(path, env)?;
    let parsed = serde_yaml::from_str(&content).map_err(|err| ParamsError::parse(target, err))?;
    tracing::debug!(path = %path.display(), target, "parsed params file");
    Ok(parsed)
}
