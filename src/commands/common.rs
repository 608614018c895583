use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::cli::CliArgs;
use crate::error::{AppError, ErrorKind};
use crate::output::{self, OutputFormat};
use crate::params::{self, ApiParams, Env};

pub fn load_env(args: &CliArgs) -> Result<Env> {
    Env::from_system(args.env_file.as_deref())
        .map_err(|err| AppError::new(ErrorKind::Io, format!("{:#}", err)).into())
}

pub fn output_format(args: &CliArgs) -> OutputFormat {
    let format = output::select_format(&args.output);
    tracing::debug!(format = format.as_str(), "output format selected");
    format
}

pub fn require_path<'a>(path: Option<&'a PathBuf>, what: &str) -> Result<&'a Path> {
    path.map(PathBuf::as_path)
        .ok_or_else(|| AppError::new(ErrorKind::Usage, format!("{} is required", what)).into())
}

/// Loads API params from a file, or from the conventional file in a directory.
pub fn load_api_params(path: &Path, env: &Env) -> Result<ApiParams> {
    let loaded = if path.is_dir() {
        params::load_api_params_from_dir(path, env)?
    } else {
        params::load_api_params(path, env)?
    };
    Ok(loaded)
}

pub fn flag_rows(flags: &[(&str, bool)]) -> Vec<(String, String)> {
    flags
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}
