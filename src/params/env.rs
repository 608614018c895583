use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Snapshot of environment variables used as the substitution source.
#[derive(Debug, Clone, Default)]
pub struct Env {
    vars: HashMap<String, String>,
}

impl Env {
    /// Captures the process environment, after loading a dotenv file.
    ///
    /// An explicit `env_file` must exist. Without one, `.env` in the working
    /// directory is loaded if present. Variables already set in the process
    /// are never overridden by dotenv entries.
    pub fn from_system(env_file: Option<&Path>) -> Result<Self> {
        match env_file {
            Some(path) => {
                dotenvy::from_path(path)
                    .with_context(|| format!("Failed to load env file: {}", path.display()))?;
            }
            None => load_optional(dotenvy::dotenv())?,
        }
        let vars = std::env::vars().collect();
        Ok(Self { vars })
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut vars = HashMap::new();
        for (k, v) in pairs {
            vars.insert((*k).to_string(), (*v).to_string());
        }
        Self { vars }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}

/// A missing default `.env` is fine; a malformed one is not.
fn load_optional(loaded: dotenvy::Result<PathBuf>) -> Result<()> {
    match loaded {
        Ok(path) => {
            tracing::debug!("Loaded env file {}", path.display());
            Ok(())
        }
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(err).context("Failed to load .env"),
    }
}
