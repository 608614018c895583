use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while turning a params file into a typed model.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Environment variable `{name}` referenced in params is not set")]
    UndefinedVariable { name: String },

    #[error("Failed to parse {target}: {source}")]
    Parse {
        target: &'static str,
        #[source]
        source: ParseSource,
    },
}

#[derive(Debug, Error)]
pub enum ParseSource {
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ParamsError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(target: &'static str, source: impl Into<ParseSource>) -> Self {
        Self::Parse {
            target,
            source: source.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
