use std::fmt;

use crate::params::ParamsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Substitution,
    Parse,
    NotFound,
    Usage,
    Internal,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Io => "Io",
            ErrorKind::Substitution => "Substitution",
            ErrorKind::Parse => "Parse",
            ErrorKind::NotFound => "NotFound",
            ErrorKind::Usage => "Usage",
            ErrorKind::Internal => "Internal",
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub kind: ErrorKind,
    pub message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl From<&ParamsError> for ErrorKind {
    fn from(err: &ParamsError) -> Self {
        match err {
            ParamsError::Io { .. } => ErrorKind::Io,
            ParamsError::UndefinedVariable { .. } => ErrorKind::Substitution,
            ParamsError::Parse { .. } => ErrorKind::Parse,
        }
    }
}

pub fn classify_error(err: &anyhow::Error) -> ErrorKind {
    if let Some(app) = err.downcast_ref::<AppError>() {
        return app.kind;
    }
    if let Some(params) = err.chain().find_map(|cause| cause.downcast_ref::<ParamsError>()) {
        return params.into();
    }
    ErrorKind::Internal
}
