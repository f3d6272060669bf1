use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    #[error("unknown industry '{code}'. Select one of the loaded industry profiles")]
    InvalidIndustry { code: String },

    #[error("invalid amount for {field}: {reason}")]
    InvalidAmount { field: String, reason: String },

    #[error("failed to load industry profiles from {path}: {reason}")]
    ProfilesLoad { path: PathBuf, reason: String },

    #[error("invalid industry profiles: {0}")]
    ProfilesInvalid(String),

    #[error("question must not be empty")]
    EmptyQuestion,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CalcError {
    pub(crate) fn invalid_amount(field: &str, reason: impl Into<String>) -> Self {
        CalcError::InvalidAmount {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
