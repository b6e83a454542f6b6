use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("no saved draft: run 'folio draft record' first")]
    DraftNotFound,

    #[error("saved draft expired ({age_hours}h old) and was discarded")]
    DraftExpired { age_hours: i64 },

    #[error("invalid answers: {0}")]
    InvalidAnswers(String),

    #[error("unknown step '{0}'")]
    UnknownStep(String),

    #[error("unknown social icon '{0}'")]
    UnknownIcon(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FolioError>;
