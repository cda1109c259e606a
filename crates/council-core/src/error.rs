use thiserror::Error;

#[derive(Error, Debug)]
pub enum CouncilError {
    #[error("Unknown election status: {0}")]
    UnknownStatus(String),

    #[error("Election completed but no results were supplied")]
    MissingResults,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Command error: {0}")]
    Command(String),
}

pub type Result<T> = std::result::Result<T, CouncilError>;
