use thiserror::Error;

/// Unified error type for client/controller/config layers.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API request failed with status {status}")]
    Api { status: u16 },
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("missing identifier: {0}")]
    MissingId(String),
}

pub type Result<T> = std::result::Result<T, AdminError>;

impl AdminError {
    /// Short operator-facing description rendered in the notice banner.
    pub fn user_message(&self) -> String {
        match self {
            AdminError::Api { status: 404 } => "resource not found".into(),
            AdminError::Api { status: 400 } => "invalid request".into(),
            AdminError::Api { status } if *status >= 500 => "server error".into(),
            AdminError::Api { .. } | AdminError::Transport(_) => {
                "operation failed, please try again".into()
            }
            other => other.to_string(),
        }
    }
}

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Admin(#[from] AdminError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("prompt failed: {0}")]
    Prompt(String),
}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        CliError::Prompt(err.to_string())
    }
}
