use jstdata_core::{ClientError, CoreError, ValidationError};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<CoreError> for CliError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(error) => Self::Validation(error),
            CoreError::Client(error) => Self::Client(error),
            CoreError::Serialization(error) => Self::Serialization(error),
        }
    }
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Client(error) => match error {
                ClientError::InvalidInput { .. } => 2,
                ClientError::CredentialMissing | ClientError::InvalidCredential { .. } => 3,
                ClientError::Transport { .. } | ClientError::MalformedResponse { .. } => 4,
                ClientError::NotImplemented { .. } => 6,
            },
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}
