#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("vertex not found: {vertex}")]
    NotFound { vertex: String },

    #[error("invalid state: {message}")]
    InvalidState { message: String },

    #[error("result undefined: {reason}")]
    Undefined { reason: &'static str },
}

impl Error {
    pub fn not_found(vertex: &impl std::fmt::Debug) -> Self {
        Self::NotFound {
            vertex: format!("{vertex:?}"),
        }
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
