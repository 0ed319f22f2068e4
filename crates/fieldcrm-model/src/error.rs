use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown user role: {0}")]
    UnknownRole(String),
    #[error("unknown dictionary kind: {0}")]
    UnknownDictionary(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
