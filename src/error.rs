use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContourError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid curve: {0}")]
    InvalidCurve(String),

    #[error("Ring {index} has no vertices")]
    EmptyRing { index: usize },
}

pub type Result<T> = std::result::Result<T, ContourError>;
