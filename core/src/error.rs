use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid config: {field} {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PortfolioError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig { field, reason: reason.into() }
    }
}

pub type PortfolioResult<T> = Result<T, PortfolioError>;
