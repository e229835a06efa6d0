use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaginatorError {
    #[error("invalid configuration: {field} = {value}")]
    InvalidConfiguration { field: &'static str, value: i128 },
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

impl PaginatorError {
    pub fn invalid(field: &'static str, value: impl Into<i128>) -> Self {
        PaginatorError::InvalidConfiguration {
            field,
            value: value.into(),
        }
    }

    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, PaginatorError::InvalidConfiguration { .. })
    }
}

pub type Result<T, E = PaginatorError> = std::result::Result<T, E>;
