use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid `{name}` value: {reason}")]
    InvalidConfig { name: String, reason: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    pub fn invalid_config(name: &str, reason: impl ToString) -> Self {
        ApiError::InvalidConfig {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}
