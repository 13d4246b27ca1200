use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Message has no reply target")]
    NoReplyTarget,

    #[error("No handler for command: {name}")]
    UnknownCommand { name: String },

    #[error("{service} returned HTTP {status}")]
    Backend { service: String, status: u16 },

    #[error("Could not find URL in {service} response: {reason}")]
    UrlNotFound { service: String, reason: String },

    #[error("Host callback failed: {reason}")]
    Host { reason: String },

    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Custom result type
pub type AppResult<T> = Result<T, AppError>;

/// Error helpers
impl AppError {
    pub fn unknown_command(name: &str) -> Self {
        Self::UnknownCommand {
            name: name.to_string(),
        }
    }

    pub fn backend(service: &str, status: u16) -> Self {
        Self::Backend {
            service: service.to_string(),
            status,
        }
    }

    pub fn url_not_found(service: &str, reason: &str) -> Self {
        Self::UrlNotFound {
            service: service.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn host(reason: &str) -> Self {
        Self::Host {
            reason: reason.to_string(),
        }
    }

    pub fn validation(field: &str, message: &str) -> Self {
        Self::Validation {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    /// User-input failures are reported as a chat notice and logged quietly;
    /// everything else is an operational error.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AppError::NoReplyTarget | AppError::UnknownCommand { .. }
        )
    }

    /// Parse-level failures: the service answered ok but the body did not
    /// match its documented shape.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, AppError::UrlNotFound { .. } | AppError::Json(_))
    }
}
