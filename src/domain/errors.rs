/// Simplified error system - two categories are all this app needs
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Rejected before any computation (empty symbol etc.)
    Validation(String),
    /// Unexpected failure inside the generation/derivation pipeline
    Processing(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation Error: {}", msg),
            AppError::Processing(msg) => write!(f, "Processing Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

pub type AppResult<T> = Result<T, AppError>;
