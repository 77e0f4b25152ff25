use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormsError {
    #[error("Admin API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Admin API returned {status} for {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FormsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FormsError::Http(_) | FormsError::UnexpectedStatus { .. } => ErrorCategory::Network,
            FormsError::Csv(_) | FormsError::Serialization(_) => ErrorCategory::Data,
            FormsError::Io(_) => ErrorCategory::Storage,
            FormsError::InvalidUrl(_)
            | FormsError::ConfigValidationError { .. }
            | FormsError::InvalidConfigValueError { .. }
            | FormsError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FormsError::Http(_) => ErrorSeverity::Medium,
            // 5xx 可以重試，4xx 不行
            FormsError::UnexpectedStatus { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            FormsError::UnexpectedStatus { .. } => ErrorSeverity::High,
            FormsError::Csv(_) | FormsError::Serialization(_) => ErrorSeverity::High,
            FormsError::Io(_) => ErrorSeverity::Critical,
            FormsError::InvalidUrl(_)
            | FormsError::ConfigValidationError { .. }
            | FormsError::InvalidConfigValueError { .. }
            | FormsError::MissingConfigError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            FormsError::Http(_) => {
                "Check that the admin site is reachable and retry".to_string()
            }
            FormsError::UnexpectedStatus { status, .. } if *status == 401 || *status == 403 => {
                "The admin endpoints require a logged-in staff session".to_string()
            }
            FormsError::UnexpectedStatus { .. } => {
                "Verify admin.base_url points at the festival admin site".to_string()
            }
            FormsError::Csv(_) => {
                "Make sure the export has a header row and comma-separated columns".to_string()
            }
            FormsError::Serialization(_) => {
                "The response was not the expected JSON shape".to_string()
            }
            FormsError::Io(_) => "Check file paths and permissions".to_string(),
            FormsError::InvalidUrl(_) => "Use an absolute http(s) URL".to_string(),
            FormsError::ConfigValidationError { field, .. }
            | FormsError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' entry in the configuration file", field)
            }
            FormsError::MissingConfigError { field } => {
                format!("Add '{}' to the configuration file or pass it on the command line", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the admin site: {}", self),
            ErrorCategory::Data => format!("Could not read the data: {}", self),
            ErrorCategory::Storage => format!("File access failed: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, FormsError>;
