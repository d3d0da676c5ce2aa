use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Missing configuration: {field}")]
    MissingConfig { field: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Video search failed: {message}")]
    Search { message: String },

    #[error("Transcript fetch failed: {message}")]
    Transcript { message: String },

    #[error("Recipe synthesis failed: {message}")]
    Synthesis { message: String },

    #[error("Publishing failed: {message}")]
    Publish { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Search,
    Transcript,
    Synthesis,
    Publish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ScoutError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScoutError::MissingConfig { .. } | ScoutError::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
            ScoutError::Api(_) | ScoutError::Io(_) | ScoutError::Serialization(_) => {
                ErrorCategory::Network
            }
            ScoutError::Search { .. } => ErrorCategory::Search,
            ScoutError::Transcript { .. } => ErrorCategory::Transcript,
            ScoutError::Synthesis { .. } => ErrorCategory::Synthesis,
            ScoutError::Publish { .. } => ErrorCategory::Publish,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ScoutError::MissingConfig { .. } | ScoutError::InvalidConfigValue { .. } => {
                ErrorSeverity::Critical
            }
            ScoutError::Api(_) | ScoutError::Io(_) | ScoutError::Serialization(_) => {
                ErrorSeverity::Medium
            }
            ScoutError::Search { .. }
            | ScoutError::Transcript { .. }
            | ScoutError::Synthesis { .. }
            | ScoutError::Publish { .. } => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScoutError::MissingConfig { field } => {
                format!("Missing required configuration: {}", field)
            }
            ScoutError::InvalidConfigValue { field, reason, .. } => {
                format!("Invalid value for {}: {}", field, reason)
            }
            ScoutError::Api(e) => format!("A network request failed: {}", e),
            ScoutError::Io(e) => format!("An IO operation failed: {}", e),
            ScoutError::Serialization(e) => format!("An API response could not be parsed: {}", e),
            ScoutError::Search { message } => format!("Video search failed: {}", message),
            ScoutError::Transcript { message } => format!("Transcript fetch failed: {}", message),
            ScoutError::Synthesis { message } => format!("Recipe synthesis failed: {}", message),
            ScoutError::Publish { message } => format!("Saving to Notion failed: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ScoutError::MissingConfig { field } => {
                format!("Set {} in your environment or .env file", field)
            }
            ScoutError::InvalidConfigValue { field, .. } => {
                format!("Adjust the {} value and try again", field)
            }
            ScoutError::Api(_) => "Check your network connection and try again".to_string(),
            ScoutError::Io(_) => "Check file permissions and terminal input".to_string(),
            ScoutError::Serialization(_) => {
                "The upstream API may have changed its response format".to_string()
            }
            ScoutError::Search { .. } => {
                "Verify GOOGLE_API_KEY and try a different dish name".to_string()
            }
            ScoutError::Transcript { .. } => {
                "Try a more popular dish; its videos are more likely to have captions".to_string()
            }
            ScoutError::Synthesis { .. } => {
                "Verify GOOGLE_API_KEY has access to the Gemini API and retry".to_string()
            }
            ScoutError::Publish { .. } => {
                "Verify NOTION_API_KEY and that the integration is shared with the parent page"
                    .to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoutError>;
