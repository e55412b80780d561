use crate::patterns::facade::LookupError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Device code must be exactly four digits, got '{code}'")]
    InvalidDeviceCode { code: String },

    #[error("{device} does not support {action}")]
    UnsupportedAction { device: String, action: String },

    #[error("No command assigned to button {button}")]
    ButtonNotAssigned { button: usize },

    #[error("Menu name cannot be blank")]
    BlankMenuName,

    #[error("Cannot add item to leaf aka MenuItem ({item})")]
    CannotAddToLeaf { item: String },

    #[error("Drone {id} is already deactivated")]
    DroneAlreadyDeactivated { id: u32 },

    #[error("Expected exactly one location for user '{username}', found {found}")]
    MissingUserLocation { username: String, found: usize },

    #[error("Remote gumball machine {id} not found")]
    MachineNotFound { id: u32 },

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Precondition,
    Lookup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PatternError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PatternError::IoError(_) => ErrorCategory::Io,
            PatternError::TomlError(_)
            | PatternError::ConfigError { .. }
            | PatternError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PatternError::Lookup(_)
            | PatternError::MissingUserLocation { .. }
            | PatternError::MachineNotFound { .. } => ErrorCategory::Lookup,
            _ => ErrorCategory::Precondition,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PatternError::IoError(_) => ErrorSeverity::Critical,
            PatternError::Lookup(_) => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Console I/O failed: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Precondition => format!("Demo precondition violated: {}", self),
            ErrorCategory::Lookup => format!("Lookup failed: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that stdin/stdout are available and not closed",
            ErrorCategory::Configuration => {
                "Fix the highlighted setting in the TOML file or on the command line"
            }
            ErrorCategory::Precondition => "Adjust the demo settings so its inputs are valid",
            ErrorCategory::Lookup => "Use an id or name present in the demo's dummy data",
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_drive_severity() {
        let io = PatternError::from(std::io::Error::new(std::io::ErrorKind::Other, "closed"));
        assert_eq!(io.category(), ErrorCategory::Io);
        assert_eq!(io.severity(), ErrorSeverity::Critical);

        let code = PatternError::InvalidDeviceCode {
            code: "12a4".to_string(),
        };
        assert_eq!(code.category(), ErrorCategory::Precondition);
        assert_eq!(code.severity(), ErrorSeverity::High);

        let lookup = PatternError::from(LookupError::ItemNotFound {
            name: "kettle".to_string(),
        });
        assert_eq!(lookup.category(), ErrorCategory::Lookup);
        assert_eq!(lookup.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_user_friendly_message_includes_detail() {
        let err = PatternError::InvalidConfigValueError {
            field: "state.gumballs".to_string(),
            value: "99999".to_string(),
            reason: "Value must be between 0 and 10000".to_string(),
        };
        let message = err.user_friendly_message();
        assert!(message.starts_with("Invalid configuration"));
        assert!(message.contains("state.gumballs"));
    }
}
