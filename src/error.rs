//! Error handling module for the NIS2 wizard
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Navigation and validation errors are recoverable: the wizard state is left
//! untouched when one is returned.

use thiserror::Error;

/// Main error type for the wizard
#[derive(Error, Debug)]
pub enum WizardError {
    /// A final assessment was requested before steps 1, 2 and 4 were answered
    #[error("Incomplete answers: missing {}", missing.join(", "))]
    IncompleteAnswers { missing: Vec<&'static str> },

    /// A navigation or answer operation is not allowed from the current step
    #[error("Cannot {action} from step {from}")]
    InvalidTransition { from: u8, action: &'static str },

    /// A raw answer does not belong to the field's enumeration
    #[error("Unknown value '{value}' for {field} (expected one of: {expected})")]
    UnknownValue {
        field: &'static str,
        value: String,
        expected: String,
    },

    /// IO errors (answers file, terminal)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Result type alias for wizard operations
pub type Result<T> = std::result::Result<T, WizardError>;

impl WizardError {
    /// Create an incomplete answers error
    pub fn incomplete(missing: Vec<&'static str>) -> Self {
        Self::IncompleteAnswers { missing }
    }

    /// Create an invalid transition error
    pub fn invalid_transition(from: u8, action: &'static str) -> Self {
        Self::InvalidTransition { from, action }
    }

    /// Create an unknown value error
    pub fn unknown_value(
        field: &'static str,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::UnknownValue {
            field,
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Whether the error leaves the wizard in a usable state
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::IncompleteAnswers { .. }
                | Self::InvalidTransition { .. }
                | Self::UnknownValue { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WizardError::incomplete(vec!["entity size", "governance maturity"]);
        assert_eq!(
            err.to_string(),
            "Incomplete answers: missing entity size, governance maturity"
        );

        let err = WizardError::invalid_transition(1, "go back");
        assert_eq!(err.to_string(), "Cannot go back from step 1");
    }

    #[test]
    fn test_unknown_value_lists_expected() {
        let err = WizardError::unknown_value("entity size", "huge", "small, medium, large");
        assert_eq!(
            err.to_string(),
            "Unknown value 'huge' for entity size (expected one of: small, medium, large)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: WizardError = io_err.into();
        assert!(matches!(err, WizardError::Io(_)));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_navigation_errors_are_recoverable() {
        assert!(WizardError::invalid_transition(5, "go back").is_recoverable());
        assert!(WizardError::incomplete(vec!["entity size"]).is_recoverable());
        assert!(!WizardError::terminal("raw mode").is_recoverable());
    }
}
