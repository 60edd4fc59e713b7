//! Validation error types

use std::fmt;

/// Validation error for request payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is absent (or explicitly null)
    MissingField { field: &'static str },

    /// Field is present but empty when it shouldn't be
    Empty { field: &'static str },

    /// Field is present but does not hold an integer
    NotAnInteger { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "missing required field '{}'", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::NotAnInteger { field } => write!(f, "{} must be an integer", field),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::MissingField { field: "difficulty" };
        assert_eq!(err.to_string(), "missing required field 'difficulty'");

        let err = ValidationError::Empty { field: "searchTerm" };
        assert_eq!(err.to_string(), "searchTerm cannot be empty");

        let err = ValidationError::NotAnInteger { field: "difficulty" };
        assert_eq!(err.to_string(), "difficulty must be an integer");
    }
}
