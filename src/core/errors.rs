//! Shared error types for the application

use crate::core::Trait;
use thiserror::Error;

/// Main error type for traitmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// A statistic or aggregation received no values
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Structurally invalid input or a trait value outside [1, 5]
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn empty_input(what: impl Into<String>) -> Self {
        Self::EmptyInput(what.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// A trait value outside the assessment scale
    pub fn out_of_domain(index: usize, t: Trait, value: f64) -> Self {
        Self::InvalidInput(format!(
            "profile {} has {} = {} outside [1, 5]",
            index, t, value
        ))
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }

    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput(_))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_domain_message_names_trait_and_index() {
        let err = Error::out_of_domain(2, Trait::Neuroticism, 7.0);
        assert_eq!(
            err.to_string(),
            "Invalid input: profile 2 has neuroticism = 7 outside [1, 5]"
        );
        assert!(err.is_invalid_input());
    }

    #[test]
    fn context_wraps_message() {
        let result: Result<()> = Err(Error::empty_input("no values"));
        let err = result.context("computing mean").unwrap_err();
        assert_eq!(err.to_string(), "computing mean: Empty input: no values");
    }
}
