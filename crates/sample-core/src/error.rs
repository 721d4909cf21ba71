//! Error types for sample statistics
//!
//! Provides a unified error type for all sample-stats crates.

use thiserror::Error;

/// Core error type for estimator operations
#[derive(Error, Debug)]
pub enum Error {
    /// The sample has no observations but the operation needs at least one
    #[error("Empty input: {0} requires at least one observation")]
    EmptyInput(String),

    /// The sample is smaller than the estimator's minimum size
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// An auxiliary parameter is outside its valid domain
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input(operation: &str) -> Self {
        Self::EmptyInput(operation.to_string())
    }

    /// Create an error for a sample below the minimum size
    pub fn insufficient(expected: usize, actual: usize) -> Self {
        Self::InsufficientData { expected, actual }
    }

    /// Create an error for invalid quantile
    pub fn invalid_quantile(p: f64) -> Self {
        Self::InvalidParameter(format!("Quantile {p} must be in [0, 1]"))
    }

    /// Create an error for a value that cannot be represented in the target type
    pub fn conversion(context: &str) -> Self {
        Self::Computation(format!("{context} cannot be represented in the result type"))
    }

    /// Whether this error reports a sample that is too small (empty or below minimum)
    pub fn is_size_error(&self) -> bool {
        matches!(self, Self::EmptyInput(_) | Self::InsufficientData { .. })
    }
}

/// Check that a sample has at least one observation
pub fn check_non_empty<T>(data: &[T], operation: &str) -> Result<()> {
    if data.is_empty() {
        return Err(Error::empty_input(operation));
    }
    Ok(())
}

/// Check that a sample has at least `min_size` observations
pub fn check_min_size<T>(data: &[T], min_size: usize) -> Result<()> {
    if data.len() < min_size {
        return Err(Error::insufficient(min_size, data.len()));
    }
    Ok(())
}

/// Check that a probability lies in `[0, 1]` (NaN is rejected)
pub fn check_probability(p: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::invalid_quantile(p));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::empty_input("mean");
        assert_eq!(err.to_string(), "Empty input: mean requires at least one observation");

        let err = Error::InsufficientData { expected: 2, actual: 1 };
        assert_eq!(err.to_string(), "Insufficient data: expected at least 2 samples, got 1");

        let err = Error::InvalidParameter("k must fit in i32".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: k must fit in i32");

        let err = Error::InvalidInput("data contains NaN".to_string());
        assert_eq!(err.to_string(), "Invalid input: data contains NaN");

        let err = Error::conversion("sample length");
        assert_eq!(
            err.to_string(),
            "Computation error: sample length cannot be represented in the result type"
        );
    }

    #[test]
    fn test_invalid_quantile_message() {
        let err = Error::invalid_quantile(1.5);
        assert_eq!(err.to_string(), "Invalid parameter: Quantile 1.5 must be in [0, 1]");

        let err = Error::invalid_quantile(-0.1);
        assert_eq!(err.to_string(), "Invalid parameter: Quantile -0.1 must be in [0, 1]");
    }

    #[test]
    fn test_size_checks() {
        assert!(matches!(
            check_non_empty::<f64>(&[], "mean"),
            Err(Error::EmptyInput(_))
        ));
        assert!(check_non_empty(&[1.0], "mean").is_ok());

        match check_min_size(&[5.0], 2) {
            Err(Error::InsufficientData { expected, actual }) => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("Wrong result: {other:?}"),
        }
        assert!(check_min_size(&[1.0, 2.0], 2).is_ok());
    }

    #[test]
    fn test_check_probability() {
        assert!(check_probability(0.0).is_ok());
        assert!(check_probability(0.5).is_ok());
        assert!(check_probability(1.0).is_ok());
        assert!(check_probability(1.1).is_err());
        assert!(check_probability(-0.1).is_err());
        assert!(check_probability(f64::NAN).is_err());
    }

    #[test]
    fn test_is_size_error() {
        assert!(Error::empty_input("x").is_size_error());
        assert!(Error::insufficient(2, 0).is_size_error());
        assert!(!Error::invalid_quantile(2.0).is_size_error());
    }

    #[test]
    fn test_error_from_io_error() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => assert!(err.to_string().contains("file not found")),
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: Error = anyhow::anyhow!("custom error message").into();
        assert!(matches!(err, Error::Other(_)));
        assert!(err.to_string().contains("custom error message"));
    }
}
