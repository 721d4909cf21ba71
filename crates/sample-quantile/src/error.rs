//! Error types for quantile estimation

use thiserror::Error;

/// Errors that can occur during quantile estimation
#[derive(Error, Debug)]
pub enum Error {
    /// Empty data provided
    #[error("Cannot compute quantile of empty data")]
    EmptyData,

    /// Invalid quantile probability
    #[error("Quantile probability {p} must be in [0, 1]")]
    InvalidProbability { p: f64 },

    /// Core computation error
    #[error("Core computation error: {0}")]
    Core(#[from] sample_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions
impl Error {
    /// Check if probability is valid (NaN is not)
    pub fn check_probability(p: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidProbability { p });
        }
        Ok(())
    }

    /// Check if data is non-empty
    pub fn check_non_empty<T>(data: &[T]) -> Result<()> {
        if data.is_empty() {
            return Err(Error::EmptyData);
        }
        Ok(())
    }
}

impl From<Error> for sample_core::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::EmptyData => sample_core::Error::empty_input("quantile"),
            Error::InvalidProbability { p } => sample_core::Error::invalid_quantile(p),
            Error::Core(inner) => inner,
        }
    }
}
