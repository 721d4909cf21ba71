//! Reading samples from text
//!
//! ```rust
//! use sample_io::{parse_sample, Diagnostic, ReaderConfig};
//!
//! let outcome = parse_sample::<f64>("4.0 oops 6.5", &ReaderConfig::default());
//! assert_eq!(outcome.sample, vec![4.0, 6.5]);
//! assert!(matches!(outcome.diagnostics[0], Diagnostic::InvalidToken { index: 2, .. }));
//! ```

pub mod config;
pub mod reader;

pub use config::ReaderConfig;
pub use reader::{parse_sample, read_sample, try_read_sample, Diagnostic, ReadOutcome};
