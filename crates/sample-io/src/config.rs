//! Reader configuration

use serde::{Deserialize, Serialize};

/// Settings for [`crate::parse_sample`] and [`crate::read_sample`]
///
/// The default is strict: tokens such as `NaN`, `inf` or `1e999` parse as
/// numbers but are skipped with a [`crate::Diagnostic::NonFinite`], since a
/// single non-finite value turns every sum-based estimate into NaN or
/// infinity. Set `allow_non_finite` to accept every token that parses, the
/// way a plain float parser would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Keep `NaN` and infinite tokens instead of reporting them
    pub allow_non_finite: bool,
}

impl ReaderConfig {
    /// Strict reader: non-finite values are rejected
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether non-finite values are kept
    pub fn with_non_finite(mut self, allow: bool) -> Self {
        self.allow_non_finite = allow;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert!(!ReaderConfig::new().allow_non_finite);
        assert!(ReaderConfig::new().with_non_finite(true).allow_non_finite);
    }

    #[test]
    fn test_non_finite_policy() {
        let strict = crate::parse_sample::<f64>("1 NaN inf", &ReaderConfig::default());
        assert_eq!(strict.sample, vec![1.0]);
        assert_eq!(strict.diagnostics.len(), 2);

        let permissive =
            crate::parse_sample::<f64>("1 NaN inf", &ReaderConfig::new().with_non_finite(true));
        assert_eq!(permissive.sample.len(), 3);
        assert!(permissive.is_clean());
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let config: ReaderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ReaderConfig::default());

        let config: ReaderConfig = serde_json::from_str(r#"{"allow_non_finite": true}"#).unwrap();
        assert!(config.allow_non_finite);
    }
}
