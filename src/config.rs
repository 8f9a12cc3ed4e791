//! Scan configuration
//!
//! Defines the configuration structure threaded through every component of
//! a batch scan. There is no process-wide state; components only see what
//! they are handed.

use std::path::PathBuf;

/// Configuration for one batch scan
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory holding the APK batch (listed non-recursively)
    pub batch_dir: PathBuf,

    /// File with strings extracted from benign apps
    pub whitelist_path: PathBuf,

    /// Minimum string length, used by both the generic extractor and the
    /// size filter
    pub min_len: usize,

    /// Only extract strings from .dex/.smali files
    pub only_dex: bool,

    /// Report the files each surviving string was found in
    pub print_sources: bool,

    /// Base directory for per-archive scratch extraction
    pub scratch_base: PathBuf,
}

impl ScanConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.batch_dir.is_dir() {
            return Err(ConfigError::BatchDirNotFound(self.batch_dir.clone()));
        }

        if self.min_len == 0 {
            return Err(ConfigError::ZeroMinLength);
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APK directory not found: {0}")]
    BatchDirNotFound(PathBuf),

    #[error("Minimum string length must be at least 1")]
    ZeroMinLength,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(dir: PathBuf) -> ScanConfig {
        ScanConfig {
            batch_dir: dir,
            whitelist_path: PathBuf::from("whitelist_strings.txt"),
            min_len: 5,
            only_dex: false,
            print_sources: false,
            scratch_base: std::env::temp_dir(),
        }
    }

    #[test]
    fn test_validate_ok() {
        let dir = tempfile::tempdir().unwrap();
        assert!(config_for(dir.path().to_path_buf()).validate().is_ok());
    }

    #[test]
    fn test_validate_missing_dir() {
        let config = config_for(PathBuf::from("/nonexistent/apk/batch"));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BatchDirNotFound(_))
        ));
    }

    #[test]
    fn test_validate_zero_min_len() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_for(dir.path().to_path_buf());
        config.min_len = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroMinLength)));
    }
}
