//! Configuration management for the jotter application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. It supports configuring the
//! entries directory and the width of the delete confirmation window.
//!
//! # Environment Variables
//!
//! - `JOTTER_DIR`: Path to the entries directory (defaults to ~/Documents/jotter)
//! - `JOTTER_CONFIRM_MS`: Delete confirmation window in milliseconds (defaults to 1500)
//! - `HOME`: Used for expanding the default entries directory path

use crate::constants;
use crate::errors::{AppError, AppResult};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the jotter application.
///
/// This struct holds the settings needed by the application: the directory
/// where entry files are stored and the delete confirmation window.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use jotter::Config;
/// use std::path::PathBuf;
/// use std::time::Duration;
///
/// let config = Config {
///     entries_dir: PathBuf::from("/path/to/entries"),
///     confirm_window: Duration::from_millis(1500),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory where entry files are stored.
    ///
    /// Loaded from the JOTTER_DIR environment variable with a fallback to
    /// ~/Documents/jotter if not specified.
    pub entries_dir: PathBuf,

    /// How long a pending delete stays armed before it reverts.
    ///
    /// Loaded from JOTTER_CONFIRM_MS, defaulting to 1500 milliseconds.
    pub confirm_window: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            entries_dir: PathBuf::from(""),
            confirm_window: Duration::from_millis(constants::DEFAULT_CONFIRM_WINDOW_MS),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// This method reads configuration from environment variables, with
    /// fallbacks for missing values. It expands the entries directory path
    /// using `shellexpand` to handle `~` and environment variable references.
    ///
    /// # Returns
    ///
    /// A Result containing either the loaded Config or an AppError if path
    /// expansion or timeout parsing fails.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The entries directory path expansion fails
    /// - The expanded entries directory path is empty
    /// - `JOTTER_CONFIRM_MS` is set but is not a positive integer
    pub fn load() -> AppResult<Self> {
        // Get entries directory from JOTTER_DIR env var, fallback to ~/Documents/jotter
        let entries_dir_str = env::var(constants::ENV_VAR_JOTTER_DIR).unwrap_or_else(|_| {
            let home = env::var(constants::ENV_VAR_HOME).unwrap_or_else(|_| "".to_string());
            format!("{}/{}", home, constants::DEFAULT_ENTRIES_SUBDIR)
        });

        // Expand the path (handles ~ and environment variables)
        let expanded_path = shellexpand::full(&entries_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;

        let entries_dir = PathBuf::from(expanded_path.into_owned());

        if entries_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Entries directory path is empty".to_string(),
            ));
        }

        let confirm_window = match env::var(constants::ENV_VAR_JOTTER_CONFIRM_MS) {
            Ok(raw) => {
                let ms: u64 = raw.parse().map_err(|_| {
                    AppError::Config(format!(
                        "Invalid {} value '{}': expected a positive number of milliseconds",
                        constants::ENV_VAR_JOTTER_CONFIRM_MS,
                        raw
                    ))
                })?;
                if ms == 0 {
                    return Err(AppError::Config(format!(
                        "{} must be greater than zero",
                        constants::ENV_VAR_JOTTER_CONFIRM_MS
                    )));
                }
                Duration::from_millis(ms)
            }
            Err(_) => Duration::from_millis(constants::DEFAULT_CONFIRM_WINDOW_MS),
        };

        Ok(Config {
            entries_dir,
            confirm_window,
        })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Returns
    ///
    /// A Result that is Ok(()) if the configuration is valid, or an AppError
    /// with a description of what is invalid.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` with one of the following messages:
    /// - "Entries directory path is empty" if the path is empty
    /// - "Entries directory must be an absolute path" if the path is relative
    /// - "Delete confirmation window must be greater than zero" for a zero window
    ///
    /// # Examples
    ///
    /// ```
    /// use jotter::Config;
    /// use std::path::PathBuf;
    /// use std::time::Duration;
    ///
    /// let valid_config = Config {
    ///     entries_dir: PathBuf::from("/absolute/path"),
    ///     confirm_window: Duration::from_millis(1500),
    /// };
    /// assert!(valid_config.validate().is_ok());
    ///
    /// let invalid_config = Config {
    ///     entries_dir: PathBuf::from("relative/path"),
    ///     confirm_window: Duration::from_millis(1500),
    /// };
    /// assert!(invalid_config.validate().is_err());
    /// ```
    pub fn validate(&self) -> AppResult<()> {
        if self.entries_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Entries directory path is empty".to_string(),
            ));
        }

        if !self.entries_dir.is_absolute() {
            return Err(AppError::Config(
                "Entries directory must be an absolute path".to_string(),
            ));
        }

        if self.confirm_window.is_zero() {
            return Err(AppError::Config(
                "Delete confirmation window must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use tempfile::tempdir;

    fn setup() {
        // Clear relevant environment variables before each test
        env::remove_var(constants::ENV_VAR_JOTTER_DIR);
        env::remove_var(constants::ENV_VAR_JOTTER_CONFIRM_MS);
    }

    #[test]
    #[serial]
    fn test_load_with_custom_dir() {
        setup();

        // Store original environment variable to restore later
        let orig_dir = env::var(constants::ENV_VAR_JOTTER_DIR).ok();

        // Create a temp directory to use as entries dir
        let temp_dir = tempdir().unwrap();
        let dir_path = temp_dir.path().to_string_lossy().to_string();

        env::set_var(constants::ENV_VAR_JOTTER_DIR, &dir_path);
        let config = Config::load().unwrap();

        // Restore environment
        if let Some(val) = orig_dir {
            env::set_var(constants::ENV_VAR_JOTTER_DIR, val);
        } else {
            env::remove_var(constants::ENV_VAR_JOTTER_DIR);
        }

        assert_eq!(config.entries_dir, PathBuf::from(dir_path));
        assert_eq!(
            config.confirm_window,
            Duration::from_millis(constants::DEFAULT_CONFIRM_WINDOW_MS)
        );
    }

    #[test]
    #[serial]
    fn test_load_with_custom_confirm_window() {
        setup();

        env::set_var(constants::ENV_VAR_JOTTER_DIR, "/tmp/jotter-test");
        env::set_var(constants::ENV_VAR_JOTTER_CONFIRM_MS, "2500");

        let config = Config::load().unwrap();

        env::remove_var(constants::ENV_VAR_JOTTER_DIR);
        env::remove_var(constants::ENV_VAR_JOTTER_CONFIRM_MS);

        assert_eq!(config.confirm_window, Duration::from_millis(2500));
    }

    #[test]
    #[serial]
    fn test_load_with_invalid_confirm_window() {
        setup();

        env::set_var(constants::ENV_VAR_JOTTER_DIR, "/tmp/jotter-test");
        env::set_var(constants::ENV_VAR_JOTTER_CONFIRM_MS, "soon");

        let result = Config::load();

        env::remove_var(constants::ENV_VAR_JOTTER_DIR);
        env::remove_var(constants::ENV_VAR_JOTTER_CONFIRM_MS);

        assert!(result.is_err());
        match result {
            Err(AppError::Config(msg)) => {
                assert!(msg.contains("JOTTER_CONFIRM_MS"));
            }
            _ => panic!("Expected Config error for invalid confirm window"),
        }
    }

    #[test]
    #[serial]
    fn test_load_with_zero_confirm_window() {
        setup();

        env::set_var(constants::ENV_VAR_JOTTER_DIR, "/tmp/jotter-test");
        env::set_var(constants::ENV_VAR_JOTTER_CONFIRM_MS, "0");

        let result = Config::load();

        env::remove_var(constants::ENV_VAR_JOTTER_DIR);
        env::remove_var(constants::ENV_VAR_JOTTER_CONFIRM_MS);

        assert!(result.is_err());
        match result {
            Err(AppError::Config(msg)) => {
                assert!(msg.contains("greater than zero"));
            }
            _ => panic!("Expected Config error for zero confirm window"),
        }
    }

    #[test]
    fn test_validate_valid_config() {
        // Create a temp directory to use as entries dir
        let temp_dir = tempdir().unwrap();

        let config = Config {
            entries_dir: temp_dir.path().to_path_buf(),
            confirm_window: Duration::from_millis(1500),
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_entries_dir() {
        let config = Config {
            entries_dir: PathBuf::from(""),
            confirm_window: Duration::from_millis(1500),
        };

        let result = config.validate();
        assert!(result.is_err());
        match result {
            Err(AppError::Config(message)) => {
                assert!(message.contains("Entries directory path is empty"));
            }
            _ => panic!("Expected Config error about empty entries directory"),
        }
    }

    #[test]
    fn test_validate_relative_entries_dir() {
        let config = Config {
            entries_dir: PathBuf::from("relative/path"),
            confirm_window: Duration::from_millis(1500),
        };

        let result = config.validate();
        assert!(result.is_err());
        match result {
            Err(AppError::Config(message)) => {
                assert!(message.contains("must be an absolute path"));
            }
            _ => panic!("Expected Config error about relative path"),
        }
    }

    #[test]
    fn test_validate_zero_confirm_window() {
        let config = Config {
            entries_dir: PathBuf::from("/some/path"),
            confirm_window: Duration::ZERO,
        };

        let result = config.validate();
        assert!(result.is_err());
        match result {
            Err(AppError::Config(message)) => {
                assert!(message.contains("greater than zero"));
            }
            _ => panic!("Expected Config error about zero confirm window"),
        }
    }
}
