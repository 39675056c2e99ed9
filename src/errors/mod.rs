//! Error handling utilities for the jotter application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use std::io;
use thiserror::Error;

/// Represents specific error cases that can occur when operating on the entry store.
///
/// This enum provides detailed, contextual error information for the different
/// failure modes of store operations. Each variant captures the entry name
/// involved and, where applicable, the underlying I/O error.
///
/// # Examples
///
/// Creating a conflict error:
///
/// ```
/// use jotter::errors::StoreError;
///
/// let error = StoreError::Conflict {
///     name: "groceries".to_string(),
/// };
///
/// assert!(format!("{}", error).contains("already exists"));
/// assert!(format!("{}", error).contains("groceries"));
/// ```
#[derive(Debug, Error)]
pub enum StoreError {
    /// Error when the named entry no longer exists on disk.
    ///
    /// This typically means the file was removed externally after the entry
    /// list was built.
    #[error("Entry '{name}' was not found in the entries directory. It may have been moved or deleted outside of jotter.")]
    NotFound {
        /// The entry name that could not be found
        name: String,
    },

    /// Error when the target name of a rename or save is already taken by a
    /// different entry. The store performs no mutation in this case.
    #[error("An entry named '{name}' already exists. Choose a different title.")]
    Conflict {
        /// The entry name that is already occupied
        name: String,
    },

    /// Error when a name cannot be used as an entry filename.
    ///
    /// Names containing path separators or NUL bytes, and the reserved names
    /// `.` and `..`, are rejected before any filesystem call is made.
    #[error("'{name}' is not a valid entry name. Titles cannot be empty or contain path separators.")]
    InvalidName {
        /// The rejected entry name
        name: String,
    },

    /// Error when an underlying filesystem operation fails.
    #[error("Storage operation failed for entry '{name}': {source}. Check permissions and free space in the entries directory.")]
    Storage {
        /// The entry name the operation was acting on
        name: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents all possible errors that can occur in the jotter application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use jotter::errors::AppError;
///
/// let error = AppError::Config("Entries directory path is empty".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Entries directory path is empty");
/// ```
///
/// Converting from an IO error:
/// ```
/// use jotter::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem or terminal operations.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors from entry store operations.
    ///
    /// This variant uses a dedicated StoreError type to provide detailed
    /// information about what went wrong with the store operation.
    #[error("Entry store error: {0}")]
    Store(#[from] StoreError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// This type alias is used throughout the application to represent operations
/// that may fail with an `AppError`.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_app_error_from_io_error() {
        // Create an IO error
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

        // Convert to AppError
        let app_error: AppError = io_error.into();

        // Verify conversion
        match app_error {
            AppError::Io(inner) => {
                assert_eq!(inner.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected AppError::Io variant"),
        }
    }

    #[test]
    fn test_app_error_display() {
        // Test Config error
        let config_error = AppError::Config("Invalid configuration".to_string());
        assert_eq!(
            format!("{}", config_error),
            "Configuration error: Invalid configuration"
        );

        // Test Io error
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        let app_io_error = AppError::Io(io_error);
        assert_eq!(format!("{}", app_io_error), "I/O error: permission denied");

        // Test Store error with Conflict variant
        let store_error = StoreError::Conflict {
            name: "draft".to_string(),
        };
        let app_error = AppError::Store(store_error);
        assert!(format!("{}", app_error).contains("Entry store error"));
        assert!(format!("{}", app_error).contains("already exists"));
        assert!(format!("{}", app_error).contains("draft"));
    }

    #[test]
    fn test_store_error_variants() {
        // Test NotFound variant
        let error = StoreError::NotFound {
            name: "vanished".to_string(),
        };
        assert!(format!("{}", error).contains("not found"));
        assert!(format!("{}", error).contains("vanished"));

        // Test Conflict variant
        let error = StoreError::Conflict {
            name: "draft".to_string(),
        };
        assert!(format!("{}", error).contains("already exists"));
        assert!(format!("{}", error).contains("draft"));

        // Test InvalidName variant
        let error = StoreError::InvalidName {
            name: "a/b".to_string(),
        };
        assert!(format!("{}", error).contains("not a valid entry name"));
        assert!(format!("{}", error).contains("a/b"));

        // Test Storage variant
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        let error = StoreError::Storage {
            name: "draft".to_string(),
            source: io_error,
        };
        assert!(format!("{}", error).contains("Storage operation failed"));
        assert!(format!("{}", error).contains("draft"));
        assert!(format!("{}", error).contains("permission denied"));
    }

    #[test]
    fn test_store_error_conversion_to_app_error() {
        // Create a StoreError
        let store_error = StoreError::NotFound {
            name: "gone".to_string(),
        };

        // Convert to AppError
        let app_error: AppError = store_error.into();

        // Verify conversion
        match app_error {
            AppError::Store(inner) => match inner {
                StoreError::NotFound { name } => {
                    assert_eq!(name, "gone");
                }
                _ => panic!("Expected StoreError::NotFound variant"),
            },
            _ => panic!("Expected AppError::Store variant"),
        }
    }

    /// Test error source chaining for StoreError variants that have #[source] attributes
    #[test]
    fn test_store_error_source_chaining() {
        use std::error::Error;

        // Test Storage source chaining
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        let original_io_kind = io_error.kind();
        let store_error = StoreError::Storage {
            name: "draft".to_string(),
            source: io_error,
        };

        // Test that source() returns the underlying io::Error
        let source = store_error
            .source()
            .expect("StoreError::Storage should have a source");
        let source_io_error = source
            .downcast_ref::<io::Error>()
            .expect("Source should be an io::Error");
        assert_eq!(source_io_error.kind(), original_io_kind);

        // Test that Conflict has no source (it doesn't have #[source])
        let store_error = StoreError::Conflict {
            name: "draft".to_string(),
        };
        assert!(
            store_error.source().is_none(),
            "StoreError::Conflict should not have a source"
        );
    }

    /// Test full error chain traversal to ensure complete source chains work correctly
    #[test]
    fn test_full_error_chain_traversal() {
        use std::error::Error;

        // Create a deep error chain: AppError -> StoreError -> io::Error
        let io_error = io::Error::new(io::ErrorKind::WriteZero, "no space left on device");
        let store_error = StoreError::Storage {
            name: "draft".to_string(),
            source: io_error,
        };
        let app_error = AppError::Store(store_error);

        // Collect all errors in the chain
        let mut error_chain = Vec::new();
        let mut current_error: &dyn Error = &app_error;

        loop {
            error_chain.push(current_error.to_string());
            match current_error.source() {
                Some(source) => current_error = source,
                None => break,
            }
        }

        // Verify the chain has the expected depth and content
        assert_eq!(
            error_chain.len(),
            3,
            "Error chain should have 3 levels: AppError -> StoreError -> io::Error"
        );
        assert!(
            error_chain[0].contains("Entry store error"),
            "First error should be AppError::Store"
        );
        assert!(
            error_chain[1].contains("Storage operation failed"),
            "Second error should be StoreError::Storage"
        );
        assert!(
            error_chain[2].contains("no space left on device"),
            "Third error should be the original io::Error"
        );
    }
}
