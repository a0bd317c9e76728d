use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the Mass Rename application
#[derive(Debug)]
pub enum Error {
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error when a rename would replace an existing entry
    TargetExists { from: PathBuf, to: PathBuf },
    /// Error when a substitution rule cannot be used
    InvalidRule { detail: String },
    /// Error when a filename is not valid Unicode
    InvalidFilename { path: PathBuf },
    /// Error when a directory is not found
    DirectoryNotFound { path: PathBuf },
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileOperation {
                source,
                path,
                operation,
            } => {
                write!(f, "Failed to {} {}: {}", operation, path.display(), source)
            }
            Error::TargetExists { from, to } => {
                write!(
                    f,
                    "Cannot rename {} to {}: target already exists",
                    from.display(),
                    to.display()
                )
            }
            Error::InvalidRule { detail } => {
                write!(f, "Invalid substitution rule: {detail}")
            }
            Error::InvalidFilename { path } => {
                write!(f, "Filename is not valid unicode: {}", path.display())
            }
            Error::DirectoryNotFound { path } => {
                write!(f, "Directory not found: {}", path.display())
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::FileOperation {
            source: err,
            path: PathBuf::new(),
            operation: "access".to_string(),
        }
    }
}

/// Custom Result type for the Mass Rename application
///
/// # Examples
/// ```
/// use mass_rename::prelude::{Result, generic_error};
///
/// fn example_function() -> Result<String> {
///     // Return success
///     Ok("success".to_string())
///
///     // Or return an error
///     // Err(generic_error("Something went wrong"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a rename collision error
pub fn target_exists_error(from: PathBuf, to: PathBuf) -> Error {
    Error::TargetExists { from, to }
}

/// Helper function to create an invalid rule error
pub fn invalid_rule_error(detail: &str) -> Error {
    Error::InvalidRule {
        detail: detail.to_string(),
    }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

/// Helper function to create a directory not found error
pub fn directory_not_found_error(path: PathBuf) -> Error {
    Error::DirectoryNotFound { path }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_operation_error() {
        let path = PathBuf::from("/test/path");
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied");
        let error = file_operation_error(io_error, path.clone(), "write");

        // Check that the error contains the expected information
        let error_string = format!("{error}");
        assert!(
            error_string.contains("write"),
            "Error message should contain the operation"
        );
        assert!(
            error_string.contains("/test/path"),
            "Error message should contain the path"
        );
        assert!(
            error_string.contains("Permission denied"),
            "Error message should contain the underlying cause"
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn test_target_exists_error() {
        let error = target_exists_error(PathBuf::from("/a/BGD.txt"), PathBuf::from("/a/XYZ.txt"));

        let error_string = format!("{error}");
        assert!(error_string.contains("/a/BGD.txt"));
        assert!(error_string.contains("/a/XYZ.txt"));
        assert!(error_string.contains("already exists"));
        assert!(error.source().is_none());
    }

    #[test]
    fn test_invalid_rule_error() {
        let error = invalid_rule_error("old and new words are identical");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("identical"),
            "Error message should contain the detail"
        );
    }

    #[test]
    fn test_invalid_filename_error() {
        let path = PathBuf::from("/test/invalid:file");
        let error = invalid_filename_error(path.clone());

        let error_string = format!("{error}");
        assert!(
            error_string.contains("/test/invalid:file"),
            "Error message should contain the path"
        );
    }

    #[test]
    fn test_directory_not_found_error() {
        let path = PathBuf::from("/test/nonexistent");
        let error = directory_not_found_error(path.clone());

        let error_string = format!("{error}");
        assert!(
            error_string.contains("/test/nonexistent"),
            "Error message should contain the path"
        );
    }

    #[test]
    fn test_generic_error() {
        let error = generic_error("Something went wrong");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("Something went wrong"),
            "Error message should contain the message"
        );
    }

    #[test]
    fn test_error_conversion() {
        // Test conversion from io::Error to Error
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: Error = io_error.into();

        let error_string = format!("{error}");
        assert!(
            error_string.contains("Failed to access"),
            "Error message should describe the operation"
        );
        assert!(error_string.contains("File not found"));
    }
}
