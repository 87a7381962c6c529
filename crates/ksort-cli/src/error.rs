//! CLI error types with exit code handling

use miette::Diagnostic;
use thiserror::Error;

use crate::exit_codes;

/// Failure of a ksort run, each mapped to an exit code
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum CliError {
    /// The input path (or something below it) could not be accessed
    #[error("Failed to access a path {path:?}: {message}")]
    #[diagnostic(code(ksort::access), help("check that the path exists and is readable"))]
    Access { path: String, message: String },

    /// A file was found but could not be read
    #[error("Failed to read a file {path:?}: {message}")]
    #[diagnostic(code(ksort::read))]
    Read { path: String, message: String },

    /// Walking the input produced no files
    #[error("File does not exist in {path}")]
    #[diagnostic(
        code(ksort::no_input),
        help("pass a manifest file, a directory containing manifests, or `-` for stdin")
    )]
    NoInput { path: String },

    /// Sorted output could not be written
    #[error("Failed to write output: {message}")]
    #[diagnostic(code(ksort::output))]
    Output { message: String },
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NoInput { .. } => exit_codes::NO_INPUT,
            CliError::Access { .. } | CliError::Read { .. } | CliError::Output { .. } => {
                exit_codes::IO_ERROR
            }
        }
    }

    /// Create an access error for `path`
    pub fn access(path: impl Into<String>, message: impl ToString) -> Self {
        Self::Access {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Create a read error for `path`
    pub fn read(path: impl Into<String>, err: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            CliError::NoInput {
                path: "deploy".to_string()
            }
            .exit_code(),
            exit_codes::NO_INPUT
        );
        assert_eq!(
            CliError::access("missing", "No such file or directory").exit_code(),
            exit_codes::IO_ERROR
        );
        assert_eq!(
            CliError::Output {
                message: "disk full".to_string()
            }
            .exit_code(),
            exit_codes::IO_ERROR
        );
    }

    #[test]
    fn test_messages() {
        let err = CliError::NoInput {
            path: "./deploy".to_string(),
        };
        assert_eq!(err.to_string(), "File does not exist in ./deploy");

        let err = CliError::read(
            "a.yaml",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "Failed to read a file \"a.yaml\": denied");
    }
}
