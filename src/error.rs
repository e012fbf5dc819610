//! Error handling for the sorting tool

use std::io;
use std::path::Path;
use thiserror::Error;

/// Fatal error for a sorting run
#[derive(Error, Debug)]
pub enum SortError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Permission denied: {file}")]
    PermissionDenied { file: String },

    #[error("No such file or directory: {file}")]
    FileNotFound { file: String },

    #[error("Is a directory: {file}")]
    IsDirectory { file: String },

    /// A recognized flag was not followed by a value
    #[error("No {what} defined!")]
    MissingValue { what: String },

    #[error("Unknown sorting type: {value}")]
    UnknownSortingType { value: String },

    #[error("Unknown data type: {value}")]
    UnknownDataType { value: String },

    #[error("Conflicting options: {message}")]
    ConflictingOptions { message: String },

    #[error(transparent)]
    Cli(#[from] clap::Error),
}

impl SortError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SortError::PermissionDenied { .. }
            | SortError::FileNotFound { .. }
            | SortError::IsDirectory { .. }
            | SortError::Io(_) => crate::IO_FAILURE,

            SortError::Cli(err) => err.exit_code(),

            _ => crate::EXIT_FAILURE,
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(file: &str) -> Self {
        SortError::PermissionDenied {
            file: file.to_string(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(file: &str) -> Self {
        SortError::FileNotFound {
            file: file.to_string(),
        }
    }

    /// Create an is directory error
    pub fn is_directory(file: &str) -> Self {
        SortError::IsDirectory {
            file: file.to_string(),
        }
    }

    /// Create a missing flag value error, e.g. `missing_value("data type")`
    pub fn missing_value(what: &str) -> Self {
        SortError::MissingValue {
            what: what.to_string(),
        }
    }

    pub fn unknown_sorting_type(value: &str) -> Self {
        SortError::UnknownSortingType {
            value: value.to_string(),
        }
    }

    pub fn unknown_data_type(value: &str) -> Self {
        SortError::UnknownDataType {
            value: value.to_string(),
        }
    }

    /// Create a conflicting options error
    pub fn conflicting_options(message: &str) -> Self {
        SortError::ConflictingOptions {
            message: message.to_string(),
        }
    }
}

/// Result type for sort operations
pub type SortResult<T> = Result<T, SortError>;

/// Non-fatal problem reported on stderr while processing continues
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    #[error("\"{0}\" is not a valid parameter. It will be skipped.")]
    UnknownParameter(String),

    #[error("\"{0}\" is not a long. It will be skipped.")]
    NotALong(String),
}

/// Print warnings to stderr, one per line
pub fn report_warnings(warnings: &[Warning]) {
    for warning in warnings {
        eprintln!("{warning}");
    }
}

/// Context trait for attaching a file name to I/O errors
pub trait SortContext<T> {
    fn with_file_context(self, path: &Path) -> SortResult<T>;
}

impl<T> SortContext<T> for Result<T, io::Error> {
    fn with_file_context(self, path: &Path) -> SortResult<T> {
        let filename = path.display().to_string();
        self.map_err(|io_err| match io_err.kind() {
            io::ErrorKind::PermissionDenied => SortError::permission_denied(&filename),
            io::ErrorKind::NotFound => SortError::file_not_found(&filename),
            _ if path.is_dir() => SortError::is_directory(&filename),
            _ => SortError::Io(io::Error::new(
                io_err.kind(),
                format!("{filename}: {io_err}"),
            )),
        })
    }
}
