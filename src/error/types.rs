//! Error types and definitions for premock
//!
//! This module provides the error handling system for the premock tool,
//! including error types, result aliases, and severity classification.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current operation fails but overall process can continue
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for premock operations
#[derive(Debug, Error)]
pub enum PremockError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// Source file read errors
    #[error("Error reading source file {path}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// Unrecoverable parse failure of source text
    #[error("Parse error in {file}: {message}")]
    Parse {
        file: PathBuf,
        message: String,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// JSON parsing errors with file context
    #[error("JSON parsing error in {file}: {source}")]
    JsonParse {
        file: PathBuf,
        #[source]
        source: serde_json::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// Manifest validation errors
    #[error("Invalid manifest {path}: {message}")]
    InvalidManifest {
        path: PathBuf,
        message: String,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// Invalid path errors
    #[error("Invalid path: {path}")]
    InvalidPath {
        path: PathBuf,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace,
    },
}

impl PremockError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Warning level errors - operation can continue
            PremockError::JsonParse { .. } => ErrorSeverity::Warning,

            // Critical errors - process should terminate
            PremockError::Config { .. } => ErrorSeverity::Critical,
            PremockError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            PremockError::ConfigRead { .. } => ErrorSeverity::Critical,
            PremockError::ConfigParse { .. } => ErrorSeverity::Critical,
            PremockError::InvalidManifest { .. } => ErrorSeverity::Critical,

            // Regular errors - current operation fails but overall process can continue
            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            PremockError::SourceRead { path, source, .. } => {
                format!(
                    "Cannot read '{}': {}. Check that the file exists and is readable.",
                    path.display(),
                    source
                )
            }
            PremockError::Parse { file, message, .. } => {
                format!(
                    "'{}' could not be parsed: {}. Fix the syntax errors and rerun.",
                    file.display(),
                    message
                )
            }
            PremockError::JsonParse { file, source, .. } => {
                format!(
                    "Invalid JSON in '{}': {}. Please check the file format.",
                    file.display(),
                    source
                )
            }
            PremockError::Io { source, .. } => {
                format!("File system error: {}. Check disk space and permissions.", source)
            }
            PremockError::InvalidPath { path, .. } => {
                format!("Invalid path: '{}'. Please provide a valid file path.", path.display())
            }
            PremockError::ConfigNotFound { path, .. } => {
                format!(
                    "Configuration file not found at '{}'. Create a config file or use command line options.",
                    path.display()
                )
            }
            PremockError::InvalidManifest { path, message, .. } => {
                format!("Invalid manifest '{}': {}.", path.display(), message)
            }
            PremockError::OutputWrite { path, source, .. } => {
                format!("Cannot write '{}': {}.", path.display(), source)
            }
            // For other errors, use the standard Display implementation
            _ => self.to_string(),
        }
    }

    /// Create an IO error with context
    pub fn io_error(source: std::io::Error) -> Self {
        PremockError::Io {
            source,
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }

    /// Create a source read error with file context
    pub fn source_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PremockError::SourceRead {
            path: path.into(),
            source,
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }

    /// Create a parse error with file context
    pub fn parse_error(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        PremockError::Parse {
            file: file.into(),
            message: message.into(),
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }

    /// Create a JSON parse error with file context
    pub fn json_parse_error(file: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        PremockError::JsonParse {
            file: file.into(),
            source,
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        PremockError::Config {
            message: message.into(),
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }

    /// Create a manifest validation error
    pub fn invalid_manifest(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        PremockError::InvalidManifest {
            path: path.into(),
            message: message.into(),
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }

    /// Create an output write error
    pub fn output_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PremockError::OutputWrite {
            path: path.into(),
            source,
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }
}

// Implement From for common error types
impl From<std::io::Error> for PremockError {
    fn from(err: std::io::Error) -> Self {
        PremockError::io_error(err)
    }
}

impl From<toml::de::Error> for PremockError {
    fn from(err: toml::de::Error) -> Self {
        PremockError::ConfigParse {
            path: PathBuf::new(),
            source: Box::new(err),
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }
}

impl From<serde_json::Error> for PremockError {
    fn from(err: serde_json::Error) -> Self {
        PremockError::JsonSerialize {
            source: err,
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }
}

/// Result type alias for premock operations
pub type Result<T> = std::result::Result<T, PremockError>;
