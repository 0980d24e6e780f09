//! CLI error types with exit code handling
//!
//! This module provides a unified error type for CLI operations that
//! maps errors to appropriate exit codes.

use miette::Diagnostic;
use thiserror::Error;

use crate::exit_codes;

/// CLI-specific error type that includes exit code information
#[derive(Error, Debug, Diagnostic, Clone)]
pub enum CliError {
    /// User input was rejected
    #[error("Invalid input: {message}")]
    #[diagnostic(code(tfop::cli::input))]
    Input {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// Referenced object or key is missing
    #[error("Not found: {message}")]
    #[diagnostic(code(tfop::cli::not_found))]
    NotFound { message: String },

    /// Kubernetes client or API failure
    #[error("Cluster error: {message}")]
    #[diagnostic(code(tfop::cli::cluster))]
    Cluster { message: String },

    /// Nothing matched the given pattern
    #[error("no name matches pattern {pattern:?}")]
    #[diagnostic(code(tfop::cli::no_match))]
    NoMatch { pattern: String },

    /// Internal error (runtime, unexpected failure)
    #[error("Internal error: {message}")]
    #[diagnostic(code(tfop::cli::internal))]
    Internal { message: String },
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Input { .. } => exit_codes::INPUT_ERROR,
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::Cluster { .. } => exit_codes::CLUSTER_ERROR,
            CliError::NoMatch { .. } => exit_codes::ERROR,
            CliError::Internal { .. } => exit_codes::ERROR,
        }
    }

    /// Create an input error with help text
    pub fn input_with_help(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Input {
            message: message.into(),
            help: Some(help.into()),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<tfop_kube::KubeError> for CliError {
    fn from(err: tfop_kube::KubeError) -> Self {
        use tfop_kube::KubeError;

        let message = err.to_string();
        match err {
            KubeError::KeyNotFound { .. } => CliError::NotFound { message },
            e if e.is_not_found() => CliError::NotFound { message },
            KubeError::InvalidData { .. } => CliError::Input {
                message,
                help: None,
            },
            _ => CliError::Cluster { message },
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::internal(err.to_string())
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
