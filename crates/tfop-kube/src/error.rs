//! Error types for tfop-kube

use thiserror::Error;

/// Result type for tfop-kube operations
pub type Result<T> = std::result::Result<T, KubeError>;

/// Errors that can occur during Kubernetes operations
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KubeError {
    /// Kubernetes API error
    #[error("Kubernetes API error: {0}")]
    Api(#[from] kube::Error),

    /// Referenced key absent from a ConfigMap or Secret
    #[error("unable to find key={key:?} in {kind}={name:?} namespace={namespace:?}")]
    KeyNotFound {
        key: String,
        kind: &'static str,
        name: String,
        namespace: String,
    },

    /// Referenced data present but unusable
    #[error("invalid data for key={key:?} in {kind}={name:?}: {message}")]
    InvalidData {
        key: String,
        kind: &'static str,
        name: String,
        message: String,
    },

    /// Error from the pure core helpers
    #[error(transparent)]
    Core(#[from] tfop_core::CoreError),
}

impl KubeError {
    /// Check if this is a Kubernetes 404 Not Found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, KubeError::Api(kube::Error::Api(resp)) if resp.code == 404)
    }

    /// Check if this is a conflict error (409), e.g. a stale resourceVersion
    pub fn is_conflict(&self) -> bool {
        matches!(self, KubeError::Api(kube::Error::Api(resp)) if resp.code == 409)
    }
}
