//! Error handling types

use thiserror::Error;

/// Result type alias for storage operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for kvs
///
/// Ordinary misses on `get` and `contains_key` are not errors; they are
/// reported as `Ok(None)` / `Ok(false)`. `NotFound` is reserved for
/// operations that contractually require a present entry.
#[derive(Error, Debug)]
pub enum Error {
    /// Operation required a present entry or storage
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Operation on a handle that is not initialized
    #[error("Invalid state: {message}")]
    InvalidState {
        /// Description of the state violation
        message: String,
    },

    /// Storage backend cannot be provided by this process
    #[error("Backend unavailable: {backend}")]
    BackendUnavailable {
        /// The requested backend kind
        backend: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an invalid state error
    pub fn invalid_state<S: Into<String>>(message: S) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    /// Create a backend unavailable error
    pub fn backend_unavailable<S: Into<String>>(backend: S) -> Self {
        Self::BackendUnavailable {
            backend: backend.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error without source
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Whether this error is a `NotFound`
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
