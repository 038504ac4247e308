//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`ApiError`] - network/API request errors, including the distinct
//!   cancellation classification the cache layer relies on
//! - [`StoreError`] - persistent cache (IndexedDB) failures
//! - [`AuthError`] - login and session persistence errors

use std::fmt;

/// Errors produced by requests to the admin API.
///
/// `Cancelled` is not a failure: it means the caller aborted the request
/// on purpose and the result must be discarded silently. Everything else
/// is surfaced to the view as a failure state.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// The request was intentionally aborted by its owner.
    Cancelled,
    /// Request failed before a response arrived (DNS, CORS, offline, ...).
    Network(String),
    /// HTTP error response (non-2xx status).
    Http(u16),
    /// The server answered 2xx but reported `success: false`.
    Api(String),
    /// Response body could not be decoded into the expected shape.
    Decode(String),
}

impl ApiError {
    /// True iff this error represents an intentional abort.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => write!(f, "Request cancelled"),
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Http(status) => write!(f, "HTTP error: {}", status),
            Self::Api(msg) => write!(f, "API error: {}", msg),
            Self::Decode(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Persistent cache (IndexedDB) errors.
///
/// These never propagate past the store boundary: every failure is logged
/// and reported to callers as a cache miss so the application degrades to
/// "always fetch from network".
#[derive(Debug, Clone)]
pub enum StoreError {
    /// Failed to open the database or create the object store.
    OpenFailed(String),
    /// A read transaction failed.
    ReadFailed(String),
    /// A write or delete transaction failed.
    WriteFailed(String),
    /// Stored value could not be converted back into JSON.
    ValueCorrupt(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenFailed(msg) => write!(f, "Failed to open cache database: {}", msg),
            Self::ReadFailed(msg) => write!(f, "Cache read failed: {}", msg),
            Self::WriteFailed(msg) => write!(f, "Cache write failed: {}", msg),
            Self::ValueCorrupt(msg) => write!(f, "Corrupt cache entry: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Login and session persistence errors.
#[derive(Debug, Clone)]
pub enum AuthError {
    /// Credentials rejected or request failed.
    LoginFailed(String),
    /// localStorage not available.
    StorageUnavailable,
    /// Failed to persist the session to localStorage.
    SaveFailed,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoginFailed(msg) => write!(f, "Login failed: {}", msg),
            Self::StorageUnavailable => write!(f, "localStorage not available"),
            Self::SaveFailed => write!(f, "failed to save session to localStorage"),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        Self::LoginFailed(err.to_string())
    }
}
