//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - Network/fetch-related errors for backend requests
//! - [`ValidationError`] - Folder names rejected before any request is issued
//! - [`GalleryError`] - Either of the above, as returned by controller actions

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (connection refused, CORS, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Listing body was not an array of entries
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
    /// Upload transport failed before a status was received
    #[error("Upload failed: {0}")]
    UploadFailed(String),
}

/// Client-side validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name is empty or only whitespace.
    #[error("name must not be empty")]
    Empty,
    /// Name contains a slash, backslash, or whitespace.
    #[error("invalid name '{0}' (no spaces, '/' or '\\')")]
    InvalidSegment(String),
}

/// Error returned by gallery actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The view state was disposed while the action was starting.
    #[error("gallery view is no longer available")]
    Detached,
}
