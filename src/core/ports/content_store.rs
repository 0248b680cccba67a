//! Content store port
//!
//! Defines how documents are read from the code hosting platform.

use thiserror::Error;

/// Errors raised while fetching a document
#[derive(Debug, Error)]
pub enum FetchError {
    /// The document does not exist at the requested location
    #[error("content not found: {0}")]
    NotFound(String),

    /// The store could not be reached or answered with an error
    #[error("content store request failed: {0}")]
    Transport(String),
}

/// Read access to repository contents
///
/// Implementations return the document body in its transport encoding
/// (base64), exactly as the platform's contents API delivers it.
#[cfg_attr(test, mockall::automock)]
pub trait ContentStore: Send + Sync {
    /// Fetch `path` at `reference` from `owner/repo`
    fn get_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        reference: &str,
    ) -> Result<String, FetchError>;
}
