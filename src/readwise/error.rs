//! Error types for the Readwise API integration

use thiserror::Error;

/// Errors that can occur when submitting a highlight to Readwise
///
/// Both variants surface to the user as the same generic failure notice;
/// the distinction exists only for logging.
#[derive(Debug, Error)]
pub enum ReadwiseError {
    /// The service returned a non-success status (auth failure, rate
    /// limiting and malformed payloads are deliberately not told apart)
    #[error("Readwise rejected the request (status {status})")]
    Rejected {
        /// HTTP status code
        status: u16,
    },

    /// The request never produced a response (network, DNS, timeout)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
