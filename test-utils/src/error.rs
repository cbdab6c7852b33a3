use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Binding or querying a local socket failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A canned response could not be assembled from the builder's parts.
    #[error("Invalid mock response: {0}")]
    InvalidResponse(String),
}
