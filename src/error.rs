use thiserror::Error;

/// Failure to decode the bundled spell document.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("malformed spell data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Failure to read or write the cookie jar. Callers treat any of these as
/// "cookies unavailable" for the rest of the session.
#[derive(Debug, Error)]
pub enum CookieError {
    #[error("cookie jar I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cookie jar is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cookie storage unavailable")]
    Unavailable,
}
