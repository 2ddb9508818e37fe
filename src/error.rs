use thiserror::Error;

/// Failures a handler can hand back to the hosting platform.
///
/// Nothing is recovered locally: every variant propagates through `?`
/// into the runtime's boxed error.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("failed to serialize response body: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to build HTTP response: {0}")]
    Response(#[from] http::Error),
}
