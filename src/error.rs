#[derive(thiserror::Error, Debug)]
pub enum PikaApiError {
    /// One message per invalid field, collected before any request is made.
    #[error("invalid request options: {}", .0.join("; "))]
    Validation(Vec<String>),
    /// The server answered with something that is not JSON (and not the
    /// rate-limit sentinel). Carries the raw body for diagnosis.
    #[error("unexpected non-JSON response: {0}")]
    MalformedResponse(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
