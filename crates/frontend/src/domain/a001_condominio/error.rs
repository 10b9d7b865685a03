use thiserror::Error;

/// Why the housing type of a condominium could not be resolved
///
/// All variants are absorbed by the synchronizer: they are logged and the
/// label falls back to the bare default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitTypeError {
    /// The request never produced a response (network down, CORS, aborted)
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status
    #[error("HTTP error {}{}", .status, .message.as_deref().map(|m| format!(": {}", m)).unwrap_or_default())]
    Status { status: u16, message: Option<String> },

    /// 2xx answer whose body is not `{"tipo": string}`
    #[error("failed to parse response: {0}")]
    Payload(String),
}
