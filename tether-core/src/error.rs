use thiserror::Error;

/// Failures while turning WebSocket text frames into protocol messages and back.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed signaling frame: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("join request carries an empty room identifier")]
    EmptyRoom,

    #[error("failed to encode signaling frame: {0}")]
    Encode(#[source] serde_json::Error),
}
