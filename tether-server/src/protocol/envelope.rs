use tether_core::{ConnectionId, OutboundMessage};

/// An outbound message addressed to exactly one connection.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub to: ConnectionId,
    pub message: OutboundMessage,
}

impl Envelope {
    pub fn new(to: ConnectionId, message: OutboundMessage) -> Self {
        Self { to, message }
    }
}
