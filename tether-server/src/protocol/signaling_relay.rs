use crate::protocol::Envelope;
use crate::registry::ConnectionRegistry;
use serde_json::Value;
use tether_core::{ConnectionId, OutboundMessage};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayKind {
    SessionDescription,
    IceCandidate,
}

/// Address an opaque negotiation payload from `sender` to `target`.
///
/// Returns `None` when the target is not connected; that is an ordinary race
/// with a disconnect and the sender is not told.
pub fn relay(
    registry: &ConnectionRegistry,
    kind: RelayKind,
    sender: ConnectionId,
    target: ConnectionId,
    payload: Value,
) -> Option<Envelope> {
    if !registry.exists(&target) {
        debug!("Dropping {:?} from {} to vanished peer {}", kind, sender, target);
        return None;
    }

    let message = match kind {
        RelayKind::SessionDescription => OutboundMessage::SessionDescription {
            peer_id: sender,
            session_description: payload,
        },
        RelayKind::IceCandidate => OutboundMessage::IceCandidate {
            peer_id: sender,
            ice_candidate: payload,
        },
    };

    Some(Envelope::new(target, message))
}
