//! Join/leave transitions and the `AddPeer`/`RemovePeer` notifications they
//! produce.
//!
//! For every pair of connections sharing a room exactly one side is told to
//! create the offer: the later joiner. Incumbents are told to wait. Each
//! transition captures the room's members before it commits, so the joiner
//! never hears about itself and the leaver is excluded from its own fan-out.

use crate::protocol::Envelope;
use crate::registry::{ConnectionRegistry, RoomDirectory};
use tether_core::{ConnectionId, OutboundMessage, RoomId};
use tracing::{info, warn};

/// Put `joiner` into `room_id`.
///
/// Returns `None` when nothing changed: the connection is unknown or already
/// in the room. Re-joining is tolerated since reconnecting clients repeat it.
pub fn join(
    registry: &mut ConnectionRegistry,
    joiner: ConnectionId,
    room_id: &RoomId,
) -> Option<Vec<Envelope>> {
    let Some(connection) = registry.get(&joiner) else {
        warn!("Join from unknown connection {}", joiner);
        return None;
    };
    if connection.is_in(room_id) {
        warn!("Connection {} already joined to {}", joiner, room_id);
        return None;
    }

    let existing = RoomDirectory::new(registry).members(room_id).to_vec();
    let mut envelopes = Vec::with_capacity(existing.len() * 2);

    for peer in existing {
        envelopes.push(Envelope::new(
            peer,
            OutboundMessage::AddPeer {
                peer_id: joiner,
                create_offer: false,
            },
        ));
        envelopes.push(Envelope::new(
            joiner,
            OutboundMessage::AddPeer {
                peer_id: peer,
                create_offer: true,
            },
        ));
    }

    registry.add_member(joiner, room_id);
    info!("Connection {} joined room {}", joiner, room_id);

    Some(envelopes)
}

/// Take `leaver` out of one room, telling both sides to tear down.
///
/// Returns `None` when the connection is unknown or not in the room.
pub fn leave(
    registry: &mut ConnectionRegistry,
    leaver: ConnectionId,
    room_id: &RoomId,
) -> Option<Vec<Envelope>> {
    if !registry.get(&leaver)?.is_in(room_id) {
        return None;
    }

    let others: Vec<ConnectionId> = RoomDirectory::new(registry)
        .members(room_id)
        .iter()
        .copied()
        .filter(|member| *member != leaver)
        .collect();
    let mut envelopes = Vec::with_capacity(others.len() * 2);

    for peer in others {
        envelopes.push(Envelope::new(
            peer,
            OutboundMessage::RemovePeer { peer_id: leaver },
        ));
        envelopes.push(Envelope::new(
            leaver,
            OutboundMessage::RemovePeer { peer_id: peer },
        ));
    }

    registry.remove_member(&leaver, room_id);
    info!("Connection {} left room {}", leaver, room_id);

    Some(envelopes)
}

/// Leave every joined room, one room completely after another.
///
/// Returns `None` when nothing changed.
pub fn leave_all(registry: &mut ConnectionRegistry, leaver: ConnectionId) -> Option<Vec<Envelope>> {
    let rooms: Vec<RoomId> = registry.get(&leaver)?.rooms().iter().cloned().collect();
    if rooms.is_empty() {
        return None;
    }

    let mut envelopes = Vec::new();
    for room_id in &rooms {
        if let Some(room_envelopes) = leave(registry, leaver, room_id) {
            envelopes.extend(room_envelopes);
        }
    }

    Some(envelopes)
}

/// Disconnect path: leave everything, then forget the connection.
///
/// Returns `None` for an id that is not (or no longer) registered, which makes
/// a repeated disconnect a no-op.
pub fn disconnect(registry: &mut ConnectionRegistry, id: ConnectionId) -> Option<Vec<Envelope>> {
    if !registry.exists(&id) {
        return None;
    }

    let envelopes = leave_all(registry, id).unwrap_or_default();
    registry.disconnect(&id);

    Some(envelopes)
}
