use crate::protocol::Envelope;
use crate::registry::{ConnectionRegistry, RoomDirectory};
use tether_core::OutboundMessage;

/// Full-state `ShareRooms` broadcast: one envelope per live connection, all
/// carrying the same room list.
pub fn share_rooms(registry: &ConnectionRegistry) -> Vec<Envelope> {
    let rooms = RoomDirectory::new(registry).list_rooms();

    registry
        .connection_ids()
        .map(|id| Envelope::new(id, OutboundMessage::ShareRooms { rooms: rooms.clone() }))
        .collect()
}
