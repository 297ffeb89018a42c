use crate::registry::ConnectionRegistry;
use tether_core::{ConnectionId, RoomId};

/// Read-only room view over a [`ConnectionRegistry`].
///
/// Borrowing the registry means the view is always computed from the state
/// of the event being processed; there is nothing to go stale.
#[derive(Clone, Copy)]
pub struct RoomDirectory<'a> {
    registry: &'a ConnectionRegistry,
}

impl<'a> RoomDirectory<'a> {
    pub fn new(registry: &'a ConnectionRegistry) -> Self {
        Self { registry }
    }

    pub fn members(&self, room_id: &RoomId) -> &'a [ConnectionId] {
        self.registry.members(room_id)
    }

    /// Non-empty rooms whose name passes the room-ID validity predicate.
    pub fn list_rooms(&self) -> Vec<RoomId> {
        self.registry
            .room_ids()
            .filter(|room_id| room_id.is_valid())
            .cloned()
            .collect()
    }
}
