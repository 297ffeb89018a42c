use std::collections::BTreeSet;
use tether_core::{ConnectionId, RoomId};

/// One live client session and the rooms it currently belongs to.
#[derive(Debug, Clone)]
pub struct Connection {
    id: ConnectionId,
    rooms: BTreeSet<RoomId>,
}

impl Connection {
    pub(crate) fn new(id: ConnectionId) -> Self {
        Self {
            id,
            rooms: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn rooms(&self) -> &BTreeSet<RoomId> {
        &self.rooms
    }

    pub fn is_in(&self, room_id: &RoomId) -> bool {
        self.rooms.contains(room_id)
    }

    pub(crate) fn rooms_mut(&mut self) -> &mut BTreeSet<RoomId> {
        &mut self.rooms
    }
}
