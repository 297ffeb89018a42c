use crate::registry::Connection;
use std::collections::{BTreeMap, HashMap};
use tether_core::{ConnectionId, RoomId};
use tracing::{debug, warn};

/// Single source of truth for who is connected and who sits in which room.
///
/// Both directions of every membership edge (connection -> rooms and
/// room -> members) are updated inside the same `&mut self` call, so the two
/// views can never disagree.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    connections: HashMap<ConnectionId, Connection>,
    /// Members in join order. A room with no members has no entry.
    rooms: BTreeMap<RoomId, Vec<ConnectionId>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a freshly minted connection with no rooms.
    ///
    /// Returns `false` if the id is already live.
    pub fn connect(&mut self, id: ConnectionId) -> bool {
        if self.connections.contains_key(&id) {
            warn!("Connection {} is already registered", id);
            return false;
        }

        self.connections.insert(id, Connection::new(id));
        true
    }

    /// Drop a connection together with any membership edges it still has.
    /// Unknown ids are a no-op.
    pub fn disconnect(&mut self, id: &ConnectionId) -> Option<Connection> {
        let connection = self.connections.remove(id)?;

        for room_id in connection.rooms() {
            self.detach_member(room_id, &connection.id());
        }

        debug!(
            "Connection {} removed from registry, left {} rooms",
            connection.id(),
            connection.rooms().len()
        );
        Some(connection)
    }

    pub fn exists(&self, id: &ConnectionId) -> bool {
        self.connections.contains_key(id)
    }

    pub fn get(&self, id: &ConnectionId) -> Option<&Connection> {
        self.connections.get(id)
    }

    /// Members of a room in join order; empty for a room nobody is in.
    pub fn members(&self, room_id: &RoomId) -> &[ConnectionId] {
        self.rooms.get(room_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn connection_ids(&self) -> impl Iterator<Item = ConnectionId> + '_ {
        self.connections.keys().copied()
    }

    /// Every room with at least one member, in sorted order.
    pub fn room_ids(&self) -> impl Iterator<Item = &RoomId> {
        self.rooms.keys()
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Commit a membership edge. Returns `false` when the connection is
    /// unknown or already in the room.
    pub fn add_member(&mut self, id: ConnectionId, room_id: &RoomId) -> bool {
        let Some(connection) = self.connections.get_mut(&id) else {
            return false;
        };
        if !connection.rooms_mut().insert(room_id.clone()) {
            return false;
        }

        self.rooms.entry(room_id.clone()).or_default().push(id);
        true
    }

    /// Remove a membership edge. Returns `false` when there was none.
    pub fn remove_member(&mut self, id: &ConnectionId, room_id: &RoomId) -> bool {
        let Some(connection) = self.connections.get_mut(id) else {
            return false;
        };
        if !connection.rooms_mut().remove(room_id) {
            return false;
        }

        self.detach_member(room_id, id);
        true
    }

    fn detach_member(&mut self, room_id: &RoomId, id: &ConnectionId) {
        let Some(members) = self.rooms.get_mut(room_id) else {
            return;
        };
        members.retain(|member| member != id);

        if members.is_empty() {
            self.rooms.remove(room_id);
        }
    }
}
