use crate::registry::ConnectionRegistry;
use serde::Serialize;
use std::collections::BTreeMap;
use tether_core::{ConnectionId, RoomId};

/// Point-in-time copy of the hub's membership state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HubSnapshot {
    pub connections: usize,
    /// Every non-empty room, advertised or not, with members in join order.
    pub rooms: BTreeMap<RoomId, Vec<ConnectionId>>,
}

impl HubSnapshot {
    pub(crate) fn capture(registry: &ConnectionRegistry) -> Self {
        Self {
            connections: registry.len(),
            rooms: registry
                .room_ids()
                .map(|room_id| (room_id.clone(), registry.members(room_id).to_vec()))
                .collect(),
        }
    }

    pub fn members(&self, room_id: &RoomId) -> &[ConnectionId] {
        self.rooms.get(room_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn report(&self) -> HealthReport {
        HealthReport {
            status: "ok",
            connections: self.connections,
            rooms: self.rooms.len(),
        }
    }
}

/// Body of `GET /health`. Counts only; ids are never exposed.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub connections: usize,
    pub rooms: usize,
}
