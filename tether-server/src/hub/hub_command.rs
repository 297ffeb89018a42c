use crate::hub::HubSnapshot;
use tether_core::{ConnectionId, InboundMessage};
use tokio::sync::oneshot;

/// Events the transport layer feeds into the hub.
#[derive(Debug)]
pub enum HubCommand {
    /// A WebSocket finished its upgrade and its outbound route is registered.
    Connect { connection_id: ConnectionId },

    /// A decoded frame from a live connection.
    Inbound {
        connection_id: ConnectionId,
        message: InboundMessage,
    },

    /// The socket closed, errored, or was reset.
    Disconnect { connection_id: ConnectionId },

    /// Copy out the current membership state.
    Snapshot {
        respond_to: oneshot::Sender<HubSnapshot>,
    },
}
