use async_trait::async_trait;
use tether_core::{ConnectionId, OutboundMessage};

/// Outbound half of the transport, as seen by the hub.
///
/// Delivery is fire-and-forget: implementations must not wait for the client
/// and must keep per-connection order.
#[async_trait]
pub trait SignalingOutput: Send + Sync {
    async fn send(&self, connection_id: ConnectionId, message: OutboundMessage);
}
