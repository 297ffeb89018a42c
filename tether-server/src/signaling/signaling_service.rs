use crate::signaling::SignalingOutput;
use async_trait::async_trait;
use axum::extract::ws::Message;
use dashmap::DashMap;
use std::sync::Arc;
use tether_core::{ConnectionId, OutboundMessage};
use tokio::sync::mpsc;
use tracing::{debug, error};

struct SignalingInner {
    connections: DashMap<ConnectionId, mpsc::UnboundedSender<Message>>,
}

/// Routes encoded frames to the writer task of each open WebSocket.
#[derive(Clone)]
pub struct SignalingService {
    inner: Arc<SignalingInner>,
}

impl SignalingService {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(SignalingInner {
                connections: DashMap::new(),
            }),
        }
    }

    pub fn add_connection(&self, connection_id: ConnectionId, tx: mpsc::UnboundedSender<Message>) {
        self.inner.connections.insert(connection_id, tx);
    }

    pub fn remove_connection(&self, connection_id: &ConnectionId) {
        self.inner.connections.remove(connection_id);
    }

    pub fn send_signal(&self, connection_id: ConnectionId, msg: &OutboundMessage) {
        let Some(connection) = self.inner.connections.get(&connection_id) else {
            debug!(
                "Attempted to send signal to closed connection {}",
                connection_id
            );
            return;
        };

        match msg.encode() {
            Ok(json) => {
                if let Err(e) = connection.send(Message::Text(json.into())) {
                    error!("Failed to send WS message to {}: {:?}", connection_id, e);
                }
            }
            Err(e) => error!("Failed to serialize signal message: {}", e),
        }
    }
}

impl Default for SignalingService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SignalingOutput for SignalingService {
    async fn send(&self, connection_id: ConnectionId, message: OutboundMessage) {
        self.send_signal(connection_id, &message);
    }
}
