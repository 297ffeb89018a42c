use crate::error::HubError;
use crate::hub::{HubCommand, HubSnapshot};
use tether_core::{ConnectionId, InboundMessage};
use tokio::sync::{mpsc, oneshot};

/// Clonable sender side of a running [`Hub`](crate::Hub).
#[derive(Clone)]
pub struct HubHandle {
    command_tx: mpsc::Sender<HubCommand>,
}

impl HubHandle {
    pub fn new(command_tx: mpsc::Sender<HubCommand>) -> Self {
        Self { command_tx }
    }

    pub async fn connect(&self, connection_id: ConnectionId) -> Result<(), HubError> {
        self.send(HubCommand::Connect { connection_id }).await
    }

    pub async fn inbound(
        &self,
        connection_id: ConnectionId,
        message: InboundMessage,
    ) -> Result<(), HubError> {
        self.send(HubCommand::Inbound {
            connection_id,
            message,
        })
        .await
    }

    pub async fn disconnect(&self, connection_id: ConnectionId) -> Result<(), HubError> {
        self.send(HubCommand::Disconnect { connection_id }).await
    }

    /// Resolves after every command queued before it has been handled.
    pub async fn snapshot(&self) -> Result<HubSnapshot, HubError> {
        let (respond_to, rx) = oneshot::channel();
        self.send(HubCommand::Snapshot { respond_to }).await?;
        rx.await.map_err(|_| HubError::Closed)
    }

    pub async fn send(&self, cmd: HubCommand) -> Result<(), HubError> {
        self.command_tx.send(cmd).await.map_err(|_| HubError::Closed)
    }
}
