use crate::hub::{HubCommand, HubHandle, HubSnapshot};
use crate::protocol::{self, Envelope, RelayKind, peer_discovery};
use crate::registry::ConnectionRegistry;
use crate::signaling::SignalingOutput;
use std::sync::Arc;
use tether_core::{ConnectionId, InboundMessage, OutboundMessage};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Single owner of the connection registry.
///
/// Commands are handled strictly one at a time and each one runs to
/// completion (membership change, notification fan-out, room broadcast)
/// before the next is taken, so no transition ever observes another one half
/// done.
pub struct Hub {
    registry: ConnectionRegistry,

    /// Commands from every connection's WebSocket task.
    command_rx: mpsc::Receiver<HubCommand>,

    /// Outbound route back to the clients.
    signaling: Arc<dyn SignalingOutput>,
}

impl Hub {
    pub fn new(command_rx: mpsc::Receiver<HubCommand>, signaling: Arc<dyn SignalingOutput>) -> Self {
        Self {
            registry: ConnectionRegistry::new(),
            command_rx,
            signaling,
        }
    }

    /// Start the hub loop on the current runtime.
    ///
    /// The loop ends once every [`HubHandle`] clone has been dropped. A
    /// `capacity` of zero is raised to one.
    pub fn spawn(signaling: Arc<dyn SignalingOutput>, capacity: usize) -> HubHandle {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        let hub = Self::new(rx, signaling);
        tokio::spawn(hub.run());

        HubHandle::new(tx)
    }

    pub async fn run(mut self) {
        info!("Hub event loop started");

        loop {
            match self.command_rx.recv().await {
                Some(cmd) => self.handle_command(cmd).await,
                None => {
                    info!("Command channel closed. Shutting down hub.");
                    break;
                }
            }
        }

        info!(
            "Hub event loop finished with {} connections still registered",
            self.registry.len()
        );
    }

    async fn handle_command(&mut self, cmd: HubCommand) {
        match cmd {
            HubCommand::Connect { connection_id } => {
                if !self.registry.connect(connection_id) {
                    return;
                }
                info!("Connection {} registered", connection_id);

                self.dispatch(vec![Envelope::new(
                    connection_id,
                    OutboundMessage::Welcome {
                        peer_id: connection_id,
                    },
                )])
                .await;
                self.advertise_rooms().await;
            }

            HubCommand::Inbound {
                connection_id,
                message,
            } => {
                if !self.registry.exists(&connection_id) {
                    warn!("Dropping frame from unregistered connection {}", connection_id);
                    return;
                }
                self.handle_inbound(connection_id, message).await;
            }

            HubCommand::Disconnect { connection_id } => {
                let Some(envelopes) = peer_discovery::disconnect(&mut self.registry, connection_id)
                else {
                    debug!("Repeated disconnect for {}", connection_id);
                    return;
                };
                info!("Connection {} disconnected", connection_id);

                self.dispatch(envelopes).await;
                self.advertise_rooms().await;
            }

            HubCommand::Snapshot { respond_to } => {
                let _ = respond_to.send(HubSnapshot::capture(&self.registry));
            }
        }
    }

    async fn handle_inbound(&mut self, sender: ConnectionId, message: InboundMessage) {
        match message {
            InboundMessage::Join { room } => {
                let Some(envelopes) = peer_discovery::join(&mut self.registry, sender, &room) else {
                    return;
                };
                self.dispatch(envelopes).await;
                self.advertise_rooms().await;
            }

            InboundMessage::Leave => {
                let Some(envelopes) = peer_discovery::leave_all(&mut self.registry, sender) else {
                    debug!("Leave from {} which is in no rooms", sender);
                    return;
                };
                self.dispatch(envelopes).await;
                self.advertise_rooms().await;
            }

            InboundMessage::RelaySessionDescription {
                peer_id,
                session_description,
            } => {
                self.relay(RelayKind::SessionDescription, sender, peer_id, session_description)
                    .await;
            }

            InboundMessage::RelayIceCandidate {
                peer_id,
                ice_candidate,
            } => {
                self.relay(RelayKind::IceCandidate, sender, peer_id, ice_candidate)
                    .await;
            }
        }
    }

    async fn relay(
        &self,
        kind: RelayKind,
        sender: ConnectionId,
        target: ConnectionId,
        payload: serde_json::Value,
    ) {
        if let Some(envelope) = protocol::relay(&self.registry, kind, sender, target, payload) {
            self.dispatch(vec![envelope]).await;
        }
    }

    async fn advertise_rooms(&self) {
        let envelopes = protocol::share_rooms(&self.registry);
        self.dispatch(envelopes).await;
    }

    /// Hand envelopes to the transport in order, skipping recipients that are
    /// no longer registered (e.g. the leaver's own notices on disconnect).
    async fn dispatch(&self, envelopes: Vec<Envelope>) {
        for Envelope { to, message } in envelopes {
            if !self.registry.exists(&to) {
                debug!("Skipping {:?} for departed connection {}", message, to);
                continue;
            }
            self.signaling.send(to, message).await;
        }
    }
}
