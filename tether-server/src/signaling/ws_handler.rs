use crate::app::AppState;
use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use tether_core::{ConnectionId, InboundMessage};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let connection_id = ConnectionId::new();
    info!("New WebSocket connection: {}", connection_id);

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    // The route must exist before the hub sends the welcome frame.
    state.signaling.add_connection(connection_id, tx);

    if let Err(e) = state.hub.connect(connection_id).await {
        error!("Cannot register {}: {}", connection_id, e);
        state.signaling.remove_connection(&connection_id);
        return;
    }

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let hub = state.hub.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => match InboundMessage::decode(text.as_str()) {
                        Ok(message) => {
                            if let Err(e) = hub.inbound(connection_id, message).await {
                                error!("Hub died: {}", e);
                                break;
                            }
                        }
                        Err(e) => warn!("Invalid frame from {}: {}", connection_id, e),
                    },
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    state.signaling.remove_connection(&connection_id);
    if let Err(e) = state.hub.disconnect(connection_id).await {
        debug!("Hub gone before disconnect of {}: {}", connection_id, e);
    }
    info!("WebSocket disconnected: {}", connection_id);
}
