use serde_json::json;
use tether_core::{ConnectionId, InboundMessage};

use crate::integration::init_tracing;
use crate::utils::{connect, create_test_hub, settle};

#[tokio::test]
async fn test_relay_to_vanished_peer() {
    init_tracing();

    let (hub, signaling) = create_test_hub();

    let a = connect(&hub).await;
    let b = connect(&hub).await;
    hub.disconnect(b).await.expect("hub closed");
    settle(&hub).await;
    signaling.clear().await;

    hub.inbound(
        a,
        InboundMessage::RelaySessionDescription {
            peer_id: b,
            session_description: json!({ "type": "answer", "sdp": "v=0\r\n" }),
        },
    )
    .await
    .expect("hub closed");
    hub.inbound(
        a,
        InboundMessage::RelayIceCandidate {
            peer_id: ConnectionId::new(),
            ice_candidate: json!(null),
        },
    )
    .await
    .expect("hub closed");
    settle(&hub).await;

    // Nothing to anyone, and nothing back to the sender either.
    assert!(signaling.all().await.is_empty());
}
