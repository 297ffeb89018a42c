use tether_core::{InboundMessage, OutboundMessage, RoomId};

use crate::integration::init_tracing;
use crate::utils::{TestClient, spawn_server};

#[tokio::test]
async fn test_malformed_frame_keeps_connection() {
    init_tracing();

    let addr = spawn_server().await.expect("Failed to start server");
    let mut client = TestClient::connect(addr).await.expect("connect");

    for garbage in [
        "not json at all",
        r#"{"type":"join","payload":{}}"#,
        r#"{"type":"join","payload":{"room":""}}"#,
        r#"{"type":"relay-sdp","payload":{"peerID":"nobody","sessionDescription":{}}}"#,
        r#"{"type":"self-destruct"}"#,
    ] {
        client.send_raw(garbage).await.expect("send garbage");
    }

    // The socket still works after the bad frames were dropped.
    let room = RoomId::random();
    client
        .send(&InboundMessage::Join { room: room.clone() })
        .await
        .expect("join");

    let shared = client
        .recv_matching(|m| matches!(m, OutboundMessage::ShareRooms { rooms } if !rooms.is_empty()))
        .await
        .expect("share-rooms after join");
    assert_eq!(shared, OutboundMessage::ShareRooms { rooms: vec![room] });

    client.close().await.expect("close");
}
