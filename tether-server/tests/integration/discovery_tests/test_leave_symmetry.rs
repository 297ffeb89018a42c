use tether_core::{OutboundMessage, RoomId};

use crate::integration::init_tracing;
use crate::utils::{connect, create_test_hub, join, leave, settle};

#[tokio::test]
async fn test_leave_symmetry() {
    init_tracing();

    let (hub, signaling) = create_test_hub();

    let a = connect(&hub).await;
    let b = connect(&hub).await;
    let c = connect(&hub).await;
    let room = RoomId::random();
    for id in [a, b, c] {
        join(&hub, id, &room).await;
    }
    settle(&hub).await;
    signaling.clear().await;

    leave(&hub, a).await;
    let snapshot = settle(&hub).await;

    assert_eq!(snapshot.members(&room), &[b, c]);
    assert_eq!(snapshot.connections, 3);

    assert_eq!(
        signaling.peer_notices_for(&b).await,
        vec![OutboundMessage::RemovePeer { peer_id: a }]
    );
    assert_eq!(
        signaling.peer_notices_for(&c).await,
        vec![OutboundMessage::RemovePeer { peer_id: a }]
    );
    assert_eq!(
        signaling.peer_notices_for(&a).await,
        vec![
            OutboundMessage::RemovePeer { peer_id: b },
            OutboundMessage::RemovePeer { peer_id: c },
        ]
    );
}

#[tokio::test]
async fn test_leave_without_rooms_is_silent() {
    init_tracing();

    let (hub, signaling) = create_test_hub();

    let a = connect(&hub).await;
    settle(&hub).await;
    signaling.clear().await;

    leave(&hub, a).await;
    settle(&hub).await;

    assert!(signaling.all().await.is_empty());
}

#[tokio::test]
async fn test_leave_then_rejoin_renegotiates() {
    init_tracing();

    let (hub, signaling) = create_test_hub();

    let a = connect(&hub).await;
    let b = connect(&hub).await;
    let room = RoomId::random();
    join(&hub, a, &room).await;
    join(&hub, b, &room).await;
    leave(&hub, a).await;
    settle(&hub).await;
    signaling.clear().await;

    join(&hub, a, &room).await;
    settle(&hub).await;

    // a is now the later joiner, so it makes the offer.
    assert_eq!(
        signaling.peer_notices_for(&a).await,
        vec![OutboundMessage::AddPeer { peer_id: b, create_offer: true }]
    );
    assert_eq!(
        signaling.peer_notices_for(&b).await,
        vec![OutboundMessage::AddPeer { peer_id: a, create_offer: false }]
    );
}
