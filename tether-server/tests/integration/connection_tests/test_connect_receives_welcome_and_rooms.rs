use tether_core::{OutboundMessage, RoomId};

use crate::integration::init_tracing;
use crate::utils::{connect, create_test_hub, join, settle};

#[tokio::test]
async fn test_connect_receives_welcome_and_rooms() {
    init_tracing();

    let (hub, signaling) = create_test_hub();

    let a = connect(&hub).await;
    let room = RoomId::random();
    join(&hub, a, &room).await;

    let b = connect(&hub).await;
    let snapshot = settle(&hub).await;
    assert_eq!(snapshot.connections, 2);

    // Welcome first, then the current room list.
    assert_eq!(
        signaling.messages_for(&b).await,
        vec![
            OutboundMessage::Welcome { peer_id: b },
            OutboundMessage::ShareRooms {
                rooms: vec![room.clone()]
            },
        ]
    );

    // Existing connections see the broadcast too.
    assert_eq!(
        signaling.shared_rooms_for(&a).await.last(),
        Some(&vec![room])
    );
}
