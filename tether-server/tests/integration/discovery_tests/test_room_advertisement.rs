use tether_core::RoomId;

use crate::integration::init_tracing;
use crate::utils::{connect, create_test_hub, join, leave, settle};

#[tokio::test]
async fn test_room_advertisement() {
    init_tracing();

    let (hub, signaling) = create_test_hub();

    let a = connect(&hub).await;
    let b = connect(&hub).await;
    let room = RoomId::random();
    settle(&hub).await;
    signaling.clear().await;

    join(&hub, a, &room).await;
    settle(&hub).await;
    assert_eq!(signaling.shared_rooms_for(&a).await, vec![vec![room.clone()]]);
    assert_eq!(signaling.shared_rooms_for(&b).await, vec![vec![room.clone()]]);

    leave(&hub, a).await;
    settle(&hub).await;
    assert_eq!(
        signaling.shared_rooms_for(&b).await,
        vec![vec![room], vec![]]
    );
}

#[tokio::test]
async fn test_non_uuid_rooms_are_joinable_but_not_listed() {
    init_tracing();

    let (hub, signaling) = create_test_hub();

    let a = connect(&hub).await;
    let b = connect(&hub).await;
    let named = RoomId::from("study-group");
    let v1 = RoomId::from("3f1c2a9e-5b7d-1e21-9a0b-6c8d7e9f0a1b");
    settle(&hub).await;
    signaling.clear().await;

    join(&hub, a, &named).await;
    join(&hub, b, &named).await;
    join(&hub, a, &v1).await;
    let snapshot = settle(&hub).await;

    assert_eq!(snapshot.members(&named), &[a, b]);
    assert_eq!(signaling.peer_notices_for(&b).await.len(), 1);

    for rooms in signaling.shared_rooms_for(&b).await {
        assert!(rooms.is_empty());
    }
}
