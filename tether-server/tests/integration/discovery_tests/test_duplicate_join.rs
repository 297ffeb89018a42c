use tether_core::RoomId;

use crate::integration::init_tracing;
use crate::utils::{connect, create_test_hub, join, settle};

#[tokio::test]
async fn test_duplicate_join() {
    init_tracing();

    let (hub, signaling) = create_test_hub();

    let a = connect(&hub).await;
    let b = connect(&hub).await;
    let room = RoomId::random();
    join(&hub, a, &room).await;
    join(&hub, b, &room).await;
    let before = settle(&hub).await;
    signaling.clear().await;

    join(&hub, b, &room).await;
    join(&hub, a, &room).await;
    let after = settle(&hub).await;

    // No notices, no broadcast, no state change.
    assert!(signaling.all().await.is_empty());
    assert_eq!(before, after);
}
