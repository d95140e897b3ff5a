//! Delivery helpers shared by the use cases.

use crate::domain::{ConnectionId, GameEvent, MessagePusher, Room};

/// Broadcast `events`, in order, to every player currently seated in `room`.
pub(crate) async fn broadcast_to_room(
    message_pusher: &dyn MessagePusher,
    room: &Room,
    events: &[GameEvent],
) {
    let targets = room.connection_ids();
    for event in events {
        if let Err(e) = message_pusher.broadcast(targets.clone(), event).await {
            tracing::warn!("Failed to broadcast to room '{}': {}", room.id, e);
        }
    }
}

/// Send `event` to the requesting connection only.
pub(crate) async fn reply(
    message_pusher: &dyn MessagePusher,
    connection_id: &ConnectionId,
    event: GameEvent,
) {
    if let Err(e) = message_pusher.push_to(connection_id, &event).await {
        tracing::warn!("Failed to reply to '{}': {}", connection_id, e);
    }
}
