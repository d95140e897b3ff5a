//! Fixtures for use case tests.

use std::sync::{Arc, Mutex};

use reorder_shared::time::FixedClock;

use crate::{
    domain::{
        CategoryCatalog, ConnectionId, GameEvent, MockMessagePusher, PlayerName, RoomFactory,
        RoomId, Shuffler,
    },
    infrastructure::repository::InMemoryRoomRepository,
};

/// Every event sent, with the connections it went to
pub type SentLog = Arc<Mutex<Vec<(Vec<ConnectionId>, GameEvent)>>>;

pub fn name(value: &str) -> PlayerName {
    PlayerName::new(value.to_string()).unwrap()
}

pub fn room_id(value: &str) -> RoomId {
    RoomId::new(value.to_string()).unwrap()
}

pub fn create_test_repository() -> Arc<InMemoryRoomRepository> {
    Arc::new(InMemoryRoomRepository::new(RoomFactory::new(
        Arc::new(CategoryCatalog::builtin()),
        Arc::new(Shuffler::new(Some(11))),
        Arc::new(FixedClock::new(0)),
    )))
}

/// A pusher mock that accepts everything and records what was sent
pub fn recording_pusher() -> (MockMessagePusher, SentLog) {
    let sent = SentLog::default();
    let mut pusher = MockMessagePusher::new();

    let log = sent.clone();
    pusher
        .expect_broadcast()
        .returning(move |targets, event| {
            log.lock().unwrap().push((targets, event.clone()));
            Ok(())
        });
    let log = sent.clone();
    pusher.expect_push_to().returning(move |connection_id, event| {
        log.lock().unwrap().push((vec![*connection_id], event.clone()));
        Ok(())
    });
    pusher.expect_register_client().returning(|_, _| ());
    pusher.expect_unregister_client().returning(|_| ());

    (pusher, sent)
}

/// Events recorded so far, without their targets
pub fn sent_events(sent: &SentLog) -> Vec<GameEvent> {
    sent.lock()
        .unwrap()
        .iter()
        .map(|(_, event)| event.clone())
        .collect()
}
