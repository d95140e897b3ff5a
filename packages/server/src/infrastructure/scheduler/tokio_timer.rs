//! Room cleanup timers on the tokio runtime.
//!
//! A timer does not delete anything itself: when it fires it sends an [`ExpiredRoom`]
//! notice into the dispatcher's queue, so the deletion runs in sequence with every other
//! game event.

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use tokio::{sync::mpsc, task::JoinHandle};

use crate::domain::{ExpiredRoom, RoomCleanupScheduler, RoomId, RoomInstanceId};

pub struct TokioRoomCleanupScheduler {
    delay: Duration,
    expired_tx: mpsc::UnboundedSender<ExpiredRoom>,
    timers: Mutex<HashMap<RoomId, JoinHandle<()>>>,
}

impl TokioRoomCleanupScheduler {
    pub fn new(delay: Duration, expired_tx: mpsc::UnboundedSender<ExpiredRoom>) -> Self {
        Self {
            delay,
            expired_tx,
            timers: Mutex::new(HashMap::new()),
        }
    }

    /// Number of timers currently armed
    pub fn armed(&self) -> usize {
        self.timers()
            .values()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    fn timers(&self) -> MutexGuard<'_, HashMap<RoomId, JoinHandle<()>>> {
        self.timers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RoomCleanupScheduler for TokioRoomCleanupScheduler {
    fn schedule(&self, room_id: RoomId, instance: RoomInstanceId) {
        let delay = self.delay;
        let expired_tx = self.expired_tx.clone();
        let expired = ExpiredRoom {
            room_id: room_id.clone(),
            instance,
        };

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if expired_tx.send(expired).is_err() {
                tracing::warn!("Cleanup timer fired after the dispatcher stopped");
            }
        });

        tracing::info!(
            "Room '{}' scheduled for cleanup in {}s",
            room_id,
            delay.as_secs()
        );
        let mut timers = self.timers();
        timers.retain(|_, armed| !armed.is_finished());
        if let Some(previous) = timers.insert(room_id, handle) {
            previous.abort();
        }
    }

    fn cancel(&self, room_id: &RoomId) {
        if let Some(handle) = self.timers().remove(room_id) {
            handle.abort();
            tracing::debug!("Cleanup timer for room '{}' cancelled", room_id);
        }
    }
}

impl Drop for TokioRoomCleanupScheduler {
    fn drop(&mut self) {
        for (_, handle) in self.timers().drain() {
            handle.abort();
        }
    }
}
