//! Deferred deletion of finished rooms.

use super::{RoomId, RoomInstanceId};

/// Emitted when a finished room's grace period has elapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpiredRoom {
    pub room_id: RoomId,
    pub instance: RoomInstanceId,
}

/// Arms and disarms the per-room cleanup timers.
#[cfg_attr(test, mockall::automock)]
pub trait RoomCleanupScheduler: Send + Sync {
    /// Arm the timer for `room_id`, replacing any timer already armed for it.
    fn schedule(&self, room_id: RoomId, instance: RoomInstanceId);

    /// Disarm the timer for `room_id`, if any.
    fn cancel(&self, room_id: &RoomId);
}
