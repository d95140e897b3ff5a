//! Construction of fresh rooms.

use std::sync::Arc;

use reorder_shared::time::Clock;

use super::{CategoryCatalog, Room, RoomId, RoomInstanceId, Shuffler, Timestamp};

/// Builds new rooms with a freshly shuffled category order.
#[derive(Clone)]
pub struct RoomFactory {
    catalog: Arc<CategoryCatalog>,
    shuffler: Arc<Shuffler>,
    clock: Arc<dyn Clock>,
}

impl RoomFactory {
    pub fn new(
        catalog: Arc<CategoryCatalog>,
        shuffler: Arc<Shuffler>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            catalog,
            shuffler,
            clock,
        }
    }

    pub fn create(&self, id: RoomId) -> Room {
        Room::new(
            id,
            RoomInstanceId::generate(),
            self.shuffler.shuffled(&self.catalog.names()),
            Timestamp::new(self.clock.now_millis()),
        )
    }
}
