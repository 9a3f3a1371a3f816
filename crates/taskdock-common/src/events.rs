use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::{GroupId, GroupSummary};

/// Group lifecycle notifications consumed by the taskbar layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    GroupCreated(GroupSummary),
    GroupUpdated(GroupSummary),
    GroupDeleted(GroupId),
    /// The persisted store changed in a way that needs a full resync.
    StoreChanged,
    Shutdown,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
