//! Read access to the persisted groups.

mod json;
mod memory;

pub use json::JsonGroupStore;
pub use memory::MemoryGroupStore;

use taskdock_common::errors::StoreError;
use taskdock_common::types::{GroupId, GroupSummary};

/// Source of truth for groups and their item counts.
///
/// Implementations must read fresh on every call: callers rely on this to
/// size popups correctly when their own copy of a group is stale.
pub trait GroupStore {
    /// Every group, in display order.
    fn groups(&self) -> Result<Vec<GroupSummary>, StoreError>;

    /// Current number of shortcuts in a group. Unknown groups count as empty.
    fn fresh_item_count(&self, id: &GroupId) -> Result<usize, StoreError>;

    /// Whether a group currently exists.
    fn contains(&self, id: &GroupId) -> Result<bool, StoreError> {
        Ok(self.groups()?.iter().any(|g| &g.id == id))
    }
}
