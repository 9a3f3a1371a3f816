use std::cell::{Cell, RefCell};

use taskdock_common::errors::StoreError;
use taskdock_common::types::{GroupId, GroupSummary};

use super::GroupStore;

/// In-memory store. Item counts come from `GroupSummary::item_count`.
#[derive(Debug, Default)]
pub struct MemoryGroupStore {
    groups: RefCell<Vec<GroupSummary>>,
    fail: Cell<bool>,
}

impl MemoryGroupStore {
    pub fn new(groups: Vec<GroupSummary>) -> Self {
        Self {
            groups: RefCell::new(groups),
            fail: Cell::new(false),
        }
    }

    pub fn set(&self, groups: Vec<GroupSummary>) {
        *self.groups.borrow_mut() = groups;
    }

    /// Insert or replace by id.
    pub fn insert(&self, group: GroupSummary) {
        let mut groups = self.groups.borrow_mut();
        match groups.iter_mut().find(|g| g.id == group.id) {
            Some(existing) => *existing = group,
            None => groups.push(group),
        }
    }

    pub fn remove(&self, id: &GroupId) {
        self.groups.borrow_mut().retain(|g| &g.id != id);
    }

    pub fn set_item_count(&self, id: &GroupId, count: usize) {
        if let Some(group) = self.groups.borrow_mut().iter_mut().find(|g| &g.id == id) {
            group.item_count = count;
        }
    }

    /// Make every read fail, to exercise fallbacks.
    pub fn fail_reads(&self, fail: bool) {
        self.fail.set(fail);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.fail.get() {
            return Err(StoreError::Parse("scripted failure".into()));
        }
        Ok(())
    }
}

impl GroupStore for MemoryGroupStore {
    fn groups(&self) -> Result<Vec<GroupSummary>, StoreError> {
        self.check()?;
        Ok(self.groups.borrow().clone())
    }

    fn fresh_item_count(&self, id: &GroupId) -> Result<usize, StoreError> {
        self.check()?;
        Ok(self
            .groups
            .borrow()
            .iter()
            .find(|g| &g.id == id)
            .map(|g| g.item_count)
            .unwrap_or(0))
    }
}
