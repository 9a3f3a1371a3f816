use std::cell::{Cell, RefCell};
use std::rc::Rc;

use taskdock_common::errors::TaskdockError;

use super::{Popout, PopupPlacement};

#[derive(Debug, Clone, PartialEq)]
pub enum PopoutCall {
    Open(PopupPlacement),
    Close,
    Refresh,
}

/// Popout that records calls into a shared log.
#[derive(Clone, Default)]
pub struct RecordingPopout {
    pub calls: Rc<RefCell<Vec<PopoutCall>>>,
    pub fail_open: Rc<Cell<bool>>,
}

impl RecordingPopout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<PopoutCall> {
        self.calls.borrow().clone()
    }

    pub fn opens(&self) -> Vec<PopupPlacement> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                PopoutCall::Open(p) => Some(p.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl Popout for RecordingPopout {
    fn open(&mut self, placement: &PopupPlacement) -> taskdock_common::Result<()> {
        if self.fail_open.get() {
            return Err(TaskdockError::Popout("scripted failure".into()));
        }
        self.calls
            .borrow_mut()
            .push(PopoutCall::Open(placement.clone()));
        Ok(())
    }

    fn close(&mut self) {
        self.calls.borrow_mut().push(PopoutCall::Close);
    }

    fn refresh(&mut self) {
        self.calls.borrow_mut().push(PopoutCall::Refresh);
    }
}
