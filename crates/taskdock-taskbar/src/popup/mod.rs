//! The single group popup and the renderer seam.

mod controller;
mod types;

#[cfg(test)]
pub(crate) mod recording;

pub use controller::PopupController;
pub use types::{PopupAction, PopupPlacement, PopupSlot, PopupState};

/// Draws popup content. Rendering itself lives outside this crate.
pub trait Popout {
    fn open(&mut self, placement: &PopupPlacement) -> taskdock_common::Result<()>;

    fn close(&mut self);

    /// Re-read content for the popup currently open.
    fn refresh(&mut self);
}
