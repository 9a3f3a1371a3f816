use taskdock_common::events::Event;
use taskdock_platform::PlatformEvent;

/// Everything the UI thread reacts to. Other threads only ever send these.
#[derive(Debug, Clone)]
pub enum UiMessage {
    Group(Event),
    Platform(PlatformEvent),
    /// Re-read the store and reconcile proxy windows.
    Resync,
    /// The popout renderer closed itself.
    PopoutClosed,
    Shutdown,
}

/// Whether the UI loop keeps running after a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}
