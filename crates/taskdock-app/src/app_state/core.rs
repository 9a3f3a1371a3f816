//! TaskdockApp struct definition, constructor and message loop.

use std::path::PathBuf;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use taskdock_common::events::{Event, EventBus};
use taskdock_config::TaskdockConfig;
use taskdock_platform::PlatformAdapter;
use taskdock_taskbar::{GroupStore, LoopControl, Popout, TaskbarService, UiMessage};
use tokio::sync::broadcast;

/// Longest the UI thread blocks in the OS message pump before checking
/// its channels again.
pub(super) const PUMP_INTERVAL: Duration = Duration::from_millis(50);

/// Top-level application state.
pub struct TaskdockApp {
    pub(super) config: TaskdockConfig,
    pub(super) adapter: Rc<dyn PlatformAdapter>,
    pub(super) store: Rc<dyn GroupStore>,
    pub(super) service: TaskbarService,

    // Group lifecycle events from in-process editors
    pub(super) event_bus: EventBus,
    pub(super) group_events: broadcast::Receiver<Event>,

    // Cross-thread handoff onto the UI thread
    pub(super) ui_tx: Sender<UiMessage>,
    pub(super) ui_rx: Receiver<UiMessage>,

    // Background work
    pub(super) store_path: Option<PathBuf>,
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,
    pub(super) resync_timer: Option<JoinHandle<()>>,

    pub(super) shut_down: bool,
}

impl TaskdockApp {
    pub fn new(
        config: TaskdockConfig,
        adapter: Rc<dyn PlatformAdapter>,
        store: Rc<dyn GroupStore>,
        popout: Box<dyn Popout>,
        store_path: Option<PathBuf>,
    ) -> Self {
        let service = TaskbarService::new(adapter.clone(), store.clone(), popout, &config);
        let event_bus = EventBus::default();
        let group_events = event_bus.subscribe();
        let (ui_tx, ui_rx) = mpsc::channel();
        Self {
            config,
            adapter,
            store,
            service,
            event_bus,
            group_events,
            ui_tx,
            ui_rx,
            store_path,
            tokio_runtime: None,
            resync_timer: None,
            shut_down: false,
        }
    }

    /// Sender for posting messages onto the UI thread from anywhere.
    pub fn ui_sender(&self) -> Sender<UiMessage> {
        self.ui_tx.clone()
    }

    /// Publisher for group lifecycle events.
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Create a proxy window per group and start background work, then loop
    /// until quit or Ctrl-C. Shuts down before returning.
    pub fn run(&mut self) {
        self.attach_platform();
        self.service.resync();
        self.start_background(self.config.store.watch);
        self.start_resync_timer();

        while self.tick(PUMP_INTERVAL) == LoopControl::Continue {}
        self.shutdown();
    }

    pub(super) fn attach_platform(&mut self) {
        if let Err(e) = self.service.attach() {
            tracing::warn!("Window events unavailable, clicks will not open popups: {e}");
        }
    }

    pub(super) fn start_resync_timer(&mut self) {
        self.resync_timer = taskdock_taskbar::spawn_resync_timer(
            self.config.taskbar.resync_interval_secs,
            self.ui_tx.clone(),
        );
    }

    /// One loop iteration: pump OS messages, then everything queued for the
    /// UI thread.
    pub(super) fn tick(&mut self, timeout: Duration) -> LoopControl {
        if !self.adapter.pump_messages(timeout) {
            tracing::info!("Quit requested by the OS");
            return LoopControl::Exit;
        }
        self.service.drain_platform_events();
        if self.service.drain_messages(&self.ui_rx) == LoopControl::Exit {
            return LoopControl::Exit;
        }
        self.service.drain_group_events(&mut self.group_events)
    }
}

#[cfg(test)]
pub(super) mod test_support {
    use std::rc::Rc;

    use taskdock_common::types::GroupSummary;
    use taskdock_config::TaskdockConfig;
    use taskdock_platform::FakeAdapter;
    use taskdock_taskbar::MemoryGroupStore;

    use super::TaskdockApp;
    use crate::app_state::LogPopout;

    pub fn app() -> (Rc<FakeAdapter>, Rc<MemoryGroupStore>, TaskdockApp) {
        let fake = Rc::new(FakeAdapter::new());
        let store = Rc::new(MemoryGroupStore::new(vec![
            GroupSummary::new("work", "Work").with_item_count(3),
            GroupSummary::new("games", "Games").with_item_count(8),
        ]));
        let app = TaskdockApp::new(
            TaskdockConfig::default(),
            fake.clone(),
            store.clone(),
            Box::new(LogPopout::new()),
            None,
        );
        (fake, store, app)
    }
}
