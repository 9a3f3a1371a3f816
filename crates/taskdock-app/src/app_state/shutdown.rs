//! Graceful shutdown: popup, proxy windows, background threads.

use super::core::TaskdockApp;

impl TaskdockApp {
    /// Tear everything down. Safe to call more than once.
    ///
    /// Order matters:
    /// 1. Close the popup and destroy proxy windows (hooks go before handles)
    /// 2. Detach the resync timer; it exits on its next send
    /// 3. Shut down the tokio runtime (store watcher, Ctrl-C handler)
    pub(super) fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        tracing::info!("Initiating graceful shutdown");

        self.service.shutdown();
        self.resync_timer = None;
        self.stop_background();

        self.shut_down = true;
        tracing::info!("Graceful shutdown complete");
    }
}
