//! Off-UI-thread work: store file watching and Ctrl-C. Both only post
//! `UiMessage`s.

use std::time::Duration;

use taskdock_config::StoreWatcher;
use taskdock_taskbar::UiMessage;
use tokio::sync::broadcast;

use super::core::TaskdockApp;

impl TaskdockApp {
    /// Start the tokio runtime hosting the Ctrl-C handler and, when
    /// `watch_store` is set, the group store watcher.
    pub(super) fn start_background(&mut self, watch_store: bool) {
        let rt = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("taskdock-bg")
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                tracing::warn!("Background runtime unavailable (no store watching, no Ctrl-C): {e}");
                return;
            }
        };

        let tx = self.ui_tx.clone();
        rt.spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Ctrl-C received");
                let _ = tx.send(UiMessage::Shutdown);
            }
        });

        if watch_store {
            if let Some(path) = self.store_path.clone() {
                match StoreWatcher::new(path) {
                    Ok(watcher) => spawn_store_watch(&rt, watcher, self.ui_tx.clone()),
                    Err(e) => tracing::warn!("Group store not watched: {e}"),
                }
            }
        }

        self.tokio_runtime = Some(rt);
    }

    pub(super) fn stop_background(&mut self) {
        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(Duration::from_secs(2));
        }
    }
}

fn spawn_store_watch(
    rt: &tokio::runtime::Runtime,
    watcher: StoreWatcher,
    ui_tx: std::sync::mpsc::Sender<UiMessage>,
) {
    let (changed_tx, mut changed_rx) = broadcast::channel::<()>(8);
    tracing::info!("Watching group store: {}", watcher.path().display());

    rt.spawn(async move {
        if let Err(e) = watcher.watch(changed_tx).await {
            tracing::warn!("Group store watcher stopped: {e}");
        }
    });

    rt.spawn(async move {
        loop {
            match changed_rx.recv().await {
                Ok(()) | Err(broadcast::error::RecvError::Lagged(_)) => {
                    tracing::debug!("Group store changed on disk");
                    if ui_tx.send(UiMessage::Resync).is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });
}
