use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::time::Duration;
use taskdock_common::ConfigError;
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

const DEBOUNCE: Duration = Duration::from_millis(500);

/// Watches the group store file and signals when it changes.
pub struct StoreWatcher {
    path: PathBuf,
}

impl StoreWatcher {
    pub fn new(path: PathBuf) -> Result<Self, ConfigError> {
        if path.file_name().is_none() {
            return Err(ConfigError::WatchError(format!(
                "{} does not name a file",
                path.display()
            )));
        }
        if !path.exists() {
            warn!(
                "group store {} does not exist yet, will watch for creation",
                path.display()
            );
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Watch until the notify channel closes, sending `()` on `tx` once per
    /// debounced burst of changes.
    pub async fn watch(&self, tx: broadcast::Sender<()>) -> Result<(), ConfigError> {
        let watch_dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();

        info!("watching group store {}", self.path.display());

        let (notify_tx, mut notify_rx) = tokio::sync::mpsc::channel::<()>(16);

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) => {
                    let relevant = matches!(
                        event.kind,
                        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                    );
                    let ours = event
                        .paths
                        .iter()
                        .any(|p| p.file_name().map(|n| n == file_name).unwrap_or(false));
                    if relevant && ours {
                        debug!("group store change detected");
                        let _ = notify_tx.try_send(());
                    }
                }
                Err(e) => error!("store watcher error: {e}"),
            },
            notify::Config::default(),
        )
        .map_err(|e| ConfigError::WatchError(format!("failed to create watcher: {e}")))?;

        watcher
            .watch(&watch_dir, RecursiveMode::NonRecursive)
            .map_err(|e| {
                ConfigError::WatchError(format!("failed to watch {}: {e}", watch_dir.display()))
            })?;

        while notify_rx.recv().await.is_some() {
            if !debounce(&mut notify_rx).await {
                break;
            }
            info!("group store changed");
            if tx.send(()).is_err() {
                debug!("no receivers for store change signal");
            }
        }

        drop(watcher);
        Ok(())
    }
}

/// Swallow further signals until `DEBOUNCE` passes quietly. Returns false if
/// the channel closed meanwhile.
async fn debounce(rx: &mut tokio::sync::mpsc::Receiver<()>) -> bool {
    let timer = tokio::time::sleep(DEBOUNCE);
    tokio::pin!(timer);
    loop {
        tokio::select! {
            _ = &mut timer => return true,
            msg = rx.recv() => {
                if msg.is_none() {
                    return false;
                }
                timer.as_mut().reset(tokio::time::Instant::now() + DEBOUNCE);
            }
        }
    }
}
