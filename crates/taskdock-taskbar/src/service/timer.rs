use std::sync::mpsc::Sender;
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::{debug, warn};

use super::UiMessage;

/// Post `UiMessage::Resync` every `interval_secs` until the UI loop hangs up.
///
/// Returns `None` when disabled (`0`) or the thread cannot be spawned.
pub fn spawn_resync_timer(interval_secs: u64, tx: Sender<UiMessage>) -> Option<JoinHandle<()>> {
    if interval_secs == 0 {
        debug!("periodic resync disabled");
        return None;
    }
    let interval = Duration::from_secs(interval_secs);
    let spawned = std::thread::Builder::new()
        .name("taskdock-resync".into())
        .spawn(move || loop {
            std::thread::sleep(interval);
            if tx.send(UiMessage::Resync).is_err() {
                debug!("resync timer stopping, UI loop gone");
                break;
            }
        });
    match spawned {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!("resync timer not started: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn zero_interval_disables_timer() {
        let (tx, _rx) = mpsc::channel();
        assert!(spawn_resync_timer(0, tx).is_none());
    }

    #[test]
    fn timer_posts_resync_and_stops_when_receiver_drops() {
        let (tx, rx) = mpsc::channel();
        let handle = spawn_resync_timer(1, tx).unwrap();
        let msg = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(matches!(msg, UiMessage::Resync));

        drop(rx);
        handle.join().unwrap();
    }
}
