//! Popout that only logs: popup rendering happens elsewhere.

use taskdock_taskbar::{Popout, PopupPlacement};

/// Records each placement in the log.
#[derive(Debug, Default)]
pub struct LogPopout {
    current: Option<PopupPlacement>,
}

impl LogPopout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&PopupPlacement> {
        self.current.as_ref()
    }
}

impl Popout for LogPopout {
    fn open(&mut self, placement: &PopupPlacement) -> taskdock_common::Result<()> {
        let group = placement
            .group
            .as_ref()
            .map(|g| g.to_string())
            .unwrap_or_else(|| "general".into());
        tracing::info!(
            "Popup for {group} at ({:.0}, {:.0}) size {:.0}x{:.0}, taskbar {:?}",
            placement.bounds.x,
            placement.bounds.y,
            placement.bounds.width,
            placement.bounds.height,
            placement.edge,
        );
        match serde_json::to_string(placement) {
            Ok(json) => tracing::debug!("placement: {json}"),
            Err(e) => tracing::debug!("placement not serializable: {e}"),
        }
        self.current = Some(placement.clone());
        Ok(())
    }

    fn close(&mut self) {
        if self.current.take().is_some() {
            tracing::info!("Popup closed");
        }
    }

    fn refresh(&mut self) {
        if let Some(placement) = &self.current {
            tracing::debug!("Popup refresh for {:?}", placement.group);
        }
    }
}
