use std::collections::HashSet;

use taskdock_common::types::{GroupId, GroupSummary};
use tracing::{info, warn};

use super::{ProxyWindowRegistry, SyncReport, Upsert};

impl ProxyWindowRegistry {
    /// Make the set of live windows equal the set of `groups`.
    ///
    /// Windows of vanished groups are destroyed first. Creation failures are
    /// counted and retried on the next pass.
    pub fn sync(&mut self, groups: &[GroupSummary]) -> SyncReport {
        let mut report = SyncReport::default();
        let wanted: HashSet<&GroupId> = groups.iter().map(|g| &g.id).collect();

        let stale: Vec<GroupId> = self
            .windows
            .keys()
            .filter(|id| !wanted.contains(id))
            .cloned()
            .collect();
        for id in stale {
            if self.remove(&id).is_some() {
                report.removed += 1;
            }
        }

        for group in groups {
            match self.create_or_update(&group.id, &group.name, &group.icon) {
                Ok(Upsert::Created(_)) => report.created += 1,
                Ok(Upsert::Updated) => report.updated += 1,
                Ok(Upsert::Unchanged) => {}
                Err(e) => {
                    warn!(group = %group.id, "no taskbar presence for group: {e}");
                    report.failed += 1;
                }
            }
        }

        if !report.is_noop() {
            info!(
                created = report.created,
                updated = report.updated,
                removed = report.removed,
                failed = report.failed,
                "proxy windows synced"
            );
        }
        report
    }
}
