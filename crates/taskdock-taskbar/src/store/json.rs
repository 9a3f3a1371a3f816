use std::path::{Path, PathBuf};

use serde::Deserialize;
use taskdock_common::errors::StoreError;
use taskdock_common::types::{GroupIcon, GroupId, GroupSummary};
use tracing::debug;

use super::GroupStore;

/// On-disk document written by the group editor.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreDocument {
    #[serde(default)]
    groups: Vec<StoredGroup>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredGroup {
    id: GroupId,
    #[serde(default)]
    name: String,
    #[serde(default)]
    icon_path: Option<String>,
    #[serde(default)]
    icon_glyph: Option<String>,
    #[serde(default)]
    icon_color: Option<String>,
    #[serde(default)]
    shortcuts: Vec<serde_json::Value>,
    #[serde(default)]
    position: i64,
}

impl StoredGroup {
    fn into_summary(self) -> GroupSummary {
        let icon = GroupIcon {
            glyph: non_empty(self.icon_glyph),
            color: non_empty(self.icon_color),
            path: non_empty(self.icon_path),
        };
        let count = self.shortcuts.len();
        GroupSummary::new(self.id, self.name)
            .with_icon(icon)
            .with_item_count(count)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Reads the JSON group store from disk on every call.
#[derive(Debug, Clone)]
pub struct JsonGroupStore {
    path: PathBuf,
}

impl JsonGroupStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<StoreDocument, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "group store missing, no groups");
                return Ok(StoreDocument::default());
            }
            Err(e) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    reason: e.to_string(),
                })
            }
        };
        if content.trim().is_empty() {
            return Ok(StoreDocument::default());
        }
        serde_json::from_str(&content).map_err(|e| StoreError::Parse(e.to_string()))
    }
}

impl GroupStore for JsonGroupStore {
    fn groups(&self) -> Result<Vec<GroupSummary>, StoreError> {
        let mut groups = self.read()?.groups;
        // stable: equal positions keep file order
        groups.sort_by_key(|g| g.position);
        Ok(groups.into_iter().map(StoredGroup::into_summary).collect())
    }

    fn fresh_item_count(&self, id: &GroupId) -> Result<usize, StoreError> {
        Ok(self
            .read()?
            .groups
            .iter()
            .find(|g| &g.id == id)
            .map(|g| g.shortcuts.len())
            .unwrap_or(0))
    }
}
