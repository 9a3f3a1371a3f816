use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a persisted shortcut group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroupId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for GroupId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Icon descriptor for a group's taskbar button.
///
/// Only a description: the platform decides which of these it can render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupIcon {
    pub glyph: Option<String>,
    pub color: Option<String>,
    pub path: Option<String>,
}

impl GroupIcon {
    pub fn is_empty(&self) -> bool {
        self.glyph.is_none() && self.color.is_none() && self.path.is_none()
    }
}

/// The part of a persisted group the taskbar layer cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub id: GroupId,
    pub name: String,
    #[serde(default)]
    pub icon: GroupIcon,
    #[serde(default)]
    pub item_count: usize,
}

impl GroupSummary {
    pub fn new(id: impl Into<GroupId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: GroupIcon::default(),
            item_count: 0,
        }
    }

    pub fn with_icon(mut self, icon: GroupIcon) -> Self {
        self.icon = icon;
        self
    }

    pub fn with_item_count(mut self, count: usize) -> Self {
        self.item_count = count;
        self
    }
}
