//! Popup sizing and placement settings. All values are DIPs.

use serde::{Deserialize, Serialize};

/// `[popup]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PopupConfig {
    pub width: u32,
    pub items_per_row: u32,
    pub row_height: u32,
    pub header_height: u32,
    pub padding: u32,
    pub min_content: u32,
    pub max_height: u32,
    /// Gap kept between the popup and the work-area sides.
    pub margin: u32,
    /// Gap between the popup and the taskbar.
    pub edge_spacing: u32,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            width: 310,
            items_per_row: 3,
            row_height: 86,
            header_height: 36,
            padding: 16,
            min_content: 86,
            max_height: 500,
            margin: 8,
            edge_spacing: 4,
        }
    }
}
