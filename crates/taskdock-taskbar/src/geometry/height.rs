use taskdock_config::PopupConfig;

/// Popup sizing constants in DIPs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupMetrics {
    pub width: f64,
    pub items_per_row: usize,
    pub row_height: f64,
    pub header_height: f64,
    pub padding: f64,
    pub min_content: f64,
    pub max_height: f64,
    pub margin: f64,
    pub edge_spacing: f64,
}

impl Default for PopupMetrics {
    fn default() -> Self {
        Self::from_config(&PopupConfig::default())
    }
}

impl PopupMetrics {
    pub fn from_config(config: &PopupConfig) -> Self {
        Self {
            width: config.width as f64,
            items_per_row: config.items_per_row.max(1) as usize,
            row_height: config.row_height as f64,
            header_height: config.header_height as f64,
            padding: config.padding as f64,
            min_content: config.min_content as f64,
            max_height: config.max_height as f64,
            margin: config.margin as f64,
            edge_spacing: config.edge_spacing as f64,
        }
    }

    /// `header + max(rows * row_height, min_content) + padding`, capped at `max_height`.
    pub fn popup_height(&self, item_count: usize) -> f64 {
        let rows = item_count.div_ceil(self.items_per_row);
        let content = (rows as f64 * self.row_height).max(self.min_content);
        (self.header_height + content + self.padding).min(self.max_height)
    }
}
