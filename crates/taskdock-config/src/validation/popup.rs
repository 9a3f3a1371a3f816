use super::helpers::validate_range;
use crate::schema::TaskdockConfig;

pub(super) fn validate_popup(errors: &mut Vec<String>, config: &TaskdockConfig) {
    let p = &config.popup;
    validate_range(errors, "popup.width", p.width, 100, 2000);
    validate_range(errors, "popup.items_per_row", p.items_per_row, 1, 12);
    validate_range(errors, "popup.row_height", p.row_height, 1, 500);
    validate_range(errors, "popup.header_height", p.header_height, 0, 500);
    validate_range(errors, "popup.padding", p.padding, 0, 200);
    validate_range(errors, "popup.min_content", p.min_content, 0, 2000);
    validate_range(errors, "popup.max_height", p.max_height, 50, 4000);
    validate_range(errors, "popup.margin", p.margin, 0, 200);
    validate_range(errors, "popup.edge_spacing", p.edge_spacing, 0, 200);

    if p.max_height < p.header_height.saturating_add(p.padding) {
        errors.push(format!(
            "popup.max_height = {} leaves no room for content (header {} + padding {})",
            p.max_height, p.header_height, p.padding
        ));
    }
}
