use super::helpers::{validate_range, validate_range_u64};
use crate::schema::TaskdockConfig;

/// Windows rejects grouping identities longer than this.
const MAX_IDENTITY_LEN: usize = 128;

pub(super) fn validate_taskbar(errors: &mut Vec<String>, config: &TaskdockConfig) {
    let t = &config.taskbar;
    validate_range_u64(errors, "taskbar.guard_interval_ms", t.guard_interval_ms, 0, 5000);
    validate_range_u64(errors, "taskbar.sample_freshness_ms", t.sample_freshness_ms, 0, 5000);
    validate_range_u64(errors, "taskbar.resync_interval_secs", t.resync_interval_secs, 0, 86400);
    validate_range(errors, "taskbar.button_width", t.button_width, 1, 512);
    validate_range(errors, "taskbar.button_height", t.button_height, 1, 512);

    let prefix = t.identity_prefix.as_str();
    if prefix.is_empty() {
        errors.push("taskbar.identity_prefix must not be empty".into());
    } else if prefix.chars().any(char::is_whitespace) {
        errors.push(format!(
            "taskbar.identity_prefix = {prefix:?} must not contain whitespace"
        ));
    } else if prefix.len() > MAX_IDENTITY_LEN / 2 {
        // leaves room for the group id suffix
        errors.push(format!(
            "taskbar.identity_prefix is longer than {} characters",
            MAX_IDENTITY_LEN / 2
        ));
    }
}
