//! Default TOML config template with inline documentation comments.

pub(crate) fn default_config_toml() -> String {
    r##"# TaskDock Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[taskbar]
# guard_interval_ms = 600        # 0-5000, ignore re-activation this soon after a popup
# sample_freshness_ms = 300      # 0-5000, max age of the activation cursor sample
# resync_interval_secs = 30      # 0-86400, 0 disables periodic resync
# identity_prefix = "TaskDock.Group"
# button_width = 44              # 1-512
# button_height = 48             # 1-512

[popup]
# width = 310                    # 100-2000
# items_per_row = 3              # 1-12
# row_height = 86                # 1-500
# header_height = 36             # 0-500
# padding = 16                   # 0-200
# min_content = 86               # 0-2000
# max_height = 500               # 50-4000
# margin = 8                     # 0-200
# edge_spacing = 4               # 0-200

[store]
# path = ""                      # empty: groups.json next to this file
# watch = true

[logging]
# level = "info"                 # debug, info, warning, error
"##
    .to_string()
}
