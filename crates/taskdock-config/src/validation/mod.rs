//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod popup;
mod taskbar;

#[cfg(test)]
mod tests;

use crate::schema::TaskdockConfig;
use taskdock_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TaskdockConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    taskbar::validate_taskbar(&mut errors, config);
    popup::validate_popup(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
