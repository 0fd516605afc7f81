// SPDX-FileCopyrightText: 2026 Replug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as known log levels and well-formed plugin lists.

use std::collections::HashSet;

use crate::diagnostic::ConfigError;
use crate::model::ReplugConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &ReplugConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    // Validate log level is a known level name
    if !LOG_LEVELS.contains(&config.log.level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "log.level `{}` is not one of trace, debug, info, warn, error",
                config.log.level
            ),
        });
    }

    // Validate plugin entries are non-empty
    for (i, plugin) in config.plugins.iter().enumerate() {
        if plugin.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("plugins[{i}] must not be empty"),
            });
        }
    }

    // Validate no duplicate plugin entries
    let mut seen = HashSet::new();
    for plugin in &config.plugins {
        if !plugin.trim().is_empty() && !seen.insert(plugin) {
            errors.push(ConfigError::Validation {
                message: format!("duplicate plugin `{plugin}` in plugins list"),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
