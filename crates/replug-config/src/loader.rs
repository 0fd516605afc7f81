// SPDX-FileCopyrightText: 2026 Replug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./replug.toml` > `~/.config/replug/replug.toml` > `/etc/replug/replug.toml`
//! with environment variable overrides via `REPLUG_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::ReplugConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/replug/replug.toml` (system-wide)
/// 3. `~/.config/replug/replug.toml` (user XDG config)
/// 4. `./replug.toml` (local directory)
/// 5. `REPLUG_*` environment variables
pub fn load_config() -> Result<ReplugConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ReplugConfig::default()))
        .merge(Toml::file("/etc/replug/replug.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("replug/replug.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("replug.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<ReplugConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ReplugConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<ReplugConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ReplugConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so that key names
/// containing underscores stay intact: `REPLUG_LOG_LEVEL` must map to
/// `log.level`, and a future `log.max_size` must not become `log.max.size`.
fn env_provider() -> Env {
    Env::prefixed("REPLUG_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: REPLUG_LOG_LEVEL -> "log_level"
        let key_str = key.as_str();
        let mapped = key_str.replacen("log_", "log.", 1);
        mapped.into()
    })
}
