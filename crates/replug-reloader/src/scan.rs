// SPDX-FileCopyrightText: 2026 Replug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin model scanning and the registration membership check.

use replug_core::{Feature, ModelDef};
use replug_registry::{AppConfigStore, FeatureRegistry};
use strum::IntoEnumIterator;

use crate::report::{PluginReport, ScanOutcome};

/// Result of one scan pass over the configured plugins.
#[derive(Debug)]
pub struct PluginScan<'a> {
    /// Per-plugin outcomes, in configured order.
    pub reports: Vec<PluginReport>,
    /// Models that need registration, in scan order.
    pub missing: Vec<&'a ModelDef>,
}

/// Whether the registry knows `app_label.model_name` under at least one
/// feature.
///
/// This check is deliberately coarse: a model registered for any single
/// feature counts as registered, even if other features it declares are
/// still absent from the registry. A partially registered model is
/// therefore left alone rather than topped up.
pub fn is_registered(registry: &FeatureRegistry, app_label: &str, model_name: &str) -> bool {
    Feature::iter().any(|feature| registry.contains(feature, app_label, model_name))
}

/// Enumerate each configured plugin's models and collect the ones the
/// registry has never seen.
///
/// A plugin that fails to resolve is recorded in its report entry and the
/// scan continues with the remaining plugins; one broken plugin cannot
/// block repair of the others. Models that declare no features are
/// skipped, since there is nothing to register for them.
pub fn scan_plugins<'a>(
    plugins: &[String],
    apps: &'a AppConfigStore,
    registry: &FeatureRegistry,
) -> PluginScan<'a> {
    let mut reports = Vec::with_capacity(plugins.len());
    let mut missing: Vec<&'a ModelDef> = Vec::new();

    for plugin in plugins {
        match apps.get(plugin) {
            Ok(app) => {
                let before = missing.len();
                for model in app.models() {
                    if !model.declares_any() {
                        continue;
                    }
                    if !is_registered(registry, model.app_label(), model.name()) {
                        missing.push(model);
                    }
                }
                let found = missing.len() - before;
                tracing::debug!(
                    plugin = plugin.as_str(),
                    models = app.models().len(),
                    missing = found,
                    "scanned plugin models"
                );
                reports.push(PluginReport {
                    plugin: plugin.clone(),
                    outcome: ScanOutcome::Scanned {
                        models: app.models().len(),
                        missing: found,
                    },
                });
            }
            Err(error) => {
                tracing::warn!(
                    plugin = plugin.as_str(),
                    error = %error,
                    "error processing plugin"
                );
                reports.push(PluginReport {
                    plugin: plugin.clone(),
                    outcome: ScanOutcome::Failed {
                        error: error.to_string(),
                    },
                });
            }
        }
    }

    PluginScan { reports, missing }
}
