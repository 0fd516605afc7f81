// SPDX-FileCopyrightText: 2026 Replug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The reconciliation entry point.
//!
//! Runs once at host startup, after the host has loaded its own models
//! and seeded the registry: scans the configured plugins, registers any
//! models the startup sequence missed, then reinstalls the object-types
//! form fields so their choices reflect the repaired registry.

use replug_config::ReplugConfig;
use replug_core::{Feature, ReplugError};
use replug_forms::FormDescription;
use replug_registry::{AppConfigStore, FeatureRegistry};

use crate::refresh::refresh_object_types_field;
use crate::report::ReloadReport;
use crate::scan::scan_plugins;

/// One-shot reconciler for plugin model registrations.
///
/// Holds only the configured plugin identifiers; the app store, registry,
/// and forms are handed in per run so the caller keeps ownership of its
/// own state.
#[derive(Debug, Clone)]
pub struct Reloader {
    plugins: Vec<String>,
}

impl Reloader {
    /// A reloader for the given configured plugin identifiers.
    pub fn new<I, S>(plugins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            plugins: plugins.into_iter().map(Into::into).collect(),
        }
    }

    /// A reloader for the plugin list in the host configuration.
    pub fn from_config(config: &ReplugConfig) -> Self {
        Self::new(config.plugins.iter().cloned())
    }

    /// The configured plugin identifiers, in scan order.
    pub fn plugins(&self) -> &[String] {
        &self.plugins
    }

    /// Run the reconciliation pass.
    ///
    /// Scans every configured plugin (continuing past ones that fail to
    /// resolve), bulk-registers the models the registry is missing, then
    /// refreshes the object-types field on both forms. Running again
    /// immediately finds nothing to register and changes nothing.
    pub fn run(
        &self,
        apps: &AppConfigStore,
        registry: &mut FeatureRegistry,
        custom_field_form: &mut FormDescription,
        tag_form: &mut FormDescription,
    ) -> Result<ReloadReport, ReplugError> {
        tracing::debug!(
            plugins = self.plugins.len(),
            "scanning plugins for unregistered models"
        );

        let scan = scan_plugins(&self.plugins, apps, registry);
        let registered: Vec<_> = scan.missing.iter().map(|model| model.key()).collect();

        if scan.missing.is_empty() {
            tracing::debug!("all plugin models already registered");
        } else {
            let count = registry.register_all(scan.missing)?;
            tracing::info!("Registered {count} previously missed models");
        }

        refresh_object_types_field(custom_field_form, Feature::CustomFields)?;
        refresh_object_types_field(tag_form, Feature::Tags)?;

        Ok(ReloadReport {
            plugins: scan.reports,
            registered,
            refreshed_forms: vec![
                custom_field_form.name().to_string(),
                tag_form.name().to_string(),
            ],
        })
    }
}
