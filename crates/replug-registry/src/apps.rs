// SPDX-FileCopyrightText: 2026 Replug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Store of installed application configs.
//!
//! The host resolves each configured plugin identifier to an application
//! config object; the config names the app's label and enumerates the
//! model classes the app declares. This module is the lookup side of
//! that arrangement.

use std::collections::HashMap;

use replug_core::{Feature, ModelDef, ReplugError};

/// Configuration object for one installed application.
///
/// `name` is the identifier the host configuration refers to the app by;
/// `label` is the namespace its models live under. The two often match
/// but are not required to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    name: String,
    label: String,
    models: Vec<ModelDef>,
}

impl AppConfig {
    /// An application with no models yet.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            models: Vec::new(),
        }
    }

    /// Builder-style declaration of a model under this app's label.
    pub fn with_model(
        mut self,
        model_name: impl Into<String>,
        features: impl IntoIterator<Item = Feature>,
    ) -> Self {
        let model = ModelDef::new(self.label.as_str(), model_name).with_features(features);
        self.models.push(model);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The app's declared models, in declaration order.
    pub fn models(&self) -> &[ModelDef] {
        &self.models
    }
}

/// Installed applications keyed by their configured name.
#[derive(Debug, Clone, Default)]
pub struct AppConfigStore {
    apps: HashMap<String, AppConfig>,
}

impl AppConfigStore {
    pub fn new() -> Self {
        Self {
            apps: HashMap::new(),
        }
    }

    /// Install an application config.
    ///
    /// Names and labels are both unique across the store; a collision on
    /// either leaves the store unchanged.
    pub fn install(&mut self, app: AppConfig) -> Result<(), ReplugError> {
        if self.apps.contains_key(app.name()) {
            return Err(ReplugError::DuplicateApp {
                name: app.name().to_string(),
            });
        }
        if self.apps.values().any(|other| other.label() == app.label()) {
            return Err(ReplugError::DuplicateLabel {
                label: app.label().to_string(),
            });
        }
        tracing::debug!(app = app.name(), label = app.label(), "installed application");
        self.apps.insert(app.name().to_string(), app);
        Ok(())
    }

    /// Look up an installed application by its configured name.
    pub fn get(&self, name: &str) -> Result<&AppConfig, ReplugError> {
        self.apps.get(name).ok_or_else(|| ReplugError::AppNotFound {
            name: name.to_string(),
        })
    }

    /// Names of all installed applications, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.apps.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}
