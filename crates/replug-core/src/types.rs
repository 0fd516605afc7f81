// SPDX-FileCopyrightText: 2026 Replug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across the registry, form, and reloader crates.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A capability a model class can opt into by mixing in the matching
/// host base class.
///
/// The set is closed: the host defines these features and nothing else,
/// so an unknown feature name is a configuration error rather than an
/// extension point. String forms use `snake_case` to match the keys the
/// host keeps in its own registry.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Users can bookmark objects of this model.
    Bookmarks,
    /// Objects of this model can be cloned with field carry-over.
    Cloning,
    /// The model accepts user-defined extra fields.
    CustomFields,
    /// Per-object templated links rendered in the UI.
    CustomLinks,
    /// Tabular export templates can target the model.
    ExportTemplates,
    /// Changes to objects are recorded as journal entries.
    Journaling,
    /// Objects can carry free-form tags.
    Tags,
    /// Object changes can fire outbound webhooks.
    Webhooks,
}

/// Identity of a concrete model class: the owning application's label
/// plus the lowercased model name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ModelKey {
    /// Label of the application that declares the model.
    pub app_label: String,
    /// Lowercased class name of the model.
    pub model_name: String,
}

impl ModelKey {
    pub fn new(app_label: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self {
            app_label: app_label.into(),
            model_name: model_name.into(),
        }
    }
}

impl fmt::Display for ModelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.app_label, self.model_name)
    }
}

/// A model class declared by an installed application, together with the
/// features its class hierarchy mixes in.
///
/// Feature membership is fixed at class-definition time; the registry is
/// what can lag behind it, never the other way around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDef {
    app_label: String,
    name: String,
    features: BTreeSet<Feature>,
}

impl ModelDef {
    /// A model with no feature mixins.
    pub fn new(app_label: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            app_label: app_label.into(),
            name: name.into(),
            features: BTreeSet::new(),
        }
    }

    /// Builder-style declaration of the model's feature mixins.
    pub fn with_features(mut self, features: impl IntoIterator<Item = Feature>) -> Self {
        self.features.extend(features);
        self
    }

    pub fn app_label(&self) -> &str {
        &self.app_label
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The model's identity as a registry key.
    pub fn key(&self) -> ModelKey {
        ModelKey::new(self.app_label.as_str(), self.name.as_str())
    }

    /// Whether the model mixes in `feature`.
    pub fn declares(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    /// Whether the model mixes in at least one feature.
    pub fn declares_any(&self) -> bool {
        !self.features.is_empty()
    }

    /// The declared features, in `Feature` order.
    pub fn features(&self) -> impl Iterator<Item = Feature> + '_ {
        self.features.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn feature_display_uses_snake_case() {
        assert_eq!(Feature::CustomFields.to_string(), "custom_fields");
        assert_eq!(Feature::Tags.to_string(), "tags");
        assert_eq!(Feature::ExportTemplates.to_string(), "export_templates");
    }

    #[test]
    fn feature_parses_from_snake_case() {
        assert_eq!(Feature::from_str("webhooks").unwrap(), Feature::Webhooks);
        assert_eq!(
            Feature::from_str("custom_links").unwrap(),
            Feature::CustomLinks
        );
        assert!(Feature::from_str("CustomFields").is_err());
        assert!(Feature::from_str("nope").is_err());
    }

    #[test]
    fn model_key_display_joins_label_and_name() {
        let key = ModelKey::new("dcim", "device");
        assert_eq!(key.to_string(), "dcim.device");
    }

    #[test]
    fn model_def_reports_declared_features() {
        let model = ModelDef::new("acme_assets", "asset")
            .with_features([Feature::Tags, Feature::CustomFields]);

        assert!(model.declares(Feature::Tags));
        assert!(model.declares(Feature::CustomFields));
        assert!(!model.declares(Feature::Webhooks));
        assert!(model.declares_any());
        assert_eq!(model.key(), ModelKey::new("acme_assets", "asset"));
    }

    #[test]
    fn model_def_without_features_declares_none() {
        let model = ModelDef::new("acme_assets", "note");
        assert!(!model.declares_any());
        assert_eq!(model.features().count(), 0);
    }

    #[test]
    fn with_features_deduplicates() {
        let model = ModelDef::new("acme_assets", "asset")
            .with_features([Feature::Tags, Feature::Tags, Feature::Tags]);
        assert_eq!(model.features().count(), 1);
    }
}
