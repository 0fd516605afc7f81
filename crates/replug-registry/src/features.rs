// SPDX-FileCopyrightText: 2026 Replug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The feature registry.
//!
//! Tracks which model classes support which capability, keyed feature,
//! then application label, then model name. The host seeds this at
//! startup from the models it loads itself; the reloader appends the
//! plugin models that were loaded too late to be seen.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use replug_core::{Feature, ModelDef, ModelKey, ReplugError};
use strum::IntoEnumIterator;

/// Registry of per-feature model registrations.
///
/// Every known feature has a bucket from construction on, so membership
/// checks never have to distinguish "feature absent" from "feature has
/// no models". Registration is append-only; nothing here ever removes
/// an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRegistry {
    model_features: HashMap<Feature, BTreeMap<String, BTreeSet<String>>>,
}

impl FeatureRegistry {
    /// A registry with an empty bucket for every known feature.
    pub fn new() -> Self {
        Self {
            model_features: Feature::iter().map(|f| (f, BTreeMap::new())).collect(),
        }
    }

    /// Whether `app_label.model_name` is registered under `feature`.
    pub fn contains(&self, feature: Feature, app_label: &str, model_name: &str) -> bool {
        self.model_features
            .get(&feature)
            .and_then(|by_label| by_label.get(app_label))
            .is_some_and(|names| names.contains(model_name))
    }

    /// Register one model under every feature it declares.
    ///
    /// Re-registering is a no-op per feature, so calling this with an
    /// already-known model changes nothing. A model with an empty label
    /// or name is rejected before any bucket is touched.
    pub fn register(&mut self, model: &ModelDef) -> Result<(), ReplugError> {
        validate_identity(model)?;
        for feature in model.features() {
            self.model_features
                .entry(feature)
                .or_default()
                .entry(model.app_label().to_string())
                .or_default()
                .insert(model.name().to_string());
        }
        tracing::debug!(
            model = %model.key(),
            features = model.features().count(),
            "registered model features"
        );
        Ok(())
    }

    /// Register a batch of models, in order.
    ///
    /// Returns the number of models processed. On error the models
    /// registered before the offending one remain registered.
    pub fn register_all<'a>(
        &mut self,
        models: impl IntoIterator<Item = &'a ModelDef>,
    ) -> Result<usize, ReplugError> {
        let mut count = 0;
        for model in models {
            self.register(model)?;
            count += 1;
        }
        Ok(count)
    }

    /// All object types registered under `feature`, sorted by app label
    /// and then model name.
    pub fn models_with_feature(&self, feature: Feature) -> Vec<ModelKey> {
        self.model_features
            .get(&feature)
            .map(|by_label| {
                by_label
                    .iter()
                    .flat_map(|(label, names)| {
                        names
                            .iter()
                            .map(|name| ModelKey::new(label.as_str(), name.as_str()))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Total number of (feature, model) registration entries.
    pub fn total_registrations(&self) -> usize {
        self.model_features
            .values()
            .map(|by_label| by_label.values().map(BTreeSet::len).sum::<usize>())
            .sum()
    }
}

impl Default for FeatureRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_identity(model: &ModelDef) -> Result<(), ReplugError> {
    if model.app_label().trim().is_empty() {
        return Err(ReplugError::InvalidModel {
            app_label: model.app_label().to_string(),
            model_name: model.name().to_string(),
            reason: "empty application label".to_string(),
        });
    }
    if model.name().trim().is_empty() {
        return Err(ReplugError::InvalidModel {
            app_label: model.app_label().to_string(),
            model_name: model.name().to_string(),
            reason: "empty model name".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged_model(app_label: &str, name: &str) -> ModelDef {
        ModelDef::new(app_label, name).with_features([Feature::Tags])
    }

    #[test]
    fn new_registry_has_a_bucket_per_feature() {
        let registry = FeatureRegistry::new();
        assert_eq!(registry.total_registrations(), 0);
        for feature in Feature::iter() {
            assert!(registry.models_with_feature(feature).is_empty());
        }
    }

    #[test]
    fn register_records_every_declared_feature() {
        let mut registry = FeatureRegistry::new();
        let model = ModelDef::new("acme_assets", "asset")
            .with_features([Feature::Tags, Feature::CustomFields]);

        registry.register(&model).unwrap();

        assert!(registry.contains(Feature::Tags, "acme_assets", "asset"));
        assert!(registry.contains(Feature::CustomFields, "acme_assets", "asset"));
        assert!(!registry.contains(Feature::Webhooks, "acme_assets", "asset"));
        assert_eq!(registry.total_registrations(), 2);
    }

    #[test]
    fn register_is_idempotent() {
        let mut registry = FeatureRegistry::new();
        let model = tagged_model("acme_assets", "asset");

        registry.register(&model).unwrap();
        let snapshot = registry.clone();
        registry.register(&model).unwrap();

        assert_eq!(registry, snapshot);
        assert_eq!(registry.total_registrations(), 1);
    }

    #[test]
    fn featureless_model_registers_nothing() {
        let mut registry = FeatureRegistry::new();
        let model = ModelDef::new("acme_assets", "note");

        registry.register(&model).unwrap();
        assert_eq!(registry.total_registrations(), 0);
    }

    #[test]
    fn empty_identity_is_rejected() {
        let mut registry = FeatureRegistry::new();

        let err = registry.register(&tagged_model("", "asset")).unwrap_err();
        assert!(matches!(
            err,
            ReplugError::InvalidModel { ref reason, .. } if reason == "empty application label"
        ));

        let err = registry.register(&tagged_model("acme_assets", "  ")).unwrap_err();
        assert!(matches!(
            err,
            ReplugError::InvalidModel { ref reason, .. } if reason == "empty model name"
        ));
        assert_eq!(registry.total_registrations(), 0);
    }

    #[test]
    fn register_all_counts_processed_models() {
        let mut registry = FeatureRegistry::new();
        let models = vec![
            tagged_model("acme_assets", "asset"),
            tagged_model("acme_assets", "rack_note"),
            tagged_model("acme_circuits", "circuit"),
        ];

        let count = registry.register_all(&models).unwrap();
        assert_eq!(count, 3);
        assert_eq!(registry.total_registrations(), 3);
    }

    #[test]
    fn register_all_stops_at_first_invalid_model() {
        let mut registry = FeatureRegistry::new();
        let models = vec![
            tagged_model("acme_assets", "asset"),
            tagged_model("acme_assets", ""),
            tagged_model("acme_assets", "rack_note"),
        ];

        let err = registry.register_all(&models).unwrap_err();
        assert!(matches!(err, ReplugError::InvalidModel { .. }));

        // The model before the invalid one stays registered, the one
        // after it is never reached.
        assert!(registry.contains(Feature::Tags, "acme_assets", "asset"));
        assert!(!registry.contains(Feature::Tags, "acme_assets", "rack_note"));
    }

    #[test]
    fn models_with_feature_sorts_by_label_then_name() {
        let mut registry = FeatureRegistry::new();
        registry.register(&tagged_model("zulu", "alpha")).unwrap();
        registry.register(&tagged_model("alpha", "zulu")).unwrap();
        registry.register(&tagged_model("alpha", "alpha")).unwrap();

        let keys = registry.models_with_feature(Feature::Tags);
        let rendered: Vec<String> = keys.iter().map(ModelKey::to_string).collect();
        assert_eq!(rendered, vec!["alpha.alpha", "alpha.zulu", "zulu.alpha"]);
    }
}
