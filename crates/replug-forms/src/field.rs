// SPDX-FileCopyrightText: 2026 Replug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Selection fields over registrable object types.

use replug_core::{Feature, ModelKey};
use replug_registry::FeatureRegistry;

/// Where a field's selectable choices come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceSource {
    /// A fixed list captured when the field was constructed. This is
    /// what a form defined before plugin models were registered ends up
    /// holding: a snapshot that no later registration can extend.
    Frozen(Vec<ModelKey>),
    /// The query "all object types registered under this feature",
    /// evaluated against the registry each time choices are resolved.
    WithFeature(Feature),
}

/// A multiple-choice form field selecting object types.
///
/// The field stores its choice *source*, not its choices. Resolution
/// happens in [`ObjectTypeField::choices`], against whatever registry
/// state exists at that moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectTypeField {
    label: String,
    help_text: String,
    source: ChoiceSource,
}

impl ObjectTypeField {
    /// A field whose choices are fixed at construction time.
    pub fn frozen(
        label: impl Into<String>,
        help_text: impl Into<String>,
        choices: Vec<ModelKey>,
    ) -> Self {
        Self {
            label: label.into(),
            help_text: help_text.into(),
            source: ChoiceSource::Frozen(choices),
        }
    }

    /// A field whose choices track the registry's entries for `feature`.
    pub fn with_feature(
        label: impl Into<String>,
        help_text: impl Into<String>,
        feature: Feature,
    ) -> Self {
        Self {
            label: label.into(),
            help_text: help_text.into(),
            source: ChoiceSource::WithFeature(feature),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn help_text(&self) -> &str {
        &self.help_text
    }

    pub fn source(&self) -> &ChoiceSource {
        &self.source
    }

    /// Resolve the selectable choices against the current registry state.
    ///
    /// Frozen fields ignore the registry entirely; feature-backed fields
    /// return the registry's current entries for their feature, sorted.
    pub fn choices(&self, registry: &FeatureRegistry) -> Vec<ModelKey> {
        match &self.source {
            ChoiceSource::Frozen(keys) => keys.clone(),
            ChoiceSource::WithFeature(feature) => registry.models_with_feature(*feature),
        }
    }
}
