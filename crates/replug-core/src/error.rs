// SPDX-FileCopyrightText: 2026 Replug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types shared across the Replug workspace.

use thiserror::Error;

use crate::types::Feature;

/// The primary error type for registry and reload operations.
#[derive(Debug, Error)]
pub enum ReplugError {
    /// A configured plugin identifier does not resolve to an installed
    /// application.
    #[error("no installed application named `{name}`")]
    AppNotFound { name: String },

    /// An application with the same configured name is already installed.
    #[error("application `{name}` is already installed")]
    DuplicateApp { name: String },

    /// An application label is already claimed by another installed
    /// application.
    #[error("application label `{label}` is already in use")]
    DuplicateLabel { label: String },

    /// A model submitted for registration has an unusable identity.
    #[error("invalid model `{app_label}.{model_name}`: {reason}")]
    InvalidModel {
        app_label: String,
        model_name: String,
        reason: String,
    },

    /// No object-types form field is defined for this feature.
    #[error("feature `{feature}` has no object types form field")]
    UnsupportedFormFeature { feature: Feature },
}
