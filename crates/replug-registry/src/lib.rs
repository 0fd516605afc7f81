// SPDX-FileCopyrightText: 2026 Replug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Installed-application store and the feature registry.
//!
//! Two sides of the same bookkeeping problem: [`apps`] answers "which
//! applications are installed and what models do they declare", and
//! [`features`] answers "which models has the host actually registered
//! for each capability". The reloader crate reconciles the two.

pub mod apps;
pub mod features;

pub use apps::{AppConfig, AppConfigStore};
pub use features::FeatureRegistry;
