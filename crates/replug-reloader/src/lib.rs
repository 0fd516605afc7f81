// SPDX-FileCopyrightText: 2026 Replug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Late registration repair for plugin-provided models.
//!
//! Hosts that load plugins after seeding their feature registry end up
//! with plugin models that exist but are invisible to every feature
//! keyed off the registry. This crate reconciles that gap at startup:
//! scan the configured plugins, register what the host missed, and
//! reinstall the form fields whose choice lists froze too early.
//!
//! # Usage
//!
//! ```
//! use replug_core::Feature;
//! use replug_forms::FormDescription;
//! use replug_registry::{AppConfig, AppConfigStore, FeatureRegistry};
//! use replug_reloader::Reloader;
//!
//! let mut apps = AppConfigStore::new();
//! apps.install(
//!     AppConfig::new("acme_assets", "acme_assets")
//!         .with_model("asset", [Feature::Tags, Feature::Webhooks]),
//! )?;
//!
//! let mut registry = FeatureRegistry::new();
//! let mut custom_field_form = FormDescription::new("CustomFieldForm");
//! let mut tag_form = FormDescription::new("TagForm");
//!
//! let report = Reloader::new(["acme_assets"])
//!     .run(&apps, &mut registry, &mut custom_field_form, &mut tag_form)?;
//! assert_eq!(report.registered_count(), 1);
//! # Ok::<(), replug_core::ReplugError>(())
//! ```

pub mod refresh;
pub mod reloader;
pub mod report;
pub mod scan;

pub use refresh::refresh_object_types_field;
pub use reloader::Reloader;
pub use report::{PluginReport, ReloadReport, ScanOutcome};
pub use scan::{is_registered, scan_plugins, PluginScan};
