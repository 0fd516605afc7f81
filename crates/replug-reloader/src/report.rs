// SPDX-FileCopyrightText: 2026 Replug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Run reports: per-plugin scan outcomes and registration results.

use std::fmt;

use replug_core::ModelKey;

/// Outcome of scanning one configured plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The plugin resolved to an installed application. `models` is the
    /// number of model classes enumerated, `missing` how many of them
    /// had no feature registration.
    Scanned { models: usize, missing: usize },
    /// The plugin could not be resolved; the scan moved on without it.
    Failed { error: String },
}

impl fmt::Display for ScanOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scanned { models, missing } => {
                write!(f, "scanned {models} models ({missing} missing)")
            }
            Self::Failed { error } => write!(f, "failed: {error}"),
        }
    }
}

/// Scan outcome for a single configured plugin identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginReport {
    /// The plugin identifier as configured.
    pub plugin: String,
    /// What happened when the scan reached it.
    pub outcome: ScanOutcome,
}

/// Record of one reconciliation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReloadReport {
    /// Per-plugin scan outcomes, in configured order.
    pub plugins: Vec<PluginReport>,
    /// Models registered by this run, in scan order.
    pub registered: Vec<ModelKey>,
    /// Names of the forms whose object-types field was reinstalled.
    pub refreshed_forms: Vec<String>,
}

impl ReloadReport {
    /// Number of models this run registered.
    pub fn registered_count(&self) -> usize {
        self.registered.len()
    }

    /// Plugins whose resolution failed during the scan.
    pub fn failed_plugins(&self) -> Vec<&str> {
        self.plugins
            .iter()
            .filter(|report| matches!(report.outcome, ScanOutcome::Failed { .. }))
            .map(|report| report.plugin.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_display_summarizes_counts() {
        let outcome = ScanOutcome::Scanned {
            models: 4,
            missing: 2,
        };
        assert_eq!(outcome.to_string(), "scanned 4 models (2 missing)");

        let outcome = ScanOutcome::Failed {
            error: "no installed application named `ghost`".to_string(),
        };
        assert_eq!(
            outcome.to_string(),
            "failed: no installed application named `ghost`"
        );
    }

    #[test]
    fn failed_plugins_filters_by_outcome() {
        let report = ReloadReport {
            plugins: vec![
                PluginReport {
                    plugin: "good".to_string(),
                    outcome: ScanOutcome::Scanned {
                        models: 1,
                        missing: 0,
                    },
                },
                PluginReport {
                    plugin: "bad".to_string(),
                    outcome: ScanOutcome::Failed {
                        error: "boom".to_string(),
                    },
                },
            ],
            registered: Vec::new(),
            refreshed_forms: Vec::new(),
        };

        assert_eq!(report.failed_plugins(), vec!["bad"]);
        assert_eq!(report.registered_count(), 0);
    }
}
