// SPDX-FileCopyrightText: 2026 Replug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Replug registration repair toolkit.
//!
//! This crate provides the model and feature vocabulary plus the shared
//! error type used throughout the Replug workspace. The registry, form,
//! and reloader crates all build on the types defined here.

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::ReplugError;
pub use types::{Feature, ModelDef, ModelKey};
