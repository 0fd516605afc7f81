// SPDX-FileCopyrightText: 2026 Replug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Form descriptions whose object-type choices follow the registry.
//!
//! A form defined while plugin models were still unregistered captures a
//! choice list that is already stale. The types here make that failure
//! mode explicit: a [`ChoiceSource::Frozen`] field holds the stale
//! snapshot, a [`ChoiceSource::WithFeature`] field re-queries the
//! registry on every resolution.

pub mod field;
pub mod form;

pub use field::{ChoiceSource, ObjectTypeField};
pub use form::{FormDescription, OBJECT_TYPES_FIELD};
