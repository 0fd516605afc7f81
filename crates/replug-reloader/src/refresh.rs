// SPDX-FileCopyrightText: 2026 Replug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Form-field refresh: reinstalls object-types selection fields so their
//! choices follow the registry instead of a stale snapshot.

use replug_core::{Feature, ReplugError};
use replug_forms::{FormDescription, ObjectTypeField, OBJECT_TYPES_FIELD};

/// Label and help text for the object-types field of each form-bearing
/// feature.
///
/// Only custom fields and tags expose an object-type selector; asking for
/// any other feature is a caller bug surfaced as `UnsupportedFormFeature`.
fn object_types_copy(feature: Feature) -> Result<(&'static str, &'static str), ReplugError> {
    match feature {
        Feature::CustomFields => Ok((
            "Object types",
            "The type(s) of object that have this custom field",
        )),
        Feature::Tags => Ok((
            "Object types",
            "The type(s) of object that can have this tag",
        )),
        other => Err(ReplugError::UnsupportedFormFeature { feature: other }),
    }
}

/// Replace the form's `object_types` field with a freshly constructed
/// field whose choices are resolved against the registry on use.
///
/// The copy lookup happens before the field table is touched, so an
/// unsupported feature leaves the form exactly as it was.
pub fn refresh_object_types_field(
    form: &mut FormDescription,
    feature: Feature,
) -> Result<(), ReplugError> {
    let (label, help_text) = object_types_copy(feature)?;
    let field = ObjectTypeField::with_feature(label, help_text, feature);
    let replaced = form.set_field(OBJECT_TYPES_FIELD, field);
    tracing::debug!(
        form = form.name(),
        feature = %feature,
        replaced = replaced.is_some(),
        "object types field refreshed"
    );
    Ok(())
}
