// SPDX-FileCopyrightText: 2026 Replug Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Form descriptions and their field tables.

use std::collections::BTreeMap;

use crate::field::ObjectTypeField;

/// Field key under which object-type selection fields are installed.
pub const OBJECT_TYPES_FIELD: &str = "object_types";

/// A form class description owning its field table.
///
/// The field table maps field name to field object. Replacing an entry
/// replaces it for every future render of the form, which is exactly the
/// lever the reloader uses to swap a stale frozen field for a live one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDescription {
    name: String,
    fields: BTreeMap<String, ObjectTypeField>,
}

impl FormDescription {
    /// A form with an empty field table.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Install `field` under `key`, returning the field it replaced.
    pub fn set_field(
        &mut self,
        key: impl Into<String>,
        field: ObjectTypeField,
    ) -> Option<ObjectTypeField> {
        self.fields.insert(key.into(), field)
    }

    pub fn field(&self, key: &str) -> Option<&ObjectTypeField> {
        self.fields.get(key)
    }

    pub fn contains_field(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Field names in the table, sorted.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
