use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit "clear" vs "not provided")
// ──────────────────────────────────────────────────────────
// Meaning on the wire:
// - Unset: key omitted => backend keeps its value
// - Null: key sent as null => backend clears the column
// - Value(v): key sent with v
//
// Payload structs must pair every PatchField with
// #[serde(skip_serializing_if = "PatchField::is_unset")].
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, PatchField::Value(_))
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// `None` clears the field instead of leaving it untouched.
    pub fn nullable(value: Option<T>) -> Self {
        match value {
            Some(v) => PatchField::Value(v),
            None => PatchField::Null,
        }
    }
}

impl PatchField<String> {
    /// Form text: absent => Unset, empty string => Null, anything else => Value.
    pub fn from_text(value: Option<String>) -> Self {
        match value {
            None => PatchField::Unset,
            Some(v) if v.is_empty() => PatchField::Null,
            Some(v) => PatchField::Value(v),
        }
    }

    /// Secrets are never cleared: an empty string means "keep the current one".
    pub fn from_secret(value: Option<String>) -> Self {
        match value {
            Some(v) if !v.is_empty() => PatchField::Value(v),
            _ => PatchField::Unset,
        }
    }
}

impl<T> From<Option<T>> for PatchField<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => PatchField::Value(v),
            None => PatchField::Unset,
        }
    }
}
