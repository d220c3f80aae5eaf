// ABOUTME: Presence-aware field wrapper for partial updates
// ABOUTME: Distinguishes an omitted JSON key from an explicit null and from a value

use serde::{Deserialize, Deserializer};

/// A field in a partial update payload.
///
/// Use with `#[serde(default)]`: serde only calls `deserialize` when the key
/// is present, so a missing key stays `Absent`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    /// Key not sent; leave the stored value alone
    #[default]
    Absent,
    /// Key sent as `null`; clear the stored value
    Null,
    /// Key sent with a value; overwrite the stored value
    Value(T),
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }

    /// The value to write, or `None` if the column should be cleared.
    /// Returns `None` for `Absent` too; check `is_present` first.
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Patch::Value(value) => Some(value),
            Patch::Absent | Patch::Null => None,
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Patch::Value(value),
            None => Patch::Null,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}
