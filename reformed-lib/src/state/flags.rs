//! Per-field interaction flags

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

/// Interaction history of a single field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFlags {
    /// The user has changed the value at least once.
    pub dirty: bool,
    /// The field has received focus at least once.
    pub touched: bool,
}

/// Flags to raise on a field.
///
/// Merging is monotonic: a `false` in the patch leaves the current flag
/// as it is, so flags never go back from `true` to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagsPatch {
    pub dirty: bool,
    pub touched: bool,
}

impl FlagsPatch {
    /// Raises `dirty`.
    pub const DIRTY: Self = Self {
        dirty: true,
        touched: false,
    };

    /// Raises `touched`.
    pub const TOUCHED: Self = Self {
        dirty: false,
        touched: true,
    };

    fn apply(self, flags: FieldFlags) -> FieldFlags {
        FieldFlags {
            dirty: flags.dirty || self.dirty,
            touched: flags.touched || self.touched,
        }
    }
}

/// Interaction flags for every field seen so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputFlags(IndexMap<String, FieldFlags>);

impl InputFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the flags of a field, defaulting to both-false.
    pub fn get(&self, name: &str) -> FieldFlags {
        self.0.get(name).copied().unwrap_or_default()
    }

    /// Returns `true` if the field has been bound or interacted with.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns a new flag map with `patch` merged into the flags of `name`.
    pub fn merged(&self, name: &str, patch: FlagsPatch) -> Self {
        let mut next = self.0.clone();
        next.insert(name.to_string(), patch.apply(self.get(name)));
        Self(next)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FieldFlags)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
