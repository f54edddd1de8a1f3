use crate::error::FieldSetError;
use crate::types::{FastHashSet, FastMap, TypeName};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

// ─── FieldList ───────────────────────────────────────────────────────────────

/// One comma-separated list of field names, e.g. `"name,date"`.
///
/// The string is stored verbatim; tokenization happens at comparison time.
/// Token order and duplicates are insignificant, surrounding whitespace per
/// token is ignored (`"name, date"` ≡ `"name,date"`). A comma-free string
/// that isn't a field name is simply a single opaque token and compares
/// literally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldList(SmolStr);

impl FieldList {
    pub fn new(list: impl Into<SmolStr>) -> Self {
        Self(list.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Field-name tokens: split on `,`, trim, drop empty tokens (so a stray
    /// trailing comma does not manufacture a phantom field).
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    /// True when the list has no tokens at all (empty or only whitespace).
    pub fn is_empty(&self) -> bool {
        self.tokens().next().is_none()
    }

    /// Does this (cached) list satisfy `requested`?
    ///
    /// True iff every requested token also appears here — requested ⊆ cached
    /// as sets. An exact match and a strict-subset request are deliberately
    /// not distinguished; both mean "nothing new to fetch".
    pub fn covers(&self, requested: &FieldList) -> bool {
        let cached: FastHashSet<&str> = self.tokens().collect();
        requested.tokens().all(|token| cached.contains(token))
    }
}

impl From<&str> for FieldList {
    fn from(list: &str) -> Self {
        Self::new(list)
    }
}

impl From<String> for FieldList {
    fn from(list: String) -> Self {
        Self::new(list)
    }
}

impl std::fmt::Display for FieldList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── FieldSet ────────────────────────────────────────────────────────────────

/// The fields requested by one fetch: resource type name → [`FieldList`].
///
/// A single fetch may scope several resource types at once (the primary
/// resource plus related resources included in the same call), so the set
/// can hold more than one key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSet(FastMap<TypeName, FieldList>);

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field-list for one resource type.
    ///
    /// Empty type names and token-free field-lists are rejected here so the
    /// coverage cache only ever sees field-bearing entries.
    pub fn insert(
        &mut self,
        type_name: impl Into<TypeName>,
        list: impl Into<FieldList>,
    ) -> Result<(), FieldSetError> {
        let type_name = type_name.into();
        if type_name.trim().is_empty() {
            return Err(FieldSetError::EmptyTypeName);
        }
        let list = list.into();
        if list.is_empty() {
            return Err(FieldSetError::EmptyFieldList { type_name });
        }
        self.0.insert(type_name, list);
        Ok(())
    }

    pub fn get(&self, type_name: &str) -> Option<&FieldList> {
        self.0.get(type_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TypeName, &FieldList)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The coverage test: does this (cached) set satisfy `requested`?
    ///
    /// Every key in `requested` must be present here with a covering
    /// field-list; a missing key fails the whole test immediately. A
    /// `requested` with zero keys trivially covers — callers filter empty
    /// sets out before they reach the cache, so that case is defensive only.
    pub fn covers(&self, requested: &FieldSet) -> bool {
        requested
            .iter()
            .all(|(key, want)| self.0.get(key).is_some_and(|have| have.covers(want)))
    }
}

impl TryFrom<&[(&str, &str)]> for FieldSet {
    type Error = FieldSetError;

    fn try_from(pairs: &[(&str, &str)]) -> Result<Self, FieldSetError> {
        let mut set = FieldSet::new();
        for (type_name, list) in pairs {
            set.insert(*type_name, *list)?;
        }
        Ok(set)
    }
}
