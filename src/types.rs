use rustc_hash::FxHasher;
use smol_str::SmolStr;
use std::collections::{HashMap, HashSet};
use std::hash::BuildHasherDefault;
use std::num::NonZeroUsize;

pub type FastMap<K, V> = HashMap<K, V, BuildHasherDefault<FxHasher>>;
pub type FastHashSet<T> = HashSet<T, BuildHasherDefault<FxHasher>>;

/// Alias for resource type names — the keys of a field-set (e.g. `"post"`).
pub type TypeName = SmolStr;

// ─── RecordIdentity ──────────────────────────────────────────────────────────

/// Opaque, stable token for one logical record.
///
/// Two requests for the same underlying record must carry the same token;
/// different records must carry different tokens. The token says nothing
/// about which fields have been loaded. Cheap to clone (inline for short
/// tokens), compared and hashed by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordIdentity(SmolStr);

impl RecordIdentity {
    pub fn new(token: impl Into<SmolStr>) -> Self {
        Self(token.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for RecordIdentity {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for RecordIdentity {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl std::fmt::Display for RecordIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── CoverageConfig ──────────────────────────────────────────────────────────

/// Configuration for [`CoverageCache::new_with_config`].
///
/// [`CoverageCache::new_with_config`]: crate::coverage::CoverageCache::new_with_config
pub struct CoverageConfig {
    /// Maximum number of record identities to track, or `None` for unbounded.
    ///
    /// When the limit is reached, the least-recently-requested identity's
    /// coverage slot is dropped. An evicted identity is simply forgotten:
    /// its next field-bearing request reports "fetch needed" again. A bound
    /// trades memory for occasional re-fetches; it never produces a wrong
    /// "already covered" answer.
    ///
    /// Default: unbounded — slots live until the record-store calls
    /// `evict` on record disposal.
    pub capacity: Option<NonZeroUsize>,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self { capacity: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_equality_is_token_equality() {
        let a = RecordIdentity::from("post:1");
        let b = RecordIdentity::new(String::from("post:1"));
        let c = RecordIdentity::from("post:2");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.as_str(), "post:1");
        assert_eq!(a.to_string(), "post:1");
    }

    #[test]
    fn test_default_config_is_unbounded() {
        assert!(CoverageConfig::default().capacity.is_none());
    }
}
