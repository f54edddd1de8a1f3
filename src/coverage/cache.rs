use crate::fieldset::FieldSet;
use crate::types::{CoverageConfig, RecordIdentity};
use lru::LruCache;

// ─── CoverageCache ───────────────────────────────────────────────────────────

/// Remembers, per record identity, which field combinations have already been
/// fetched, and decides whether a new field request needs a fresh fetch.
///
/// Each identity owns an ordered, append-only sequence of coverage entries
/// (insertion order = fetch order). A slot is created lazily on the first
/// field-bearing request and lives until the record-store calls [`evict`]
/// on record disposal, or until LRU capacity pressure drops it when a bound
/// was configured.
///
/// Single-writer: all mutation goes through `&mut self`; callers serialize
/// concurrent requests for the same identity themselves.
///
/// [`evict`]: CoverageCache::evict
pub struct CoverageCache {
    slots: LruCache<RecordIdentity, Vec<FieldSet>>,
}

impl CoverageCache {
    /// Unbounded cache: slots are only dropped when the record-store calls
    /// [`evict`] on record disposal.
    ///
    /// [`evict`]: CoverageCache::evict
    pub fn new() -> Self {
        Self::new_with_config(CoverageConfig::default())
    }

    pub fn new_with_config(config: CoverageConfig) -> Self {
        let slots = match config.capacity {
            Some(capacity) => LruCache::new(capacity),
            None => LruCache::unbounded(),
        };
        Self { slots }
    }

    /// Record that `fields` is being requested for `identity` and answer
    /// whether a fetch is actually needed.
    ///
    /// Returns `true` when the request introduces new information (first
    /// request for the identity, or a field combination no earlier entry
    /// covers) — the combination is appended to the identity's sequence.
    /// Returns `false` when some earlier entry already covers the request;
    /// a covered hit never mutates the sequence. An empty `fields` is a
    /// no-op returning `false`: nothing recorded, no decision made.
    pub fn record_fetch(&mut self, identity: &RecordIdentity, fields: &FieldSet) -> bool {
        if fields.is_empty() {
            return false;
        }

        match self.slots.get_mut(identity) {
            Some(entries) => {
                // First covering entry wins; order of entries is fetch order.
                if entries.iter().any(|cached| cached.covers(fields)) {
                    return false;
                }
                entries.push(fields.clone());
                true
            }
            None => {
                self.slots.put(identity.clone(), vec![fields.clone()]);
                true
            }
        }
    }

    /// Eviction hook for the external record-store: drop the identity's
    /// whole slot when the record itself is disposed. Returns whether a
    /// slot existed.
    pub fn evict(&mut self, identity: &RecordIdentity) -> bool {
        self.slots.pop(identity).is_some()
    }

    /// Whether at least one fetch was recorded for `identity`.
    /// Does not touch LRU recency.
    pub fn is_tracked(&self, identity: &RecordIdentity) -> bool {
        self.slots.contains(identity)
    }

    /// The recorded field-sets for `identity`, oldest first.
    /// Does not touch LRU recency.
    pub fn entries(&self, identity: &RecordIdentity) -> Option<&[FieldSet]> {
        self.slots.peek(identity).map(Vec::as_slice)
    }

    /// Number of tracked identities.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for CoverageCache {
    fn default() -> Self {
        Self::new()
    }
}
