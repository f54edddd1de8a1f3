use crate::coverage::CoverageCache;
use crate::fieldset::FieldSet;
use crate::types::{CoverageConfig, RecordIdentity};

// ─── FetchPolicy ─────────────────────────────────────────────────────────────

/// The decision surface a record-fetching client composes in front of its
/// transport: ask [`should_reload`] before issuing a fetch, call
/// [`on_fetch_dispatched`] on the path that actually fires one, so coverage
/// stays recorded even when the reload check was bypassed.
///
/// `fields: None` means the request carries no field scoping at all; both
/// operations then do nothing and the reload decision is left to whatever
/// default policy the caller has.
///
/// [`should_reload`]: FetchPolicy::should_reload
/// [`on_fetch_dispatched`]: FetchPolicy::on_fetch_dispatched
#[derive(Default)]
pub struct FetchPolicy {
    cache: CoverageCache,
}

impl FetchPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with_config(config: CoverageConfig) -> Self {
        Self {
            cache: CoverageCache::new_with_config(config),
        }
    }

    /// Must this request hit the network? Answering also records the
    /// request, so a covered repeat immediately returns `false`.
    pub fn should_reload(
        &mut self,
        identity: &RecordIdentity,
        fields: Option<&FieldSet>,
    ) -> bool {
        match fields {
            Some(fields) => self.cache.record_fetch(identity, fields),
            None => false,
        }
    }

    /// Fire-and-forget recording for the dispatch path.
    pub fn on_fetch_dispatched(&mut self, identity: &RecordIdentity, fields: Option<&FieldSet>) {
        if let Some(fields) = fields {
            let _ = self.cache.record_fetch(identity, fields);
        }
    }

    /// Eviction pass-through for the record-store's disposal hook.
    pub fn evict(&mut self, identity: &RecordIdentity) -> bool {
        self.cache.evict(identity)
    }

    /// Read access to the underlying coverage cache.
    pub fn cache(&self) -> &CoverageCache {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> FieldSet {
        FieldSet::try_from(pairs).expect("valid field set")
    }

    #[test]
    fn test_should_reload_without_fields_is_false() {
        let mut policy = FetchPolicy::new();
        let post = RecordIdentity::from("post:1");

        assert!(!policy.should_reload(&post, None));
        assert!(!policy.should_reload(&post, Some(&FieldSet::new())));
        assert!(!policy.cache().is_tracked(&post));
    }

    #[test]
    fn test_should_reload_records_the_request() {
        let mut policy = FetchPolicy::new();
        let post = RecordIdentity::from("post:1");
        let fs = fields(&[("post", "name,date")]);

        assert!(policy.should_reload(&post, Some(&fs)));
        assert!(!policy.should_reload(&post, Some(&fs)));
        assert!(!policy.should_reload(&post, Some(&fields(&[("post", "date")]))));
    }

    #[test]
    fn test_dispatch_path_records_too() {
        let mut policy = FetchPolicy::new();
        let post = RecordIdentity::from("post:1");
        let fs = fields(&[("post", "name,date")]);

        // The reload check was bypassed; dispatch still records coverage.
        policy.on_fetch_dispatched(&post, Some(&fs));

        assert!(!policy.should_reload(&post, Some(&fs)));
        assert!(!policy.should_reload(&post, Some(&fields(&[("post", "name")]))));
    }

    #[test]
    fn test_dispatch_without_fields_is_a_noop() {
        let mut policy = FetchPolicy::new();
        let post = RecordIdentity::from("post:1");

        policy.on_fetch_dispatched(&post, None);
        assert!(!policy.cache().is_tracked(&post));
    }

    #[test]
    fn test_evict_resets_the_identity() {
        let mut policy = FetchPolicy::new();
        let post = RecordIdentity::from("post:1");
        let fs = fields(&[("post", "name")]);

        assert!(policy.should_reload(&post, Some(&fs)));
        assert!(policy.evict(&post));
        assert!(policy.should_reload(&post, Some(&fs)));
    }
}
