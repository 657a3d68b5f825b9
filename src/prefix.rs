use std::sync::Arc;

/// Prefix rule used by [`contains_prefix`](crate::provider::ValueProvider::contains_prefix).
///
/// The dotted/indexed path grammar is owned by whatever binding pipeline sits
/// on top, so the rule is injected rather than hard-coded; providers only call
/// it. Both arguments arrive already case-normalized.
pub trait PrefixMatcher: Send + Sync {
    fn matches(&self, prefix: &str, key: &str) -> bool;
}

/// Default rule: the empty prefix matches any key; otherwise the key must be
/// the prefix itself or continue it with a member (`.`) or index (`[`)
/// segment. `"foo"` matches `foo`, `foo.bar` and `foo[0]`, but not `foobar`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DottedPathMatcher;

impl PrefixMatcher for DottedPathMatcher {
    fn matches(&self, prefix: &str, key: &str) -> bool {
        if prefix.is_empty() {
            return true;
        }
        if !key.starts_with(prefix) {
            return false;
        }
        match key.as_bytes().get(prefix.len()) {
            None => true,
            Some(b'.') | Some(b'[') => true,
            Some(_) => false,
        }
    }
}

pub(crate) fn default_matcher() -> Arc<dyn PrefixMatcher> {
    Arc::new(DottedPathMatcher)
}
