use std::sync::Arc;

use model_value_binding as mvb;

use mvb::{PrefixMatcher, SimpleValueProvider, ValueProvider};

#[test]
fn test_empty_prefix_tracks_mapping_emptiness() {
    let mut provider = SimpleValueProvider::new();
    assert!(!provider.contains_prefix(""));
    provider.insert("theModelName", "32 000,1");
    assert!(provider.contains_prefix(""));
}

#[test]
fn test_default_rule_understands_path_segments() {
    let provider: SimpleValueProvider = [
        ("order.total", "12"),
        ("order.lines[0].qty", "3"),
        ("customer", "acme"),
    ]
    .into_iter()
    .collect();

    assert!(provider.contains_prefix("order"));
    assert!(provider.contains_prefix("order.lines"));
    assert!(provider.contains_prefix("customer"));
    assert!(!provider.contains_prefix("cust"));
    assert!(!provider.contains_prefix("order.totals"));
}

#[test]
fn test_prefix_check_is_case_insensitive() {
    let mut provider = SimpleValueProvider::new();
    provider.insert("TheModelName", "x");
    assert!(provider.contains_prefix("themodelname"));
    assert!(provider.contains_prefix("THEMODELNAME"));
}

// The rule is an injected dependency; a host with different path semantics
// can swap its own in.
struct PlainStartsWith;

impl PrefixMatcher for PlainStartsWith {
    fn matches(&self, prefix: &str, key: &str) -> bool {
        key.starts_with(prefix)
    }
}

#[test]
fn test_injected_matcher_replaces_default_rule() {
    let mut provider = SimpleValueProvider::new().with_matcher(Arc::new(PlainStartsWith));
    provider.insert("foobar", "1");
    assert!(provider.contains_prefix("foo"));

    let strict = {
        let mut p = SimpleValueProvider::new();
        p.insert("foobar", "1");
        p
    };
    assert!(!strict.contains_prefix("foo"));
}
