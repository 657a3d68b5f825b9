use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use itertools::Itertools;
use tracing::trace;

use crate::locale::Locale;
use crate::prefix::{default_matcher, PrefixMatcher};
use crate::values::RawValue;

/// Outcome of a keyed lookup: the absent sentinel, or the stringified
/// value(s) together with the locale that produced them.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueProviderResult {
    Absent,
    Single { value: String, locale: Locale },
    Multiple { values: Vec<String>, locale: Locale },
}

impl ValueProviderResult {
    pub fn is_absent(&self) -> bool {
        matches!(self, ValueProviderResult::Absent)
    }

    pub fn len(&self) -> usize {
        match self {
            ValueProviderResult::Absent => 0,
            ValueProviderResult::Single { .. } => 1,
            ValueProviderResult::Multiple { values, .. } => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First stringified value, if any.
    pub fn first_value(&self) -> Option<&str> {
        match self {
            ValueProviderResult::Absent => None,
            ValueProviderResult::Single { value, .. } => Some(value),
            ValueProviderResult::Multiple { values, .. } => values.first().map(String::as_str),
        }
    }

    pub fn locale(&self) -> Option<&Locale> {
        match self {
            ValueProviderResult::Absent => None,
            ValueProviderResult::Single { locale, .. }
            | ValueProviderResult::Multiple { locale, .. } => Some(locale),
        }
    }
}

impl fmt::Display for ValueProviderResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueProviderResult::Absent => Ok(()),
            ValueProviderResult::Single { value, .. } => write!(f, "{value}"),
            ValueProviderResult::Multiple { values, .. } => {
                write!(f, "{}", values.iter().join(","))
            }
        }
    }
}

/// A source of raw field values for binding: a containment check over key
/// prefixes plus keyed retrieval.
pub trait ValueProvider {
    fn contains_prefix(&self, prefix: &str) -> bool;
    fn get_value(&self, key: &str) -> ValueProviderResult;
}

/// In-memory value source over a case-insensitive mapping. Keys are
/// normalized to lower case at insertion and lookup; values are stringified
/// with the configured locale when retrieved.
pub struct SimpleValueProvider {
    entries: HashMap<String, RawValue>,
    locale: Locale,
    matcher: Arc<dyn PrefixMatcher>,
}

impl SimpleValueProvider {
    /// Empty provider with invariant-locale stringification.
    pub fn new() -> Self {
        Self::with_locale(Locale::invariant())
    }

    pub fn with_locale(locale: Locale) -> Self {
        Self {
            entries: HashMap::new(),
            locale,
            matcher: default_matcher(),
        }
    }

    /// Swap in a different prefix rule.
    pub fn with_matcher(mut self, matcher: Arc<dyn PrefixMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RawValue>) {
        self.entries.insert(key.into().to_lowercase(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }
}

impl Default for SimpleValueProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for SimpleValueProvider
where
    K: Into<String>,
    V: Into<RawValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut provider = Self::new();
        provider.extend(iter);
        provider
    }
}

impl<K, V> Extend<(K, V)> for SimpleValueProvider
where
    K: Into<String>,
    V: Into<RawValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl ValueProvider for SimpleValueProvider {
    fn contains_prefix(&self, prefix: &str) -> bool {
        let prefix = prefix.to_lowercase();
        self.entries.keys().any(|key| self.matcher.matches(&prefix, key))
    }

    fn get_value(&self, key: &str) -> ValueProviderResult {
        let normalized = key.to_lowercase();
        let Some(raw) = self.entries.get(&normalized) else {
            trace!(key = %normalized, "no value for key");
            return ValueProviderResult::Absent;
        };
        match raw {
            // A null entry has no representation of its own.
            RawValue::Null => ValueProviderResult::Single {
                value: String::new(),
                locale: self.locale.clone(),
            },
            RawValue::Scalar(s) => ValueProviderResult::Single {
                value: s.to_locale_string(&self.locale),
                locale: self.locale.clone(),
            },
            RawValue::Array(items) => ValueProviderResult::Multiple {
                values: items
                    .iter()
                    .map(|s| s.to_locale_string(&self.locale))
                    .collect(),
                locale: self.locale.clone(),
            },
        }
    }
}
