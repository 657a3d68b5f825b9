use model_value_binding as mvb;

use mvb::{parse_decimal, Locale, NumberStyles, SimpleValueProvider, ValueProvider};
use proptest::prelude::*;

proptest! {
    // Display gives the shortest round-tripping form, so parsing the
    // locale-formatted text back must recover the value exactly.
    #[test]
    fn format_then_parse_round_trips(value in -1.0e12f64..1.0e12) {
        for locale in [Locale::invariant(), Locale::french(), Locale::german()] {
            let text = locale.format_decimal(value);
            let parsed = parse_decimal(&text, NumberStyles::FLOAT, &locale).unwrap();
            prop_assert_eq!(parsed, value);
        }
    }

    #[test]
    fn lookup_is_casing_invariant(key in "[a-zA-Z][a-zA-Z0-9]{0,12}", value in any::<i64>()) {
        let mut provider = SimpleValueProvider::new();
        provider.insert(key.clone(), value);
        prop_assert_eq!(
            provider.get_value(&key.to_uppercase()),
            provider.get_value(&key.to_lowercase())
        );
        prop_assert!(!provider.get_value(&key).is_absent());
    }

    #[test]
    fn array_lookups_preserve_arity(values in proptest::collection::vec(any::<i64>(), 0..8)) {
        let mut provider = SimpleValueProvider::new();
        provider.insert("items", values.clone());
        prop_assert_eq!(provider.get_value("items").len(), values.len());
    }
}
