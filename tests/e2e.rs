use model_value_binding as mvb;

use mvb::{bind_decimal_str, BindingResult, Locale, SimpleValueProvider, ValueProvider};
use pretty_assertions::assert_eq;

#[test]
fn test_french_lookup_scenario() {
    // mapping = {"theModelName": "32 000,1"}, locale = French
    let mut provider = SimpleValueProvider::with_locale(Locale::french());
    provider.insert("theModelName", "32 000,1");

    let result = provider.get_value("theModelName");
    assert!(!result.is_absent());
    assert_eq!(result.len(), 1);
    assert_eq!(result.first_value(), Some("32 000,1"));
    assert_eq!(result.locale().map(Locale::tag), Some("fr-FR"));
}

#[test]
fn test_french_binding_with_ascii_space_fails() {
    // The diagnosed mismatch: the input groups digits with U+0020 while the
    // French locale only accepts no-break spaces.
    let ctx = bind_decimal_str("theModelName", "32 000,1", Locale::french());
    assert_eq!(ctx.result, BindingResult::Failed);
    assert!(ctx.model_state.contains_key("theModelName"));
    assert_eq!(ctx.model_state.errors_for("theModelName").len(), 1);
}

#[test]
fn test_french_binding_with_no_break_space_succeeds() {
    let ctx = bind_decimal_str("theModelName", "32\u{a0}000,1", Locale::french());
    assert_eq!(ctx.result, BindingResult::Success(32000.1));
    assert!(ctx.model_state.is_valid());
    assert_eq!(
        ctx.model_state
            .get("theModelName")
            .unwrap()
            .attempted_value
            .as_deref(),
        Some("32\u{a0}000,1")
    );
}

#[test]
fn test_invariant_binding() {
    let ctx = bind_decimal_str("amount", "32,000.1", Locale::invariant());
    assert_eq!(ctx.result.model(), Some(32000.1));
}

#[test]
fn test_binding_against_missing_key() {
    use mvb::{BindingContext, DecimalBinder, ModelBinder};

    let provider = SimpleValueProvider::with_locale(Locale::french());
    let mut ctx = BindingContext::with_provider("theModelName", provider);
    DecimalBinder::default().bind_model(&mut ctx);
    assert!(!ctx.result.is_model_set());
    assert!(!ctx.model_state.contains_key("theModelName"));
}
