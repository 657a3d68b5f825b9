pub mod errors;
pub mod values;
pub mod locale;
pub mod number;
pub mod prefix;    // injected prefix rule; swap via SimpleValueProvider::with_matcher
pub mod provider;
pub mod state;
pub mod binder;

pub use binder::{BindingContext, BindingResult, DecimalBinder, ModelBinder};
pub use errors::{BindError, Result};
pub use locale::Locale;
pub use number::{parse_decimal, NumberStyles};
pub use prefix::{DottedPathMatcher, PrefixMatcher};
pub use provider::{SimpleValueProvider, ValueProvider, ValueProviderResult};
pub use state::{ModelStateDictionary, ModelError, ValidationState};
pub use values::{RawValue, Scalar};

/// Convenience: run the standard decimal pipeline over a single (key, text)
/// pair and hand back the settled context for inspection.
pub fn bind_decimal_str(key: &str, text: &str, locale: Locale) -> BindingContext {
    let mut provider = SimpleValueProvider::with_locale(locale);
    provider.insert(key, text);
    let mut ctx = BindingContext::with_provider(key, provider);
    DecimalBinder::default().bind_model(&mut ctx);
    ctx
}
