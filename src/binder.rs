use tracing::{debug, trace};

use crate::number::{parse_decimal, NumberStyles};
use crate::provider::{SimpleValueProvider, ValueProvider};
use crate::state::ModelStateDictionary;

/// Whether binding produced a model. `Failed` means "no model set", which
/// also covers the no-value case where nothing was attempted at all.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BindingResult {
    #[default]
    Failed,
    Success(f64),
}

impl BindingResult {
    pub fn is_model_set(&self) -> bool {
        matches!(self, BindingResult::Success(_))
    }

    pub fn model(&self) -> Option<f64> {
        match self {
            BindingResult::Success(v) => Some(*v),
            BindingResult::Failed => None,
        }
    }
}

/// Everything one binding attempt reads and writes: the model name to look
/// up, the value source, the accumulated model state, and the outcome.
pub struct BindingContext {
    pub model_name: String,
    pub value_provider: Box<dyn ValueProvider>,
    pub model_state: ModelStateDictionary,
    pub result: BindingResult,
}

impl BindingContext {
    /// Context with an empty provider; useful as a scaffold in tests.
    pub fn new(model_name: impl Into<String>) -> Self {
        Self::with_provider(model_name, SimpleValueProvider::new())
    }

    pub fn with_provider(
        model_name: impl Into<String>,
        provider: impl ValueProvider + 'static,
    ) -> Self {
        Self {
            model_name: model_name.into(),
            value_provider: Box::new(provider),
            model_state: ModelStateDictionary::new(),
            result: BindingResult::default(),
        }
    }
}

/// A binder reads from the context's value provider and settles the context's
/// result. Failures are recorded in model state, never returned.
pub trait ModelBinder {
    fn bind_model(&self, ctx: &mut BindingContext);
}

/// Binds a decimal model from its stringified form, parsing with the locale
/// carried by the provider result (not one of its own).
#[derive(Debug, Clone, Copy)]
pub struct DecimalBinder {
    styles: NumberStyles,
}

impl DecimalBinder {
    pub fn new(styles: NumberStyles) -> Self {
        Self { styles }
    }

    pub fn styles(&self) -> NumberStyles {
        self.styles
    }
}

impl Default for DecimalBinder {
    fn default() -> Self {
        Self::new(NumberStyles::FLOAT.with_thousands())
    }
}

impl ModelBinder for DecimalBinder {
    fn bind_model(&self, ctx: &mut BindingContext) {
        let name = ctx.model_name.clone();
        trace!(model = %name, "attempting to bind decimal model");

        let result = ctx.value_provider.get_value(&name);
        if result.is_absent() {
            trace!(model = %name, "no value; leaving result unset");
            return;
        }

        let locale = result.locale().cloned().unwrap_or_default();
        ctx.model_state.set_model_value(&*name, &result);

        let text = result.first_value().unwrap_or("").trim().to_string();
        if text.is_empty() {
            debug!(model = %name, "empty value for non-optional model");
            ctx.model_state
                .try_add_model_error(&*name, format!("a value for '{name}' is required"), None);
            return;
        }

        match parse_decimal(&text, self.styles, &locale) {
            Ok(value) => {
                debug!(model = %name, value, locale = %locale, "bound");
                ctx.result = BindingResult::Success(value);
                ctx.model_state.mark_field_valid(&*name);
            }
            Err(err) => {
                debug!(model = %name, error = %err, locale = %locale, "conversion failed");
                let message = format!("the value '{text}' is not valid for '{name}'");
                ctx.model_state
                    .try_add_model_error(&*name, message, Some(err));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use crate::state::ValidationState;
    use pretty_assertions::assert_eq;

    fn french_context(value: &str) -> BindingContext {
        let mut provider = SimpleValueProvider::with_locale(Locale::french());
        provider.insert("theModelName", value);
        BindingContext::with_provider("theModelName", provider)
    }

    #[test]
    fn missing_value_leaves_context_untouched() {
        let mut ctx = BindingContext::new("theModelName");
        DecimalBinder::default().bind_model(&mut ctx);
        assert_eq!(ctx.result, BindingResult::Failed);
        assert!(ctx.model_state.is_empty());
    }

    #[test]
    fn binds_french_value_with_no_break_space() {
        let mut ctx = french_context("32\u{a0}000,1");
        DecimalBinder::default().bind_model(&mut ctx);
        assert_eq!(ctx.result, BindingResult::Success(32000.1));
        assert_eq!(
            ctx.model_state.get("theModelName").unwrap().state,
            ValidationState::Valid
        );
    }

    #[test]
    fn ascii_space_grouping_records_one_error() {
        let mut ctx = french_context("32 000,1");
        DecimalBinder::default().bind_model(&mut ctx);
        assert_eq!(ctx.result, BindingResult::Failed);
        assert!(!ctx.result.is_model_set());
        let errors = ctx.model_state.errors_for("theModelName");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].source.is_some());
        assert_eq!(
            ctx.model_state.get("theModelName").unwrap().attempted_value.as_deref(),
            Some("32 000,1")
        );
    }

    #[test]
    fn empty_value_is_a_required_error() {
        let mut ctx = french_context("   ");
        DecimalBinder::default().bind_model(&mut ctx);
        assert_eq!(ctx.result, BindingResult::Failed);
        let errors = ctx.model_state.errors_for("theModelName");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].source.is_none());
    }

    #[test]
    fn parses_with_the_providers_locale() {
        // The binder has no locale of its own; the provider's travels with
        // the lookup result.
        let mut provider = SimpleValueProvider::new();
        provider.insert("theModelName", "32,000.1");
        let mut ctx = BindingContext::with_provider("theModelName", provider);
        DecimalBinder::default().bind_model(&mut ctx);
        assert_eq!(ctx.result, BindingResult::Success(32000.1));
    }

    #[test]
    fn styles_gate_the_binder_too() {
        let mut provider = SimpleValueProvider::new();
        provider.insert("theModelName", "32,000.1");
        let mut ctx = BindingContext::with_provider("theModelName", provider);
        DecimalBinder::new(NumberStyles::FLOAT).bind_model(&mut ctx);
        assert_eq!(ctx.result, BindingResult::Failed);
        assert_eq!(ctx.model_state.errors_for("theModelName").len(), 1);
    }
}
