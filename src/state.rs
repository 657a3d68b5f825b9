use std::collections::HashMap;

use crate::errors::BindError;
use crate::provider::ValueProviderResult;

/// Hard cap on recorded errors across the whole dictionary; once reached,
/// further errors are dropped and recording reports failure.
pub const MAX_STATE_ERRORS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationState {
    #[default]
    Unvalidated,
    Valid,
    Invalid,
}

/// One recorded binding failure: a user-facing message, plus the underlying
/// error when conversion itself failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelError {
    pub message: String,
    pub source: Option<BindError>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModelStateEntry {
    /// Joined string form of what the provider returned, as attempted.
    pub attempted_value: Option<String>,
    /// The provider result as stored by the binder.
    pub raw_value: Option<ValueProviderResult>,
    pub errors: Vec<ModelError>,
    pub state: ValidationState,
}

/// Per-key record of what was bound, what it looked like, and what went
/// wrong. Keys are recorded exactly as the binder names them and never
/// removed.
#[derive(Debug, Default)]
pub struct ModelStateDictionary {
    entries: HashMap<String, ModelStateEntry>,
    error_count: usize,
}

impl ModelStateDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_model_value(&mut self, key: impl Into<String>, result: &ValueProviderResult) {
        let entry = self.entries.entry(key.into()).or_default();
        entry.attempted_value = if result.is_absent() {
            None
        } else {
            Some(result.to_string())
        };
        entry.raw_value = Some(result.clone());
    }

    /// Record a binding failure for `key`. Returns false once the error cap
    /// is reached; the error is then dropped.
    pub fn try_add_model_error(
        &mut self,
        key: impl Into<String>,
        message: impl Into<String>,
        source: Option<BindError>,
    ) -> bool {
        if self.error_count >= MAX_STATE_ERRORS {
            return false;
        }
        let entry = self.entries.entry(key.into()).or_default();
        entry.errors.push(ModelError {
            message: message.into(),
            source,
        });
        entry.state = ValidationState::Invalid;
        self.error_count += 1;
        true
    }

    /// Mark a field as having validated successfully. A field already marked
    /// invalid stays invalid.
    pub fn mark_field_valid(&mut self, key: impl Into<String>) {
        let entry = self.entries.entry(key.into()).or_default();
        if entry.state != ValidationState::Invalid {
            entry.state = ValidationState::Valid;
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&ModelStateEntry> {
        self.entries.get(key)
    }

    pub fn errors_for(&self, key: &str) -> &[ModelError] {
        self.get(key).map(|e| e.errors.as_slice()).unwrap_or(&[])
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn is_valid(&self) -> bool {
        self.error_count == 0
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
