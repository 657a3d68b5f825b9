use thiserror::Error;

// Errors surfaced by the binding pipeline. Conversion failures are recorded
// in model state rather than bubbled, so this enum stays small.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    // Numeric text could not be converted under the requested locale/styles
    #[error("parse error: {0}")]
    Parse(String),

    // Pipeline-level condition, e.g. a required value that was empty
    #[error("binding error: {0}")]
    Binding(String),
}

pub type Result<T> = std::result::Result<T, BindError>;
