use crate::value::FieldType;
use thiserror::Error;

/// Errors raised while reading or writing a bound model property
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BindError {
    #[error("Property '{property}' on '{model}' expects {expected}, got {actual}")]
    TypeMismatch {
        model: &'static str,
        property: &'static str,
        expected: FieldType,
        actual: &'static str,
    },

    #[error("Property '{property}' is declared on '{expected}' but was accessed on another model type")]
    ModelMismatch {
        expected: &'static str,
        property: &'static str,
    },

    #[error("Property '{property}' on '{model}' is read-only")]
    ReadOnly {
        model: &'static str,
        property: &'static str,
    },

    #[error("Model '{model}' is already borrowed")]
    Busy { model: &'static str },
}

/// Errors raised when invoking a method resolved by name
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CallbackError {
    #[error("Method '{method}' on '{model}' is {actual}, expected {expected}")]
    SignatureMismatch {
        model: &'static str,
        method: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Method '{method}' is declared on '{model}' but was invoked on another model type")]
    TargetMismatch { model: &'static str, method: String },

    #[error("Model '{model}' is already borrowed")]
    Busy { model: &'static str },

    /// Options functions are awaited in place, which a running executor forbids
    #[error("Options function '{method}' cannot be awaited from inside another executor")]
    NestedExecutor { method: String },
}

/// Invalid color literal
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid color '{input}': expected #rrggbb or #rrggbbaa")]
pub struct ParseColorError {
    pub input: String,
}
