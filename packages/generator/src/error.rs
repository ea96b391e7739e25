use formgen_common::{BindError, CallbackError};
use thiserror::Error;
use tracing::error;

pub type GenerateResult<T> = Result<T, GenerateError>;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Bind(#[from] BindError),

    #[error(transparent)]
    Callback(#[from] CallbackError),

    #[error("Render sink error: {0}")]
    Sink(String),

    #[error("Cyclic model graph: '{model}' already appears in {}", .path.join(" → "))]
    CyclicModel {
        model: &'static str,
        path: Vec<&'static str>,
    },

    #[error("Model graph depth {depth} exceeds the maximum of {max}")]
    DepthExceeded { depth: usize, max: usize },

    /// Uniform failure raised at a directive boundary
    #[error("Failed to generate {control} for property '{property}': {source}")]
    Failed {
        control: &'static str,
        property: String,
        #[source]
        source: Box<GenerateError>,
    },
}

impl GenerateError {
    pub fn sink(message: impl Into<String>) -> Self {
        GenerateError::Sink(message.into())
    }

    /// Wrap as a control failure; an already wrapped error passes through unchanged
    pub fn wrap(self, control: &'static str, property: &str) -> Self {
        match self {
            failed @ GenerateError::Failed { .. } => failed,
            cause => {
                error!(control, property, error = %cause, "Form generation failed");
                GenerateError::Failed {
                    control,
                    property: property.to_string(),
                    source: Box::new(cause),
                }
            }
        }
    }

    /// Control kind named by a wrapped failure
    pub fn control(&self) -> Option<&'static str> {
        match self {
            GenerateError::Failed { control, .. } => Some(*control),
            _ => None,
        }
    }

    /// Innermost error, unwrapping any control failure
    pub fn root_cause(&self) -> &GenerateError {
        match self {
            GenerateError::Failed { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_is_idempotent() {
        let inner = GenerateError::sink("boom");
        let wrapped = inner.wrap("Select", "color").wrap("GroupBox", "address");

        assert_eq!(wrapped.control(), Some("Select"));
        assert!(matches!(wrapped.root_cause(), GenerateError::Sink(message) if message == "boom"));
        assert_eq!(
            wrapped.to_string(),
            "Failed to generate Select for property 'color': Render sink error: boom"
        );
    }

    #[test]
    fn test_cycle_message_lists_path() {
        let error = GenerateError::CyclicModel {
            model: "Node",
            path: vec!["Tree", "Node"],
        };
        assert_eq!(
            error.to_string(),
            "Cyclic model graph: 'Node' already appears in Tree → Node"
        );
    }
}
