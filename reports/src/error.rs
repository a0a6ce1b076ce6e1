//! Error types for model construction and rendering.
//!
//! Both errors are terminal: a [`ValidationError`] means the report
//! description is unusable as written, a [`RenderError`] means the renderer
//! was handed nothing to render. Neither is retried.

use std::fmt;

use thiserror::Error;

/// A report field violated its constraint during model construction.
///
/// `field` is a dotted path from the model root with collection indices,
/// e.g. `metrics[2].percent` or `modules[0].capabilities[3].name`.
///
/// # Example
///
/// ```rust
/// use report_render::model::MetricScore;
///
/// let err = MetricScore::new("Scalability", 150.0).unwrap_err();
/// assert_eq!(err.field, "percent");
/// assert_eq!(err.value, "150");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid {field} = {value:?}: {reason}")]
pub struct ValidationError {
    /// Path of the offending field
    pub field: String,
    /// Offending value, as displayed
    pub value: String,
    /// Which constraint was violated
    pub reason: &'static str,
}

impl ValidationError {
    pub(crate) fn new(field: impl Into<String>, value: impl fmt::Display, reason: &'static str) -> Self {
        Self {
            field: field.into(),
            value: value.to_string(),
            reason,
        }
    }

    /// Re-root the field path under `parent` (`percent` -> `metrics[1].percent`).
    pub(crate) fn within(mut self, parent: impl fmt::Display) -> Self {
        self.field = format!("{}.{}", parent, self.field);
        self
    }
}

/// Rendering failed before producing any output.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RenderError {
    /// No model was supplied to the renderer
    #[error("no report model to render")]
    MissingModel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_prefixes_field_path() {
        let err = ValidationError::new("name", "", "must not be empty")
            .within("capabilities[3]")
            .within("modules[0]");
        assert_eq!(err.field, "modules[0].capabilities[3].name");
    }

    #[test]
    fn display_names_field_and_value() {
        let err = ValidationError::new("metrics[0].percent", 150, "must be within 0..=100");
        assert_eq!(
            err.to_string(),
            "invalid metrics[0].percent = \"150\": must be within 0..=100"
        );
    }
}
