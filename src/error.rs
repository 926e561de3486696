//! Boundary error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised at the input boundary.
///
/// The scheduling core itself never fails; these cover loading and
/// validating workloads before they reach it.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("workload rejected: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    #[error("malformed workload: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimError {
    /// Validation errors, if this is a rejected workload.
    pub fn validation_errors(&self) -> Option<&[ValidationError]> {
        match self {
            SimError::Validation(errors) => Some(errors.as_slice()),
            SimError::Json(_) => None,
        }
    }
}

impl From<Vec<ValidationError>> for SimError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SimError::Validation(errors)
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
