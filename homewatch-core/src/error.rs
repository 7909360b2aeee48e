//! Validation errors for grading API responses

use thiserror::Error;

/// Errors raised while validating a grading API response
///
/// All of these are recovered at the poll loop boundary and turned into a
/// user-facing failure notification; none of them is fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckError {
    /// The response or one of its fields has the wrong shape
    #[error("unexpected response shape: {context}")]
    TypeMismatch {
        /// What was being inspected when the mismatch was found
        context: &'static str,
    },

    /// The response is a well-formed object but has no `homeworks` key
    #[error("empty response from API: no `homeworks` key")]
    EmptyPayload,

    /// A homework record lacks a required field
    #[error("homework record is missing required field `{field}`")]
    MissingField {
        /// Name of the absent field
        field: &'static str,
    },

    /// The status code is not one of the known verdicts
    #[error("unknown homework status `{status}`")]
    UnknownStatus {
        /// The unrecognized status code as reported by the API
        status: String,
    },
}
