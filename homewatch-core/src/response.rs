//! Shape validation for raw grading API responses

use serde_json::Value;

use crate::error::CheckError;

/// Validates a raw API response and returns its homework list
///
/// The response must be a JSON object carrying a `homeworks` array. The
/// optional `current_date` field is not inspected. Individual records are
/// validated later, one at a time, by
/// [`HomeworkRecord::from_value`](crate::HomeworkRecord::from_value).
pub fn check_response(response: &Value) -> Result<&[Value], CheckError> {
    let object = response.as_object().ok_or(CheckError::TypeMismatch {
        context: "response is not an object",
    })?;

    let homeworks = object.get("homeworks").ok_or(CheckError::EmptyPayload)?;

    homeworks
        .as_array()
        .map(Vec::as_slice)
        .ok_or(CheckError::TypeMismatch {
            context: "`homeworks` is not an array",
        })
}
