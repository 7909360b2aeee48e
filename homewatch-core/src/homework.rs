//! Homework domain types

use serde_json::Value;

use crate::error::CheckError;

/// Review status of a homework submission
///
/// The grading API reports status as a short string code; only these three
/// codes are valid. Anything else is rejected during record validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Parses a raw status code from the API
    pub fn from_code(code: &str) -> Result<Self, CheckError> {
        match code {
            "approved" => Ok(Self::Approved),
            "reviewing" => Ok(Self::Reviewing),
            "rejected" => Ok(Self::Rejected),
            other => Err(CheckError::UnknownStatus {
                status: other.to_string(),
            }),
        }
    }

    /// Human-readable verdict sentence for this status
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// One homework submission as reported by the grading API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkRecord {
    /// Name of the submitted work
    pub name: String,
    /// Current review status
    pub status: HomeworkStatus,
}

impl HomeworkRecord {
    /// Validates a raw record into a typed one
    ///
    /// Both `status` and `homework_name` are required string fields; the
    /// status code must be one of the known verdicts.
    pub fn from_value(value: &Value) -> Result<Self, CheckError> {
        let status_code = value
            .get("status")
            .and_then(Value::as_str)
            .ok_or(CheckError::MissingField { field: "status" })?;

        let name = value
            .get("homework_name")
            .and_then(Value::as_str)
            .ok_or(CheckError::MissingField {
                field: "homework_name",
            })?;

        Ok(Self {
            name: name.to_string(),
            status: HomeworkStatus::from_code(status_code)?,
        })
    }
}

/// Formats the notification text for a status change
pub fn status_message(record: &HomeworkRecord) -> String {
    format!(
        "Изменился статус проверки работы \"{}\". {}",
        record.name,
        record.status.verdict()
    )
}
