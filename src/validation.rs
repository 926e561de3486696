//! Input validation for task records.
//!
//! Checks raw records from the input layer before they become
//! [`Task`]s. The scheduler assumes clean input, so everything it relies
//! on is enforced here:
//! - Non-empty, unique IDs
//! - Arrival time >= 0
//! - Burst time > 0
//! - Priority within the configured range
//! - A known task class
//!
//! All problems are collected; a batch with any error yields no tasks.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

use crate::config::SimulationConfig;
use crate::models::{Task, TaskClass};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending record's ID (empty if the ID itself is missing).
    pub task_id: String,
    /// Human-readable description naming the offending field.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A record has an empty ID.
    EmptyId,
    /// Two records share the same ID.
    DuplicateId,
    /// Arrival time is negative.
    NegativeArrival,
    /// Burst time is zero or negative.
    NonPositiveBurst,
    /// Priority is outside the configured range.
    PriorityOutOfRange,
    /// Class is not Foreground or Background.
    InvalidClass,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, task_id: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            task_id: task_id.to_string(),
            message: message.into(),
        }
    }
}

/// A task as submitted by the input layer, before validation.
///
/// This is a JSON record format with numeric fields. The short keys
/// `pid`, `arrival`, `burst` and `type` are accepted as aliases, but
/// string-encoded numbers (as found in CSV exports) are not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Task identifier.
    #[serde(alias = "pid")]
    pub id: String,
    /// Arrival time (ms).
    #[serde(alias = "arrival")]
    pub arrival_ms: i64,
    /// Burst time (ms).
    #[serde(alias = "burst")]
    pub burst_ms: i64,
    /// Priority, or `None` for the configured default.
    #[serde(default)]
    pub priority: Option<i32>,
    /// Class name.
    #[serde(alias = "type")]
    pub class: String,
}

impl TaskRecord {
    /// Creates a record.
    pub fn new(
        id: impl Into<String>,
        arrival_ms: i64,
        burst_ms: i64,
        class: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            arrival_ms,
            burst_ms,
            priority: None,
            class: class.into(),
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        TaskRecord::new(task.id.clone(), task.arrival_ms, task.burst_ms, task.class.as_str())
            .with_priority(task.priority)
    }
}

/// Validates task records.
///
/// Checks:
/// 1. IDs are non-empty (after trimming) and unique
/// 2. Arrival time is not negative
/// 3. Burst time is positive
/// 4. The effective priority (given, or the configured default) lies
///    within the configured range
/// 5. Class parses as Foreground or Background
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_records(records: &[TaskRecord], config: &SimulationConfig) -> ValidationResult {
    let (_, errors) = check_records(records, config);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates records and converts them into tasks.
///
/// Missing priorities take `config.default_priority`. No tasks are
/// produced unless every record is valid.
pub fn parse_records(
    records: &[TaskRecord],
    config: &SimulationConfig,
) -> Result<Vec<Task>, Vec<ValidationError>> {
    let (tasks, errors) = check_records(records, config);
    if errors.is_empty() {
        Ok(tasks)
    } else {
        warn!(count = errors.len(), "rejected task records");
        Err(errors)
    }
}

/// Runs every check, building a task for each record whose class parses.
fn check_records(
    records: &[TaskRecord],
    config: &SimulationConfig,
) -> (Vec<Task>, Vec<ValidationError>) {
    let mut tasks = Vec::with_capacity(records.len());
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for rec in records {
        let id = rec.id.trim();
        if id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                id,
                "task ID must not be empty",
            ));
        } else if !ids.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                id,
                format!("duplicate task ID: {id}"),
            ));
        }

        if rec.arrival_ms < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                id,
                format!("task '{id}': arrival time must not be negative"),
            ));
        }

        if rec.burst_ms <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                id,
                format!("task '{id}': burst time must be positive"),
            ));
        }

        let priority = rec.priority.unwrap_or(config.default_priority);
        if !config.priority_in_range(priority) {
            errors.push(ValidationError::new(
                ValidationErrorKind::PriorityOutOfRange,
                id,
                format!(
                    "task '{id}': priority must be within range {}-{}",
                    config.min_priority, config.max_priority
                ),
            ));
        }

        match rec.class.parse::<TaskClass>() {
            Ok(class) => tasks.push(
                Task::new(id, rec.burst_ms)
                    .with_arrival(rec.arrival_ms)
                    .with_class(class)
                    .with_priority(priority),
            ),
            Err(e) => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidClass,
                id,
                format!("task '{id}': {e}"),
            )),
        }
    }

    (tasks, errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<TaskRecord> {
        vec![
            TaskRecord::new("P1", 0, 100, "Foreground").with_priority(5),
            TaskRecord::new("P2", 50, 150, "Background").with_priority(3),
            TaskRecord::new("P3", 100, 80, "Background"),
        ]
    }

    fn kinds(errors: &[ValidationError]) -> Vec<ValidationErrorKind> {
        errors.iter().map(|e| e.kind.clone()).collect()
    }

    #[test]
    fn test_valid_input() {
        let config = SimulationConfig::default();
        assert!(validate_records(&sample_records(), &config).is_ok());
    }

    #[test]
    fn test_parse_records() {
        let config = SimulationConfig::default();
        let tasks = parse_records(&sample_records(), &config).unwrap();
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[1].class, TaskClass::Background);
        assert_eq!(tasks[1].priority, 3);
        // Missing priority takes the default
        assert_eq!(tasks[2].priority, 5);
    }

    #[test]
    fn test_empty_id() {
        let records = vec![TaskRecord::new("  ", 0, 100, "Foreground")];
        let errors = validate_records(&records, &SimulationConfig::default()).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::EmptyId]);
    }

    #[test]
    fn test_duplicate_id() {
        let records = vec![
            TaskRecord::new("P1", 0, 100, "Foreground"),
            TaskRecord::new("P1", 10, 100, "Background"),
        ];
        let errors = validate_records(&records, &SimulationConfig::default()).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::DuplicateId]);
        assert!(errors[0].message.contains("P1"));
    }

    #[test]
    fn test_negative_arrival() {
        let records = vec![TaskRecord::new("P1", -1, 100, "Foreground")];
        let errors = validate_records(&records, &SimulationConfig::default()).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::NegativeArrival]);
    }

    #[test]
    fn test_non_positive_burst() {
        let records = vec![
            TaskRecord::new("P1", 0, 0, "Foreground"),
            TaskRecord::new("P2", 0, -5, "Foreground"),
        ];
        let errors = validate_records(&records, &SimulationConfig::default()).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::NonPositiveBurst));
        assert!(errors[0].message.contains("burst time must be positive"));
    }

    #[test]
    fn test_priority_out_of_range() {
        let records = vec![TaskRecord::new("P1", 0, 100, "Foreground").with_priority(11)];
        let errors = validate_records(&records, &SimulationConfig::default()).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::PriorityOutOfRange]);
        assert!(errors[0].message.contains("priority must be within range 1-10"));
    }

    #[test]
    fn test_invalid_class() {
        let records = vec![TaskRecord::new("P1", 0, 100, "Realtime")];
        let errors = validate_records(&records, &SimulationConfig::default()).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::InvalidClass]);
    }

    #[test]
    fn test_multiple_errors() {
        let records = vec![
            TaskRecord::new("", -1, 0, "Unknown").with_priority(0),
            TaskRecord::new("P2", 0, 100, "Background"),
        ];
        let config = SimulationConfig::default();
        let errors = validate_records(&records, &config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(parse_records(&records, &config).is_err());
    }

    #[test]
    fn test_default_priority_out_of_range() {
        let records = vec![TaskRecord::new("P1", 0, 10, "Foreground")];
        let config = SimulationConfig::new().with_default_priority(0);

        let errors = parse_records(&records, &config).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::PriorityOutOfRange]);

        // An explicit in-range priority does not fall back to the default
        let records = vec![TaskRecord::new("P1", 0, 10, "Foreground").with_priority(4)];
        let tasks = parse_records(&records, &config).unwrap();
        assert_eq!(tasks[0].priority, 4);
    }

    #[test]
    fn test_parse_trims_id() {
        let records = vec![TaskRecord::new(" P1 ", 0, 10, "background")];
        let tasks = parse_records(&records, &SimulationConfig::default()).unwrap();
        assert_eq!(tasks[0].id, "P1");
        assert_eq!(tasks[0].class, TaskClass::Background);
    }

    #[test]
    fn test_string_numbers_rejected() {
        let json = r#"{"pid": "P1", "arrival": "0", "burst": "100", "type": "Foreground"}"#;
        assert!(serde_json::from_str::<TaskRecord>(json).is_err());
    }

    #[test]
    fn test_deserialize_aliases() {
        let json = r#"{"pid": "P1", "arrival": 0, "burst": 100, "type": "Foreground"}"#;
        let rec: TaskRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec, TaskRecord::new("P1", 0, 100, "Foreground"));
    }

    #[test]
    fn test_record_from_task() {
        let task = Task::background("P1", 5, 10).with_priority(2);
        let rec = TaskRecord::from(&task);
        assert_eq!(rec.class, "Background");
        assert_eq!(rec.priority, Some(2));
    }
}
