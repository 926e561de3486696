//! Workload construction and statistics.
//!
//! Sources of task sets for a simulation run: the built-in demo set,
//! a seeded random generator, and JSON import through validation.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::error::SimError;
use crate::models::{Task, TaskClass};
use crate::validation::{parse_records, TaskRecord};

/// The four-task demo workload.
pub fn sample_tasks() -> Vec<Task> {
    vec![
        Task::foreground("P1", 0, 100).with_priority(1),
        Task::background("P2", 50, 150).with_priority(2),
        Task::background("P3", 100, 80).with_priority(3),
        Task::foreground("P4", 150, 120).with_priority(1),
    ]
}

/// Generates `count` valid tasks with IDs `T1..Tn`.
///
/// Arrivals fall in `0..=1000` ms, bursts in `1..=300` ms, and each task
/// is background with probability 0.5.
pub fn random_tasks<R: Rng>(rng: &mut R, count: usize) -> Vec<Task> {
    (1..=count)
        .map(|i| {
            let class = if rng.random_bool(0.5) {
                TaskClass::Background
            } else {
                TaskClass::Foreground
            };
            Task::new(format!("T{i}"), rng.random_range(1..=300))
                .with_arrival(rng.random_range(0..=1000))
                .with_class(class)
                .with_priority(rng.random_range(1..=10))
        })
        .collect()
}

/// Parses a JSON array of [`TaskRecord`]s and validates it.
///
/// Numeric fields must be JSON numbers; CSV-style string values such
/// as `"burst": "100"` are rejected as malformed.
///
/// # Errors
/// [`SimError::Json`] if the text is not a record array,
/// [`SimError::Validation`] if any record is invalid.
pub fn from_json(text: &str, config: &SimulationConfig) -> Result<Vec<Task>, SimError> {
    let records: Vec<TaskRecord> = serde_json::from_str(text)?;
    Ok(parse_records(&records, config)?)
}

/// Summary statistics of an input workload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkloadStats {
    /// Number of tasks.
    pub total: usize,
    /// Foreground task count.
    pub foreground: usize,
    /// Background task count.
    pub background: usize,
    /// Sum of bursts (ms), saturating at `i64::MAX`.
    pub total_burst_ms: i64,
    /// Mean burst (ms). Zero for an empty workload.
    pub avg_burst_ms: f64,
}

impl WorkloadStats {
    /// Computes statistics for `tasks`.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let background = tasks
            .iter()
            .filter(|t| t.class == TaskClass::Background)
            .count();
        let total_burst_ms = tasks
            .iter()
            .fold(0i64, |acc, t| acc.saturating_add(t.burst_ms));
        // Averaged in f64 so a saturated total does not skew the mean
        let avg_burst_ms = if total == 0 {
            0.0
        } else {
            tasks.iter().map(|t| t.burst_ms as f64).sum::<f64>() / total as f64
        };

        Self {
            total,
            foreground: total - background,
            background,
            total_burst_ms,
            avg_burst_ms,
        }
    }

    /// Whether DVFS can save anything (any background task present).
    pub fn dvfs_applicable(&self) -> bool {
        self.background > 0
    }
}
