//! Scheduled task (solution) model.
//!
//! A scheduled task is an input task annotated with the dispatch decision
//! and the timing and energy figures derived from it.

use serde::{Deserialize, Serialize};

use super::{Task, TaskClass};

/// A task after FCFS dispatch.
///
/// The CPU is busy with this task over `[start_ms, completion_ms)`.
/// Derived times are fractional because throttled tasks run for
/// `burst / 0.6` ms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTask {
    /// The input task.
    #[serde(flatten)]
    pub task: Task,
    /// Frequency the task ran at.
    pub frequency: f64,
    /// Wall-clock execution time at that frequency (ms).
    pub execution_ms: f64,
    /// Dispatch time (ms).
    pub start_ms: f64,
    /// Completion time (ms).
    pub completion_ms: f64,
    /// `completion - arrival` (ms).
    pub turnaround_ms: f64,
    /// `turnaround - execution` (ms).
    pub waiting_ms: f64,
    /// `start - arrival` (ms).
    pub response_ms: f64,
    /// Energy under the DVFS policy. Zero until the energy model runs.
    pub energy_consumed: f64,
}

impl ScheduledTask {
    /// Dispatches `task` at `start_ms` and derives its timing figures.
    pub fn dispatch(task: Task, start_ms: f64) -> Self {
        let frequency = task.frequency();
        let execution_ms = task.execution_ms();
        let arrival = task.arrival_ms as f64;
        let completion_ms = start_ms + execution_ms;
        let turnaround_ms = completion_ms - arrival;

        Self {
            task,
            frequency,
            execution_ms,
            start_ms,
            completion_ms,
            turnaround_ms,
            waiting_ms: turnaround_ms - execution_ms,
            response_ms: start_ms - arrival,
            energy_consumed: 0.0,
        }
    }

    /// Task identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.task.id
    }

    /// Workload class.
    #[inline]
    pub fn class(&self) -> TaskClass {
        self.task.class
    }

    /// Whether this task's CPU interval overlaps `other`'s.
    pub fn overlaps(&self, other: &ScheduledTask) -> bool {
        self.start_ms < other.completion_ms && other.start_ms < self.completion_ms
    }
}
