//! Task model and frequency classes.
//!
//! A task is a single CPU burst submitted at an arrival time. Its class
//! decides the clock frequency it runs at under the DVFS policy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Normalized full clock frequency.
pub const FULL_FREQUENCY: f64 = 1.0;

/// Normalized throttled clock frequency used for background work.
pub const THROTTLED_FREQUENCY: f64 = 0.6;

/// Workload class of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskClass {
    /// Interactive work, always at full frequency.
    Foreground,
    /// Deferrable work, throttled under DVFS.
    Background,
}

impl TaskClass {
    /// Clock frequency assigned to this class.
    #[inline]
    pub fn frequency(self) -> f64 {
        match self {
            TaskClass::Foreground => FULL_FREQUENCY,
            TaskClass::Background => THROTTLED_FREQUENCY,
        }
    }

    /// Class name as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            TaskClass::Foreground => "Foreground",
            TaskClass::Background => "Background",
        }
    }
}

impl fmt::Display for TaskClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a class name is neither foreground nor background.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown task class '{0}' (expected Foreground or Background)")]
pub struct ParseTaskClassError(pub String);

impl FromStr for TaskClass {
    type Err = ParseTaskClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("foreground") {
            Ok(TaskClass::Foreground)
        } else if name.eq_ignore_ascii_case("background") {
            Ok(TaskClass::Background)
        } else {
            Err(ParseTaskClassError(s.to_string()))
        }
    }
}

/// A task to be scheduled.
///
/// # Time Representation
/// All times are in milliseconds relative to the simulation epoch (t=0).
/// `burst_ms` is the CPU time the task needs at full frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: String,
    /// Arrival time (ms).
    pub arrival_ms: i64,
    /// Nominal CPU demand at full frequency (ms).
    pub burst_ms: i64,
    /// Workload class.
    pub class: TaskClass,
    /// Display priority. Carried through, never consulted.
    pub priority: i32,
}

impl Task {
    /// Creates a foreground task arriving at t=0 with the given burst.
    pub fn new(id: impl Into<String>, burst_ms: i64) -> Self {
        Self {
            id: id.into(),
            arrival_ms: 0,
            burst_ms,
            class: TaskClass::Foreground,
            priority: 5,
        }
    }

    /// Creates a foreground task.
    pub fn foreground(id: impl Into<String>, arrival_ms: i64, burst_ms: i64) -> Self {
        Self::new(id, burst_ms).with_arrival(arrival_ms)
    }

    /// Creates a background task.
    pub fn background(id: impl Into<String>, arrival_ms: i64, burst_ms: i64) -> Self {
        Self::new(id, burst_ms)
            .with_arrival(arrival_ms)
            .with_class(TaskClass::Background)
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_ms: i64) -> Self {
        self.arrival_ms = arrival_ms;
        self
    }

    /// Sets the workload class.
    pub fn with_class(mut self, class: TaskClass) -> Self {
        self.class = class;
        self
    }

    /// Sets the display priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Frequency this task runs at under DVFS.
    #[inline]
    pub fn frequency(&self) -> f64 {
        self.class.frequency()
    }

    /// Wall-clock execution time at the assigned frequency (ms).
    ///
    /// Throttling stretches execution: a background task takes
    /// `burst / 0.6` ms.
    #[inline]
    pub fn execution_ms(&self) -> f64 {
        self.burst_ms as f64 / self.frequency()
    }
}
