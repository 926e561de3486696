//! Simulation configuration.
//!
//! Bounds the input layer enforces on task records. The scheduling
//! core takes no configuration.

use serde::{Deserialize, Serialize};

/// Input-layer configuration.
///
/// Bounds applied to task records before they reach the scheduler.
/// Frequencies are fixed by [`TaskClass`](crate::models::TaskClass) and
/// are not configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Lowest accepted priority.
    pub min_priority: i32,
    /// Highest accepted priority.
    pub max_priority: i32,
    /// Priority assigned when a record omits it.
    pub default_priority: i32,
}

impl SimulationConfig {
    /// Creates the default configuration (priorities 1-10, default 5).
    pub fn new() -> Self {
        Self {
            min_priority: 1,
            max_priority: 10,
            default_priority: 5,
        }
    }

    /// Sets the accepted priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.min_priority = min;
        self.max_priority = max;
        self
    }

    /// Sets the priority used when a record omits it.
    ///
    /// Validation checks this value against the priority range too.
    pub fn with_default_priority(mut self, priority: i32) -> Self {
        self.default_priority = priority;
        self
    }

    /// Whether `priority` lies within the accepted range.
    pub fn priority_in_range(&self, priority: i32) -> bool {
        (self.min_priority..=self.max_priority).contains(&priority)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}
