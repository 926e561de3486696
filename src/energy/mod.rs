//! DVFS energy model.
//!
//! Compares the energy of a scheduled workload under two policies:
//!
//! - **Standard**: every task runs at full frequency for its burst.
//! - **DVFS**: background tasks are throttled to 0.6 and run longer.
//!
//! # Energy Law
//!
//! Dynamic power scales with V² and V tracks f, so power ∝ f² and
//! `energy = execution_time × f²`. A throttled task runs `1/f` times
//! longer but draws `f²` of the power, so its energy drops to `f × burst`.
//!
//! # Usage
//!
//! ```
//! use dvfs_sched::energy::calculate_energy;
//! use dvfs_sched::models::Task;
//! use dvfs_sched::scheduler::schedule;
//!
//! let mut scheduled = schedule(&[Task::foreground("P1", 0, 100), Task::background("P2", 0, 100)]);
//! let report = calculate_energy(&mut scheduled);
//! assert_eq!(report.total_standard, 200.0);
//! assert!(report.total_dvfs < report.total_standard);
//! ```
//!
//! # References
//!
//! - Weiser et al. (1994), "Scheduling for Reduced CPU Energy"
//! - Rabaey (2003), "Digital Integrated Circuits", Ch. 5: dynamic power

mod report;

pub use report::{calculate_energy, EnergyReport, TaskEnergy};

use serde::{Deserialize, Serialize};

use crate::models::{Task, FULL_FREQUENCY};

/// Energy for running `execution_ms` at normalized `frequency`.
#[inline]
pub fn energy(execution_ms: f64, frequency: f64) -> f64 {
    execution_ms * frequency * frequency
}

/// Frequency-assignment policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnergyPolicy {
    /// All tasks at full frequency.
    Standard,
    /// Frequency follows the task class.
    Dvfs,
}

impl EnergyPolicy {
    /// Frequency a task runs at under this policy.
    pub fn frequency(self, task: &Task) -> f64 {
        match self {
            EnergyPolicy::Standard => FULL_FREQUENCY,
            EnergyPolicy::Dvfs => task.frequency(),
        }
    }

    /// Energy a task consumes under this policy.
    pub fn task_energy(self, task: &Task) -> f64 {
        let freq = self.frequency(task);
        energy(task.burst_ms as f64 / freq, freq)
    }
}
