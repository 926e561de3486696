//! Energy totals for a scheduled workload.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::EnergyPolicy;
use crate::models::{ScheduledTask, TaskClass};

/// Per-task energy under both policies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskEnergy {
    /// Task identifier.
    pub task_id: String,
    /// Task class.
    pub class: TaskClass,
    /// Energy at full frequency.
    pub standard: f64,
    /// Energy under DVFS.
    pub dvfs: f64,
    /// `(standard - dvfs) / standard × 100`.
    pub savings_percent: f64,
}

/// Energy comparison between the standard and DVFS policies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnergyReport {
    /// Total energy with every task at full frequency.
    pub total_standard: f64,
    /// Total energy with background tasks throttled.
    pub total_dvfs: f64,
    /// Relative savings of DVFS over standard (%). Zero when
    /// `total_standard` is zero.
    pub savings_percent: f64,
    /// Per-task breakdown in schedule order.
    pub tasks: Vec<TaskEnergy>,
}

impl EnergyReport {
    /// Computes totals without annotating the tasks.
    pub fn calculate(scheduled: &[ScheduledTask]) -> Self {
        let tasks: Vec<TaskEnergy> = scheduled.iter().map(task_energy).collect();
        let total_standard: f64 = tasks.iter().map(|t| t.standard).sum();
        let total_dvfs: f64 = tasks.iter().map(|t| t.dvfs).sum();

        Self {
            total_standard,
            total_dvfs,
            savings_percent: savings_percent(total_standard, total_dvfs),
            tasks,
        }
    }

    /// Energy saved by DVFS in absolute units.
    pub fn saved(&self) -> f64 {
        self.total_standard - self.total_dvfs
    }
}

/// Computes the energy report and sets each task's `energy_consumed`
/// to its DVFS energy.
pub fn calculate_energy(scheduled: &mut [ScheduledTask]) -> EnergyReport {
    if scheduled.is_empty() {
        warn!("no tasks to calculate energy for");
        return EnergyReport::default();
    }

    let report = EnergyReport::calculate(scheduled);
    for (st, te) in scheduled.iter_mut().zip(&report.tasks) {
        st.energy_consumed = te.dvfs;
        debug!(
            task_id = %te.task_id,
            class = %te.class,
            standard = te.standard,
            dvfs = te.dvfs,
            savings_percent = te.savings_percent,
            "task energy"
        );
    }

    info!(
        total_standard = report.total_standard,
        total_dvfs = report.total_dvfs,
        savings_percent = report.savings_percent,
        "energy calculated"
    );

    report
}

fn task_energy(st: &ScheduledTask) -> TaskEnergy {
    let standard = EnergyPolicy::Standard.task_energy(&st.task);
    let dvfs = EnergyPolicy::Dvfs.task_energy(&st.task);

    TaskEnergy {
        task_id: st.task.id.clone(),
        class: st.task.class,
        standard,
        dvfs,
        savings_percent: savings_percent(standard, dvfs),
    }
}

fn savings_percent(standard: f64, dvfs: f64) -> f64 {
    if standard > 0.0 {
        (standard - dvfs) / standard * 100.0
    } else {
        0.0
    }
}
