//! End-to-end simulation run.
//!
//! Chains the pipeline: schedule → energy → metrics → timeline, and
//! packs everything into one serializable report. Each run is
//! independent; nothing is retained between runs.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::SimulationConfig;
use crate::energy::{calculate_energy, EnergyReport};
use crate::error::SimError;
use crate::models::{ScheduledTask, Task};
use crate::scheduler::{FcfsScheduler, MetricsSummary};
use crate::timeline::Timeline;
use crate::validation::{parse_records, TaskRecord};
use crate::workload::WorkloadStats;

/// Result of one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Tasks in dispatch order, annotated with DVFS energy.
    pub scheduled: Vec<ScheduledTask>,
    /// Standard vs DVFS energy.
    pub energy: EnergyReport,
    /// Timing metrics.
    pub metrics: MetricsSummary,
    /// CPU timeline.
    pub timeline: Timeline,
    /// Input workload statistics.
    pub workload: WorkloadStats,
}

/// Simulation runner.
///
/// # Example
///
/// ```
/// use dvfs_sched::simulation::Simulation;
/// use dvfs_sched::workload::sample_tasks;
///
/// let report = Simulation::default().run(&sample_tasks());
/// assert_eq!(report.scheduled.len(), 4);
/// assert!(report.energy.savings_percent > 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    config: SimulationConfig,
    scheduler: FcfsScheduler,
}

impl Simulation {
    /// Creates a simulation with the given input configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            scheduler: FcfsScheduler::new(),
        }
    }

    /// Sets the scheduler.
    pub fn with_scheduler(mut self, scheduler: FcfsScheduler) -> Self {
        self.scheduler = scheduler;
        self
    }

    /// Input configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs the pipeline on validated tasks.
    pub fn run(&self, tasks: &[Task]) -> SimulationReport {
        let mut scheduled = self.scheduler.schedule(tasks);
        let energy = calculate_energy(&mut scheduled);
        let metrics = MetricsSummary::calculate(&scheduled);
        let timeline = Timeline::from_schedule(&scheduled);
        let workload = WorkloadStats::from_tasks(tasks);

        info!(
            tasks = scheduled.len(),
            makespan_ms = metrics.makespan_ms,
            avg_turnaround_ms = metrics.avg_turnaround_ms,
            avg_waiting_ms = metrics.avg_waiting_ms,
            savings_percent = energy.savings_percent,
            "simulation complete"
        );

        SimulationReport {
            scheduled,
            energy,
            metrics,
            timeline,
            workload,
        }
    }

    /// Validates raw records, then runs the pipeline.
    ///
    /// # Errors
    /// [`SimError::Validation`] if any record is rejected; nothing runs.
    pub fn run_records(&self, records: &[TaskRecord]) -> Result<SimulationReport, SimError> {
        let tasks = parse_records(records, &self.config)?;
        Ok(self.run(&tasks))
    }
}
