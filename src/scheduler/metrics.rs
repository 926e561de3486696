//! Schedule performance metrics.
//!
//! Aggregates the per-task timing figures of a completed FCFS run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Turnaround | Mean of completion - arrival |
//! | Avg Waiting | Mean of turnaround - execution |
//! | Avg Response | Mean of start - arrival |
//! | Makespan | Latest completion time |
//! | CPU Utilization | Busy time / makespan |
//! | Throughput | Tasks completed per second of makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::ScheduledTask;

/// Aggregate timing metrics over a set of scheduled tasks.
///
/// All time values are in milliseconds. Every field is zero for an
/// empty set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    /// Mean turnaround time (ms).
    pub avg_turnaround_ms: f64,
    /// Mean waiting time (ms).
    pub avg_waiting_ms: f64,
    /// Mean response time (ms).
    pub avg_response_ms: f64,
    /// Latest completion time (ms).
    pub makespan_ms: f64,
    /// Fraction of the makespan the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Tasks completed per second of makespan.
    pub throughput_per_sec: f64,
}

impl MetricsSummary {
    /// Computes metrics from scheduled tasks.
    pub fn calculate(scheduled: &[ScheduledTask]) -> Self {
        if scheduled.is_empty() {
            return Self::default();
        }

        let n = scheduled.len() as f64;
        let mut total_turnaround = 0.0;
        let mut total_waiting = 0.0;
        let mut total_response = 0.0;
        let mut busy = 0.0;
        let mut makespan: f64 = 0.0;

        for st in scheduled {
            total_turnaround += st.turnaround_ms;
            total_waiting += st.waiting_ms;
            total_response += st.response_ms;
            busy += st.execution_ms;
            makespan = makespan.max(st.completion_ms);
        }

        let (cpu_utilization, throughput_per_sec) = if makespan > 0.0 {
            (busy / makespan, n * 1000.0 / makespan)
        } else {
            (0.0, 0.0)
        };

        Self {
            avg_turnaround_ms: total_turnaround / n,
            avg_waiting_ms: total_waiting / n,
            avg_response_ms: total_response / n,
            makespan_ms: makespan,
            cpu_utilization,
            throughput_per_sec,
        }
    }
}

/// Computes [`MetricsSummary`] for scheduled tasks.
pub fn get_metrics(scheduled: &[ScheduledTask]) -> MetricsSummary {
    MetricsSummary::calculate(scheduled)
}
