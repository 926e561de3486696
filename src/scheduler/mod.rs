//! FCFS scheduler and metrics aggregation.
//!
//! # Algorithm
//!
//! `FcfsScheduler` dispatches tasks in arrival order on a single CPU,
//! without preemption. Each task runs for its burst scaled by the
//! inverse of its class frequency.
//!
//! # Metrics
//!
//! `MetricsSummary` computes mean turnaround, waiting and response time,
//! plus makespan, CPU utilization and throughput.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1.2

mod fcfs;
mod metrics;

pub use fcfs::{schedule, FcfsScheduler};
pub use metrics::{get_metrics, MetricsSummary};
