//! Non-preemptive First-Come-First-Served scheduler.
//!
//! # Algorithm
//!
//! 1. Stable-sort tasks by arrival time (ties keep submission order).
//! 2. Keep one CPU clock, starting at the configured start time.
//! 3. For each task, idle the clock forward to its arrival if needed,
//!    dispatch it, and advance the clock by its execution time.
//!
//! Execution time depends on the task's frequency class, so background
//! work occupies the CPU for `burst / 0.6` ms.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for dispatch.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.1

use tracing::{debug, warn};

use crate::models::{ScheduledTask, Task};

/// Single-CPU FCFS scheduler.
///
/// Priority is ignored: dispatch order is arrival order only.
///
/// # Example
///
/// ```
/// use dvfs_sched::models::Task;
/// use dvfs_sched::scheduler::FcfsScheduler;
///
/// let tasks = vec![
///     Task::foreground("P1", 0, 100),
///     Task::background("P2", 50, 150),
/// ];
/// let scheduled = FcfsScheduler::new().schedule(&tasks);
/// assert_eq!(scheduled.len(), 2);
/// assert_eq!(scheduled[1].start_ms, 100.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FcfsScheduler {
    start_time_ms: i64,
}

impl FcfsScheduler {
    /// Creates a scheduler whose CPU clock starts at t=0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial CPU clock.
    pub fn with_start_time(mut self, start_time_ms: i64) -> Self {
        self.start_time_ms = start_time_ms;
        self
    }

    /// Schedules tasks on the CPU.
    ///
    /// Returns one scheduled task per input task, in dispatch order.
    /// Callers must validate input first (arrival >= 0, burst > 0).
    pub fn schedule(&self, tasks: &[Task]) -> Vec<ScheduledTask> {
        if tasks.is_empty() {
            warn!("no tasks to schedule");
            return Vec::new();
        }

        let mut clock = self.start_time_ms as f64;
        let mut scheduled = Vec::with_capacity(tasks.len());

        for idx in arrival_order(tasks) {
            let task = &tasks[idx];
            let arrival = task.arrival_ms as f64;
            if clock < arrival {
                clock = arrival; // CPU idles until the task arrives
            }

            let st = ScheduledTask::dispatch(task.clone(), clock);
            clock = st.completion_ms;

            debug!(
                task_id = %st.id(),
                arrival_ms = task.arrival_ms,
                burst_ms = task.burst_ms,
                class = %task.class,
                frequency = st.frequency,
                start_ms = st.start_ms,
                completion_ms = st.completion_ms,
                response_ms = st.response_ms,
                "dispatched task"
            );

            scheduled.push(st);
        }

        scheduled
    }
}

/// Schedules tasks with a default [`FcfsScheduler`].
pub fn schedule(tasks: &[Task]) -> Vec<ScheduledTask> {
    FcfsScheduler::new().schedule(tasks)
}

/// Task indices sorted by arrival time. `sort_by_key` is stable, so
/// equal arrivals keep submission order.
fn arrival_order(tasks: &[Task]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..tasks.len()).collect();
    indices.sort_by_key(|&i| tasks[i].arrival_ms);
    indices
}
