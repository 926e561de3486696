//! Simulation domain models.
//!
//! Provides the data types exchanged with the scheduling core: input
//! tasks with their frequency class, and the scheduled tasks produced
//! by FCFS dispatch.
//!
//! # Frequency Classes
//!
//! | Class | Frequency | Execution time |
//! |-------|-----------|----------------|
//! | Foreground | 1.0 | burst |
//! | Background | 0.6 | burst / 0.6 |

mod scheduled;
mod task;

pub use scheduled::ScheduledTask;
pub use task::{ParseTaskClassError, Task, TaskClass, FULL_FREQUENCY, THROTTLED_FREQUENCY};
