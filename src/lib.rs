//! Single-CPU scheduling simulator with a DVFS energy model.
//!
//! Dispatches tasks First-Come-First-Served on one logical CPU, where each
//! task's clock frequency follows its class, then compares the energy of
//! the run against an all-full-frequency baseline.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `TaskClass`, `ScheduledTask`
//! - **`scheduler`**: FCFS dispatch and timing metrics (`MetricsSummary`)
//! - **`energy`**: Standard vs DVFS energy accounting (`EnergyReport`)
//! - **`timeline`**: Gantt segments including CPU idle gaps
//! - **`validation`**: Boundary checks turning `TaskRecord`s into `Task`s
//! - **`workload`**: Demo, random and JSON workloads; workload statistics
//! - **`simulation`**: One-shot pipeline producing a `SimulationReport`
//!
//! # Pipeline
//!
//! ```text
//! TaskRecord ─validate─▶ Task ─schedule─▶ ScheduledTask ─┬─▶ EnergyReport
//!                                                        ├─▶ MetricsSummary
//!                                                        └─▶ Timeline
//! ```
//!
//! The core (`schedule`, `calculate_energy`, `get_metrics`) is pure and
//! infallible; it assumes input already passed `validation`.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Weiser et al. (1994), "Scheduling for Reduced CPU Energy"

pub mod config;
pub mod energy;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod simulation;
pub mod timeline;
pub mod validation;
pub mod workload;

pub use config::SimulationConfig;
pub use error::SimError;
