//! Gantt timeline of a scheduled run.
//!
//! Turns scheduled tasks into contiguous CPU segments, inserting idle
//! segments where the CPU waited for the next arrival.

use serde::{Deserialize, Serialize};

use crate::models::{ScheduledTask, TaskClass};

/// What the CPU is doing during a segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SegmentKind {
    /// Executing a task.
    Busy {
        /// Task identifier.
        task_id: String,
        /// Task class.
        class: TaskClass,
        /// Clock frequency.
        frequency: f64,
    },
    /// Waiting for the next arrival.
    Idle,
}

/// A `[start_ms, end_ms)` interval on the CPU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Segment start (ms).
    pub start_ms: f64,
    /// Segment end (ms).
    pub end_ms: f64,
    /// Busy or idle.
    #[serde(flatten)]
    pub kind: SegmentKind,
}

impl Segment {
    /// Length of the segment (ms).
    #[inline]
    pub fn duration_ms(&self) -> f64 {
        self.end_ms - self.start_ms
    }

    /// Whether the CPU is idle during this segment.
    pub fn is_idle(&self) -> bool {
        matches!(self.kind, SegmentKind::Idle)
    }

    /// Task identifier for busy segments.
    pub fn task_id(&self) -> Option<&str> {
        match &self.kind {
            SegmentKind::Busy { task_id, .. } => Some(task_id.as_str()),
            SegmentKind::Idle => None,
        }
    }
}

/// Ordered CPU timeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    /// Segments in time order.
    pub segments: Vec<Segment>,
}

impl Timeline {
    /// Builds the timeline from tasks in dispatch order.
    ///
    /// A gap before the first task is reported as idle from t=0.
    pub fn from_schedule(scheduled: &[ScheduledTask]) -> Self {
        let mut segments = Vec::with_capacity(scheduled.len() * 2);
        let mut cursor = 0.0;

        for st in scheduled {
            if st.start_ms > cursor {
                segments.push(Segment {
                    start_ms: cursor,
                    end_ms: st.start_ms,
                    kind: SegmentKind::Idle,
                });
            }
            segments.push(Segment {
                start_ms: st.start_ms,
                end_ms: st.completion_ms,
                kind: SegmentKind::Busy {
                    task_id: st.task.id.clone(),
                    class: st.task.class,
                    frequency: st.frequency,
                },
            });
            cursor = st.completion_ms;
        }

        Self { segments }
    }

    /// Busy segments only, in dispatch order.
    pub fn busy(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|s| !s.is_idle())
    }

    /// End of the last segment (ms).
    pub fn makespan_ms(&self) -> f64 {
        self.segments.last().map_or(0.0, |s| s.end_ms)
    }

    /// Total idle time (ms).
    pub fn idle_ms(&self) -> f64 {
        self.segments
            .iter()
            .filter(|s| s.is_idle())
            .map(Segment::duration_ms)
            .sum()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the timeline has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
