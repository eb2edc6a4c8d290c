//! Count-up number animation that starts once its element becomes visible.

use backdrop_core::{FrameHandle, FrameScheduler};
use log::debug;

use crate::task::FrameTask;

/// Visible fraction at which the counter starts.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Default animation length.
pub const DEFAULT_DURATION_MS: u64 = 2000;

/// Quartic ease-out over `0.0..=1.0`.
pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

/// A number that eases from zero up to `end`.
#[derive(Debug)]
pub struct CountUp {
    end: u32,
    duration_ms: u64,
    suffix: String,
    value: u32,
    visible: bool,
    started_at: Option<u64>,
    task: FrameTask,
}

impl CountUp {
    pub fn new(end: u32, suffix: impl Into<String>) -> Self {
        Self {
            end,
            duration_ms: DEFAULT_DURATION_MS,
            suffix: suffix.into(),
            value: 0,
            visible: false,
            started_at: None,
            task: FrameTask::idle(),
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Current displayed value.
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the counter has reached `end` and stopped animating.
    pub fn is_finished(&self) -> bool {
        self.visible && self.value == self.end && !self.task.is_running()
    }

    pub fn frame(&self) -> Option<FrameHandle> {
        self.task.pending()
    }

    pub fn is_due(&self, fired: &[FrameHandle]) -> bool {
        self.task.is_due(fired)
    }

    /// Value followed by the suffix, e.g. `15+`.
    pub fn label(&self) -> String {
        format!("{}{}", self.value, self.suffix)
    }

    /// Report how much of the counter is on screen.
    ///
    /// The first report at or above [`VISIBILITY_THRESHOLD`] starts the
    /// animation; later reports are ignored. Returns `true` when this call
    /// started it.
    pub fn observe(&mut self, visible_fraction: f64, frames: &mut impl FrameScheduler) -> bool {
        if self.visible || !self.task.is_running() || visible_fraction < VISIBILITY_THRESHOLD {
            return false;
        }
        self.visible = true;
        self.task.reschedule(frames);
        debug!("counter to {}{} became visible", self.end, self.suffix);
        true
    }

    /// Advance to `timestamp_ms`. The first call after becoming visible
    /// fixes the start time.
    pub fn advance(&mut self, timestamp_ms: u64, frames: &mut impl FrameScheduler) {
        if !self.visible || !self.task.is_running() {
            return;
        }
        let start = *self.started_at.get_or_insert(timestamp_ms);
        let progress = timestamp_ms.saturating_sub(start);

        if progress < self.duration_ms {
            let t = progress as f64 / self.duration_ms as f64;
            self.value = (ease_out_quart(t) * self.end as f64).floor() as u32;
            self.task.reschedule(frames);
        } else {
            self.value = self.end;
            self.task.stop(frames);
        }
    }

    /// Cancel any pending frame. Safe to call more than once.
    pub fn teardown(&mut self, frames: &mut impl FrameScheduler) {
        self.task.stop(frames);
    }
}
