//! Component-owned frame schedule.

use backdrop_core::{FrameHandle, FrameScheduler};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum TaskState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// One callback is waiting for the next repaint.
    Scheduled(FrameHandle),
    /// Torn down; never schedules again.
    Stopped,
}

/// Handle to a self-sustaining animation schedule.
///
/// Holds at most one pending frame request. Every reschedule replaces the
/// previous request, and [`FrameTask::stop`] cancels it for good.
#[derive(Debug, Default)]
pub struct FrameTask {
    state: TaskState,
}

impl FrameTask {
    /// A task that has not requested any frame yet.
    pub fn idle() -> Self {
        Self::default()
    }

    /// A task with its first frame already requested.
    pub fn start(frames: &mut impl FrameScheduler) -> Self {
        let mut task = Self::idle();
        task.reschedule(frames);
        task
    }

    /// The pending frame request, if any.
    pub fn pending(&self) -> Option<FrameHandle> {
        match self.state {
            TaskState::Scheduled(handle) => Some(handle),
            _ => None,
        }
    }

    /// Whether the task has not been stopped.
    pub fn is_running(&self) -> bool {
        self.state != TaskState::Stopped
    }

    /// Whether the pending request is among the handles fired this repaint.
    pub fn is_due(&self, fired: &[FrameHandle]) -> bool {
        self.pending().is_some_and(|handle| fired.contains(&handle))
    }

    /// Request the next frame, cancelling any request still outstanding.
    /// Does nothing once stopped.
    pub fn reschedule(&mut self, frames: &mut impl FrameScheduler) {
        match self.state {
            TaskState::Stopped => return,
            TaskState::Scheduled(handle) => frames.cancel_frame(handle),
            TaskState::Idle => {}
        }
        self.state = TaskState::Scheduled(frames.request_frame());
    }

    /// Cancel the pending request and stop for good.
    ///
    /// Returns `false` if the task was already stopped.
    pub fn stop(&mut self, frames: &mut impl FrameScheduler) -> bool {
        match std::mem::replace(&mut self.state, TaskState::Stopped) {
            TaskState::Stopped => false,
            TaskState::Scheduled(handle) => {
                frames.cancel_frame(handle);
                true
            }
            TaskState::Idle => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backdrop_core::FrameQueue;

    #[test]
    fn test_start_requests_one_frame() {
        let mut frames = FrameQueue::new();
        let task = FrameTask::start(&mut frames);
        assert_eq!(frames.len(), 1);
        assert!(frames.is_pending(task.pending().unwrap()));
    }

    #[test]
    fn test_reschedule_keeps_single_request() {
        let mut frames = FrameQueue::new();
        let mut task = FrameTask::start(&mut frames);
        let first = task.pending().unwrap();

        // Reschedule before the first request fired.
        task.reschedule(&mut frames);
        assert_eq!(frames.len(), 1);
        assert!(!frames.is_pending(first));

        // Reschedule after the request fired.
        let fired = frames.drain();
        assert!(task.is_due(&fired));
        task.reschedule(&mut frames);
        assert_eq!(frames.len(), 1);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut frames = FrameQueue::new();
        let mut task = FrameTask::start(&mut frames);

        assert!(task.stop(&mut frames));
        assert!(frames.is_empty());
        assert!(!task.is_running());

        assert!(!task.stop(&mut frames));
        task.reschedule(&mut frames);
        assert!(frames.is_empty());
        assert_eq!(task.pending(), None);
    }
}
